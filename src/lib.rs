//! Calcpad: a keypad calculator built on a pure state machine
//!
//! Calcpad follows the "pure core, imperative shell" split. The core
//! [`Calculator`] holds two string operands, a pending operator and a
//! reset flag, and every transition is a plain method on that owned value.
//! Timing, rendering and keyboard handling live in the [`session`] shell.
//!
//! # Core Concepts
//!
//! - **Calculator**: single-step binary arithmetic with chained evaluation
//! - **Phase**: coarse state-machine position derived from the calculator
//! - **Display**: the two strings a keypad front end shows
//! - **Session**: dispatches inputs, delays Compute for the "calculating"
//!   animation, and re-renders after every input
//!
//! # Example
//!
//! ```rust
//! use calcpad::core::{Calculator, Operator, Phase};
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('6');
//! calc.choose_operation(Operator::Add);
//! calc.append_digit('3');
//! assert_eq!(calc.phase(), Phase::PendingOperator);
//! assert_eq!(calc.render().previous, "6 +");
//!
//! calc.compute();
//! assert_eq!(calc.current_operand(), "9");
//! assert_eq!(calc.phase(), Phase::Result);
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use config::Settings;
pub use crate::core::{Calculator, Display, Operator, Phase, State};
pub use error::{ArithmeticError, ConfigError, InputError};
pub use input::{ButtonTag, Input, Keypad};
pub use session::{DisplaySink, Session};
