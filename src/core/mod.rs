//! Core calculator types and logic.
//!
//! This module contains the pure core of the keypad calculator:
//! - The `Calculator` state machine and its derived `Phase`
//! - Operators and keypad-compatible number parsing and printing
//! - Display formatting
//! - Immutable phase history
//!
//! Nothing in this module sleeps, logs or touches I/O.

mod calculator;
mod display;
mod history;
pub mod number;
mod operator;
mod state;

pub use calculator::{Calculator, ComputeOutcome};
pub use display::{format_for_display, Display, NumberFormat, ERROR_MARKER};
pub use history::{StateHistory, StateTransition};
pub use operator::Operator;
pub use state::{Phase, State};
