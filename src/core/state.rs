//! Core State trait and the calculator's phases.
//!
//! States are plain values describing where the calculator currently sits
//! in its input cycle. They carry no data; the operands live in
//! [`Calculator`](super::Calculator) and the phase is derived from them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable to detect phase changes
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for logging
///
/// # Example
///
/// ```rust
/// use calcpad::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Key {
///     Up,
///     Down,
///     Stuck,
/// }
///
/// impl State for Key {
///     fn name(&self) -> &str {
///         match self {
///             Self::Up => "Up",
///             Self::Down => "Down",
///             Self::Stuck => "Stuck",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Stuck)
///     }
/// }
///
/// assert!(Key::Stuck.is_error());
/// assert!(!Key::Stuck.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

state_enum! {
    /// Position of the calculator in its input cycle.
    ///
    /// No phase is final: every phase accepts further input.
    #[derive(Copy, Eq)]
    pub enum Phase {
        /// Nothing typed, nothing pending.
        Idle,
        /// An operand is being typed with no operator pending.
        Accumulating,
        /// An operator has been chosen; the second operand is awaited or being typed.
        PendingOperator,
        /// A result is shown and the next digit starts a fresh number.
        Result,
        /// Division by zero was attempted.
        Error,
    }
    error: [Error]
}
