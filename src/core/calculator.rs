//! The calculator state machine.

use super::display::{Display, NumberFormat, ERROR_MARKER};
use super::number::{number_to_string, parse_float};
use super::operator::Operator;
use super::state::Phase;
use crate::error::ArithmeticError;
use serde::{Deserialize, Serialize};

/// What a call to [`Calculator::compute`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputeOutcome {
    /// The result replaced the current operand.
    Computed,
    /// The divisor was zero; the current operand is now the `Error` marker.
    DivisionByZero,
    /// No operator was pending or an operand was not a number. Nothing changed.
    Skipped,
}

/// Single-step binary calculator.
///
/// Holds the operand being typed, the left operand of a pending operation,
/// the pending operator, and a flag that makes the next digit start a fresh
/// number. Every operation is total: malformed input is ignored.
///
/// Operands are kept as text so the display can show exactly what was typed
/// (trailing zeros, a trailing decimal point) while it is being typed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    should_reset_screen: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator showing `0` with nothing pending.
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            operation: None,
            should_reset_screen: false,
        }
    }

    /// The operand being typed, or the last result.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The left operand of the pending operation; empty when none is pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operator, if any.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Whether the next digit starts a fresh number.
    pub fn should_reset_screen(&self) -> bool {
        self.should_reset_screen
    }

    /// Derive the current phase from the calculator fields.
    pub fn phase(&self) -> Phase {
        if self.current_operand == ERROR_MARKER {
            Phase::Error
        } else if self.should_reset_screen {
            Phase::Result
        } else if self.operation.is_some() {
            Phase::PendingOperator
        } else if self.current_operand == "0" && self.previous_operand.is_empty() {
            Phase::Idle
        } else {
            Phase::Accumulating
        }
    }

    /// Reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Remove the last character of the current operand.
    ///
    /// A single remaining character becomes `0`; `0` stays `0`.
    pub fn delete_last_digit(&mut self) {
        if self.current_operand == "0" {
            return;
        }
        if self.current_operand.chars().count() == 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Append a digit (`0`-`9`) or the decimal point to the current operand.
    ///
    /// After a result the operand is replaced instead of extended. A second
    /// decimal point and characters other than digits and `.` are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// for digit in ['0', '7', '.', '2', '.', '5'] {
    ///     calc.append_digit(digit);
    /// }
    /// assert_eq!(calc.current_operand(), "7.25");
    /// ```
    pub fn append_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            return;
        }

        if self.should_reset_screen {
            self.current_operand.clear();
            self.should_reset_screen = false;
        }

        if digit == '.' && self.current_operand.contains('.') {
            return;
        }

        if self.current_operand == "0" && digit != '.' {
            self.current_operand = digit.to_string();
        } else {
            self.current_operand.push(digit);
        }
    }

    /// Choose the operator to apply to the current operand.
    ///
    /// Ignored while the current operand is empty (right after choosing an
    /// operator). If an operation is already pending it is computed first,
    /// so `5 + 3 -` continues from `8`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::{Calculator, Operator};
    ///
    /// let mut calc = Calculator::new();
    /// calc.append_digit('5');
    /// calc.choose_operation(Operator::Add);
    /// calc.append_digit('3');
    /// calc.choose_operation(Operator::Subtract);
    ///
    /// assert_eq!(calc.previous_operand(), "8");
    /// assert_eq!(calc.operation(), Some(Operator::Subtract));
    /// assert_eq!(calc.current_operand(), "");
    /// ```
    pub fn choose_operation(&mut self, operator: Operator) {
        if self.current_operand.is_empty() {
            return;
        }

        if !self.previous_operand.is_empty() {
            self.compute();
        }

        self.operation = Some(operator);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Apply the pending operator to the two operands.
    ///
    /// On success the result replaces the current operand and the next
    /// digit starts a fresh number. Division by zero leaves the `Error`
    /// marker in the current operand without setting the reset flag, so a
    /// following digit is appended to the marker until Clear.
    pub fn compute(&mut self) -> ComputeOutcome {
        let Some(operator) = self.operation else {
            return ComputeOutcome::Skipped;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_float(&self.previous_operand),
            parse_float(&self.current_operand),
        ) else {
            return ComputeOutcome::Skipped;
        };

        match operator.apply(lhs, rhs) {
            Ok(value) => {
                self.current_operand = number_to_string(value);
                self.operation = None;
                self.previous_operand.clear();
                self.should_reset_screen = true;
                ComputeOutcome::Computed
            }
            Err(ArithmeticError::DivisionByZero) => {
                self.current_operand = ERROR_MARKER.to_string();
                self.previous_operand.clear();
                self.operation = None;
                ComputeOutcome::DivisionByZero
            }
        }
    }

    /// Render both display strings with the default number format.
    pub fn render(&self) -> Display {
        self.render_with(&NumberFormat::default())
    }

    /// Render both display strings with `format`.
    pub fn render_with(&self, format: &NumberFormat) -> Display {
        let previous = match self.operation {
            Some(operator) => format!("{} {}", format.format(&self.previous_operand), operator),
            None => String::new(),
        };
        Display {
            previous,
            current: format.format(&self.current_operand),
        }
    }
}
