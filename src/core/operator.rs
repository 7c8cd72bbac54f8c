//! Binary operators supported by the keypad.

use crate::error::ArithmeticError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
///
/// Operators are applied left to right with no precedence: the keypad
/// evaluates one pair of operands at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
    ];

    /// The symbol shown on the keypad and in the pending-operation line.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "%",
        }
    }

    /// Look up an operator by its keypad symbol.
    ///
    /// The typographic minus `−` is accepted alongside `-`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "×" => Some(Operator::Multiply),
            "÷" => Some(Operator::Divide),
            "%" => Some(Operator::Modulo),
            _ => None,
        }
    }

    /// Look up an operator by the ASCII key a keyboard produces for it.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            _ => None,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by zero (either signed zero) is an error. Modulo is the
    /// floating remainder, which takes the sign of `lhs` and is NaN for a
    /// zero divisor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::Operator;
    /// use calcpad::ArithmeticError;
    ///
    /// assert_eq!(Operator::Modulo.apply(-7.0, 3.0), Ok(-1.0));
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let value = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
            Operator::Modulo => lhs % rhs,
        };
        Ok(value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn keyboard_keys_map_to_operators() {
        assert_eq!(Operator::from_key('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('x'), None);
    }

    #[test]
    fn apply_covers_every_operator() {
        assert_eq!(Operator::Add.apply(6.0, 3.0), Ok(9.0));
        assert_eq!(Operator::Subtract.apply(6.0, 3.0), Ok(3.0));
        assert_eq!(Operator::Multiply.apply(6.0, 3.0), Ok(18.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Modulo.apply(7.5, 2.0), Ok(1.5));
    }

    #[test]
    fn divide_rejects_negative_zero() {
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn modulo_by_zero_is_nan() {
        let value = Operator::Modulo.apply(5.0, 0.0).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Operator::Divide.to_string(), "÷");
    }
}
