//! Display formatting for the two keypad display slots.

use super::number::{group_integer, parse_float};
use serde::{Deserialize, Serialize};

/// Marker shown in place of a result after division by zero.
pub const ERROR_MARKER: &str = "Error";

/// The two strings a keypad front end shows after every input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// The pending left operand and operator, e.g. `"1,200 ×"`, or empty.
    pub previous: String,
    /// The operand being typed or the last result.
    pub current: String,
}

/// Number formatting rules for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    group_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
        }
    }
}

impl NumberFormat {
    /// Create a format grouping thousands with `separator`.
    pub fn with_group_separator(separator: impl Into<String>) -> Self {
        Self {
            group_separator: separator.into(),
        }
    }

    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    /// Format an operand string for display.
    ///
    /// The `Error` marker passes through. Otherwise the integer part is
    /// grouped (and dropped if it is not a number) and the fraction part is
    /// appended verbatim.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.format("1234567"), "1,234,567");
    /// assert_eq!(format.format("1234.5000"), "1,234.5000");
    /// assert_eq!(format.format("Error"), "Error");
    /// assert_eq!(format.format(""), "");
    /// ```
    pub fn format(&self, value: &str) -> String {
        if value == ERROR_MARKER {
            return value.to_string();
        }

        let (integer, fraction) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None),
        };

        let integer_display = parse_float(integer)
            .map(|number| group_integer(number, &self.group_separator))
            .unwrap_or_default();

        match fraction {
            Some(fraction) => format!("{integer_display}.{fraction}"),
            None => integer_display,
        }
    }
}

/// Format an operand with the default `,` grouping.
///
/// # Example
///
/// ```rust
/// use calcpad::core::format_for_display;
///
/// assert_eq!(format_for_display("12.5"), "12.5");
/// ```
pub fn format_for_display(value: &str) -> String {
    NumberFormat::default().format(value)
}
