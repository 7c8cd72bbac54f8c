//! Keypad and keyboard input.
//!
//! Buttons carry semantic tags (a number, an operation symbol, or an
//! action name) and keyboard keys carry key names. Both are translated
//! into [`Input`] values which the session applies to the calculator.

use crate::core::{Calculator, Operator};
use crate::error::InputError;
use serde::{Deserialize, Serialize};

/// A single user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    Operator(Operator),
    Equals,
    Delete,
    Clear,
}

impl Input {
    /// Map a keyboard key name to an input.
    ///
    /// Returns `None` for keys the keypad ignores.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::Operator;
    /// use calcpad::Input;
    ///
    /// assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
    /// assert_eq!(Input::from_key("*"), Some(Input::Operator(Operator::Multiply)));
    /// assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
    /// assert_eq!(Input::from_key("Backspace"), Some(Input::Delete));
    /// assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
    /// assert_eq!(Input::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Input::Equals),
            "Backspace" => return Some(Input::Delete),
            "Escape" => return Some(Input::Clear),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if c.is_ascii_digit() || c == '.' {
            Some(Input::Digit(c))
        } else {
            Operator::from_key(c).map(Input::Operator)
        }
    }

    /// Short label used in logs and history.
    pub fn label(&self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Operator(op) => op.symbol().to_string(),
            Input::Equals => "=".to_string(),
            Input::Delete => "DEL".to_string(),
            Input::Clear => "AC".to_string(),
        }
    }

    /// Apply this input to `calc`.
    pub fn apply_to(self, calc: &mut Calculator) {
        match self {
            Input::Digit(d) => calc.append_digit(d),
            Input::Operator(op) => calc.choose_operation(op),
            Input::Equals => {
                calc.compute();
            }
            Input::Delete => calc.delete_last_digit(),
            Input::Clear => calc.clear(),
        }
    }
}

/// Semantic tag attached to a keypad button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonTag {
    /// A digit or `.`.
    Number(String),
    /// An operator symbol: `+`, `-`, `×`, `÷`, `%`.
    Operation(String),
    /// One of `equals`, `delete`, `clear`.
    Action(String),
}

impl TryFrom<&ButtonTag> for Input {
    type Error = InputError;

    fn try_from(tag: &ButtonTag) -> Result<Self, Self::Error> {
        match tag {
            ButtonTag::Number(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => Ok(Input::Digit(c)),
                    _ => Err(InputError::UnknownNumber(value.clone())),
                }
            }
            ButtonTag::Operation(symbol) => Operator::from_symbol(symbol)
                .map(Input::Operator)
                .ok_or_else(|| InputError::UnknownOperation(symbol.clone())),
            ButtonTag::Action(action) => match action.as_str() {
                "equals" => Ok(Input::Equals),
                "delete" => Ok(Input::Delete),
                "clear" => Ok(Input::Clear),
                _ => Err(InputError::UnknownAction(action.clone())),
            },
        }
    }
}

impl TryFrom<ButtonTag> for Input {
    type Error = InputError;

    fn try_from(tag: ButtonTag) -> Result<Self, Self::Error> {
        Input::try_from(&tag)
    }
}

/// A keypad button: its label, tag and grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub tag: ButtonTag,
    pub row: usize,
    pub col: usize,
    /// Number of grid columns the button spans.
    pub span: usize,
}

impl Button {
    fn new(label: &'static str, tag: ButtonTag, row: usize, col: usize) -> Self {
        Self {
            label,
            tag,
            row,
            col,
            span: 1,
        }
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }
}

/// Keypad layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<Button>,
}

impl Keypad {
    pub const COLUMNS: usize = 4;

    /// The standard four-column keypad.
    ///
    /// ```text
    /// AC  DEL  %  ÷
    /// 7   8    9  ×
    /// 4   5    6  -
    /// 1   2    3  +
    /// 0        .  =
    /// ```
    pub fn standard() -> Self {
        let number = |s: &str| ButtonTag::Number(s.to_string());
        let operation = |s: &str| ButtonTag::Operation(s.to_string());
        let action = |s: &str| ButtonTag::Action(s.to_string());

        let buttons = vec![
            Button::new("AC", action("clear"), 0, 0),
            Button::new("DEL", action("delete"), 0, 1),
            Button::new("%", operation("%"), 0, 2),
            Button::new("÷", operation("÷"), 0, 3),
            Button::new("7", number("7"), 1, 0),
            Button::new("8", number("8"), 1, 1),
            Button::new("9", number("9"), 1, 2),
            Button::new("×", operation("×"), 1, 3),
            Button::new("4", number("4"), 2, 0),
            Button::new("5", number("5"), 2, 1),
            Button::new("6", number("6"), 2, 2),
            Button::new("-", operation("-"), 2, 3),
            Button::new("1", number("1"), 3, 0),
            Button::new("2", number("2"), 3, 1),
            Button::new("3", number("3"), 3, 2),
            Button::new("+", operation("+"), 3, 3),
            Button::new("0", number("0"), 4, 0).wide(2),
            Button::new(".", number("."), 4, 2),
            Button::new("=", action("equals"), 4, 3),
        ];

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Find a button by its label.
    pub fn button(&self, label: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Number of rows in the layout.
    pub fn rows(&self) -> usize {
        self.buttons.iter().map(|b| b.row + 1).max().unwrap_or(0)
    }

    /// Render the layout as text, one line per row.
    pub fn render_text(&self, cell_width: usize) -> String {
        let mut lines = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let mut cells: Vec<&Button> = self.buttons.iter().filter(|b| b.row == row).collect();
            cells.sort_by_key(|b| b.col);

            let mut line = String::new();
            let mut col = 0;
            for button in cells {
                while col < button.col {
                    line.push_str(&" ".repeat(cell_width));
                    col += 1;
                }
                let width = cell_width * button.span;
                line.push_str(&format!("[{:^w$}]", button.label, w = width.saturating_sub(2)));
                col += button.span;
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_digit_key_maps_to_digit() {
        for c in "0123456789.".chars() {
            assert_eq!(Input::from_key(&c.to_string()), Some(Input::Digit(c)));
        }
    }

    #[test]
    fn operator_keys_map_to_operators() {
        assert_eq!(Input::from_key("+"), Some(Input::Operator(Operator::Add)));
        assert_eq!(Input::from_key("-"), Some(Input::Operator(Operator::Subtract)));
        assert_eq!(Input::from_key("*"), Some(Input::Operator(Operator::Multiply)));
        assert_eq!(Input::from_key("/"), Some(Input::Operator(Operator::Divide)));
        assert_eq!(Input::from_key("%"), Some(Input::Operator(Operator::Modulo)));
    }

    #[test]
    fn action_keys_map_to_actions() {
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Delete));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(Input::from_key(""), None);
        assert_eq!(Input::from_key("x"), None);
        assert_eq!(Input::from_key("×"), None);
        assert_eq!(Input::from_key("12"), None);
        assert_eq!(Input::from_key("Shift"), None);
    }

    #[test]
    fn button_tags_convert() {
        assert_eq!(
            Input::try_from(ButtonTag::Number("4".into())),
            Ok(Input::Digit('4'))
        );
        assert_eq!(
            Input::try_from(ButtonTag::Operation("÷".into())),
            Ok(Input::Operator(Operator::Divide))
        );
        assert_eq!(
            Input::try_from(ButtonTag::Action("equals".into())),
            Ok(Input::Equals)
        );
    }

    #[test]
    fn unknown_button_tags_are_errors() {
        assert_eq!(
            Input::try_from(ButtonTag::Number("12".into())),
            Err(InputError::UnknownNumber("12".into()))
        );
        assert_eq!(
            Input::try_from(ButtonTag::Operation("^".into())),
            Err(InputError::UnknownOperation("^".into()))
        );
        assert_eq!(
            Input::try_from(ButtonTag::Action("undo".into())),
            Err(InputError::UnknownAction("undo".into()))
        );
    }

    #[test]
    fn standard_keypad_tags_are_all_valid() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.buttons().len(), 19);
        for button in keypad.buttons() {
            assert!(Input::try_from(&button.tag).is_ok(), "{}", button.label);
        }
    }

    #[test]
    fn standard_keypad_layout() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.rows(), 5);
        assert_eq!(keypad.button("0").map(|b| b.span), Some(2));
        assert_eq!(keypad.button("=").map(|b| (b.row, b.col)), Some((4, 3)));
        assert!(keypad.button("^").is_none());
    }

    #[test]
    fn keypad_renders_rows() {
        let text = Keypad::standard().render_text(5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[AC ][DEL][ % ][ ÷ ]");
        assert_eq!(lines[4], "[   0    ][ . ][ = ]");
    }

    #[test]
    fn labels_are_short() {
        assert_eq!(Input::Digit('.').label(), ".");
        assert_eq!(Input::Operator(Operator::Multiply).label(), "×");
        assert_eq!(Input::Clear.label(), "AC");
    }

    #[test]
    fn apply_routes_to_calculator() {
        let mut calc = Calculator::new();
        for input in [
            Input::Digit('6'),
            Input::Operator(Operator::Add),
            Input::Digit('3'),
            Input::Equals,
        ] {
            input.apply_to(&mut calc);
        }
        assert_eq!(calc.current_operand(), "9");

        Input::Clear.apply_to(&mut calc);
        assert_eq!(calc, Calculator::new());
    }
}
