//! Number parsing and printing with keypad-compatible semantics.
//!
//! Operands are stored as the text the user typed (or the text of the last
//! result), so parsing is lenient: the longest numeric prefix wins and
//! anything without one is "not a number". Printing produces the shortest
//! round-trip form, switching to exponent notation outside `[1e-6, 1e21)`.

/// Parse the longest numeric prefix of `input`.
///
/// Returns `None` when there is no numeric prefix or the value is NaN.
/// A leading `Infinity` (optionally signed) parses to an infinity.
///
/// # Example
///
/// ```rust
/// use calcpad::core::number::parse_float;
///
/// assert_eq!(parse_float("12.5"), Some(12.5));
/// assert_eq!(parse_float("7."), Some(7.0));
/// assert_eq!(parse_float("3abc"), Some(3.0));
/// assert_eq!(parse_float("1e+21"), Some(1e21));
/// assert_eq!(parse_float("Error"), None);
/// assert_eq!(parse_float(""), None);
/// ```
pub fn parse_float(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Print a number the way a result is stored in the current operand.
///
/// # Example
///
/// ```rust
/// use calcpad::core::number::number_to_string;
///
/// assert_eq!(number_to_string(9.0), "9");
/// assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(1.5e-7), "1.5e-7");
/// assert_eq!(number_to_string(-0.0), "0");
/// assert_eq!(number_to_string(f64::NAN), "NaN");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Render the integer part of `value` with thousands grouping.
///
/// The value is rounded to zero fraction digits and printed with its
/// shortest round-trip digits, so large values never show binary noise.
/// Negative zero keeps its sign. Infinities render as `∞`.
///
/// # Example
///
/// ```rust
/// use calcpad::core::number::group_integer;
///
/// assert_eq!(group_integer(1234567.0, ","), "1,234,567");
/// assert_eq!(group_integer(-1000.0, "."), "-1.000");
/// assert_eq!(group_integer(999.0, ","), "999");
/// ```
pub fn group_integer(value: f64, separator: &str) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let digits = format!("{}", value.abs().round());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}")
}
