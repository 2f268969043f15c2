//! Number rendering for the display and expression line.

use super::error::is_error_text;

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a result for the display.
///
/// Uses the shortest representation that parses back to the same `f64`.
/// Very large and very small magnitudes use exponent notation (`1e21`,
/// `1.5e-7`), `-0` renders as `0`, and non-finite values render as
/// `Infinity`, `-Infinity` or `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Read the number a display value holds.
///
/// Partial entries such as `"3."` or `"0."` are numbers; error sentinels
/// and anything else non-numeric are not.
pub fn parse_display(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// The operand a transition reads from the display. Non-numeric text counts as zero.
pub fn display_number(text: &str) -> f64 {
    parse_display(text).unwrap_or(0.0)
}

/// Insert thousands separators into the integer part of a numeric display value.
///
/// The text is otherwise untouched, so `"1234."` becomes `"1,234."`. Error
/// sentinels and exponent forms are returned as they are.
pub fn group_digits(text: &str) -> String {
    if is_error_text(text) || parse_display(text).is_none() || text.contains(['e', 'E']) {
        return text.to_string();
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let split = unsigned.find('.').unwrap_or(unsigned.len());
    let (int_part, rest) = unsigned.split_at(split);

    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{}{}", sign, grouped, rest)
}
