//! Key script tokenization.
//!
//! Splits text such as `12+3=` or `4 +/- sqrt` into individual key tokens.
//! Whitespace separates tokens but is never required between them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One key per match. Multi-character keys come before the single
    /// characters they start with; any other character is its own token so
    /// the keymap can report it.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?x)
        \+/- | 1/x | e\^x | x² | x³ | M[-+RC]
        | [0-9] | \. | [-+*/×÷^%=√π⌫]
        | [A-Za-z]+
        | \S"
    ).unwrap();
}

/// Split a key script into key tokens.
pub fn tokenize(script: &str) -> Vec<&str> {
    KEY_TOKEN.find_iter(script).map(|m| m.as_str()).collect()
}
