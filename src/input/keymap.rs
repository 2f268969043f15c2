//! Key bindings.
//!
//! Maps key tokens to [`Input`] events. The scientific keypad adds functions,
//! memory keys, `^` and `mod`; in simple mode those keys are unavailable.

use thiserror::Error;

use super::Input;
use crate::calculator::{BinaryOp, Digit, MemoryOp, Mode, ScientificOp};

/// A key token that cannot be pressed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key: {0:?}")]
    Unknown(String),
    #[error("key {key:?} is not available in {mode} mode")]
    Unavailable { key: String, mode: Mode },
}

/// Resolve a key token against the active mode.
pub fn resolve(token: &str, mode: Mode) -> Result<Input, KeyError> {
    let input = lookup(token).ok_or_else(|| KeyError::Unknown(token.to_string()))?;

    if mode == Mode::Simple && input.is_scientific() {
        return Err(KeyError::Unavailable {
            key: token.to_string(),
            mode,
        });
    }

    Ok(input)
}

fn lookup(token: &str) -> Option<Input> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && let Ok(digit) = Digit::try_from(c)
    {
        return Some(Input::Digit(digit));
    }

    let input = match token {
        "." => Input::Decimal,
        "=" | "Enter" => Input::Equals,
        "Backspace" | "⌫" => Input::Backspace,
        "Escape" | "c" | "C" | "clear" => Input::Clear,
        "simple" => Input::SetMode(Mode::Simple),
        "scientific" => Input::SetMode(Mode::Scientific),
        _ => {
            return token
                .parse::<BinaryOp>()
                .map(Input::from)
                .or_else(|_| token.parse::<ScientificOp>().map(Input::from))
                .or_else(|_| token.parse::<MemoryOp>().map(Input::from))
                .ok();
        }
    };

    Some(input)
}
