//! Errors raised while computing a result.
//!
//! These never escape a transition: the engine turns them into a sentinel
//! display value. The `Display` text of each variant is exactly that sentinel.

use thiserror::Error;

/// A failed computation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Division by zero, either `÷` or `1/x`.
    #[error("Cannot divide by zero")]
    DivideByZero,
    /// Argument outside a function's domain (`sqrt` of a negative, `log`/`ln` of a non-positive).
    #[error("Invalid input")]
    InvalidInput,
}

impl CalcError {
    /// All error variants, in declaration order.
    pub const ALL: [CalcError; 2] = [CalcError::DivideByZero, CalcError::InvalidInput];

    /// Recognize a display value that holds an error sentinel.
    pub fn from_display(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|err| err.to_string() == text)
    }
}

/// Check whether a display value is one of the error sentinels.
pub fn is_error_text(text: &str) -> bool {
    CalcError::from_display(text).is_some()
}
