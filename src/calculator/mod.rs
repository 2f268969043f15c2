//! Calculator engine: a pure state machine driven one key press at a time.
//!
//! This module provides:
//! - The state snapshot carried between key presses
//! - One transition per kind of key (digit, operator, function, memory, ...)
//! - Number formatting for the display and expression line

mod engine;
mod error;
mod format;
mod ops;
mod state;

pub use engine::{
    backspace, clear, decimal, digit, equals, memory, operator, reduce, scientific, set_mode,
};
pub use error::{CalcError, is_error_text};
pub use format::{display_number, format_number, group_digits, parse_display};
pub use ops::{BinaryOp, Digit, MemoryOp, ParseError, ScientificOp, calculate};
pub use state::{CalculatorState, HistoryEntry, Mode, initial_state};
