//! Input events and keyboard bindings.
//!
//! A front end turns key presses into [`Input`] events, either directly or by
//! tokenizing a key script and resolving each token against the active mode.

mod keymap;
mod tokens;

pub use keymap::{KeyError, resolve};
pub use tokens::tokenize;

use crate::calculator::{BinaryOp, Digit, MemoryOp, Mode, ScientificOp};

/// One key press, as understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A digit key, `0`-`9`
    Digit(Digit),
    /// The decimal point
    Decimal,
    /// Delete the last typed character
    Backspace,
    /// A binary operator (`+ - × ÷ ^ mod`)
    Operator(BinaryOp),
    /// Complete the pending operation
    Equals,
    /// Reset the calculation
    Clear,
    /// A unary function or constant
    Scientific(ScientificOp),
    /// A memory key
    Memory(MemoryOp),
    /// Switch keypads
    SetMode(Mode),
}

impl Input {
    /// Check if this key only exists on the scientific keypad.
    pub fn is_scientific(&self) -> bool {
        match self {
            Self::Operator(op) => op.is_scientific(),
            Self::Scientific(_) | Self::Memory(_) => true,
            _ => false,
        }
    }
}

// Convenient From implementations

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<BinaryOp> for Input {
    fn from(op: BinaryOp) -> Self {
        Self::Operator(op)
    }
}

impl From<ScientificOp> for Input {
    fn from(op: ScientificOp) -> Self {
        Self::Scientific(op)
    }
}

impl From<MemoryOp> for Input {
    fn from(op: MemoryOp) -> Self {
        Self::Memory(op)
    }
}

impl From<Mode> for Input {
    fn from(mode: Mode) -> Self {
        Self::SetMode(mode)
    }
}
