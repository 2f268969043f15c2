//! calcpad - a keypad calculator engine.
//!
//! The engine is a pure state machine: every key press takes the current
//! [`CalculatorState`] and returns the next one. Failed computations show up as
//! an error on the display rather than as a Rust error.
//!
//! ```
//! use calcpad::{Input, Mode, initial_state, input::resolve, input::tokenize};
//!
//! let state = tokenize("2+3+4=")
//!     .into_iter()
//!     .map(|key| resolve(key, Mode::Simple).unwrap())
//!     .fold(initial_state(Mode::Simple), |state, input: Input| state.apply(input));
//!
//! assert_eq!(state.display_value, "9");
//! ```

pub mod calculator;
pub mod config;
pub mod input;
pub mod render;

pub use calculator::{CalculatorState, Mode, initial_state, reduce};
pub use input::Input;
