//! Plain-text rendering of a calculator state.
//!
//! Lays the state out top to bottom the way the keypad display does:
//! memory indicator, history panel, expression line, then the main display.

use crate::calculator::{CalculatorState, format_number, group_digits};
use crate::config::Config;

/// What to include when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Insert thousands separators into the main display.
    pub group_digits: bool,
    /// Show the history panel, newest entry first.
    pub show_history: bool,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            group_digits: config.group_digits,
            show_history: config.show_history,
        }
    }
}

/// Render the state as display lines.
pub fn render(state: &CalculatorState, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    if state.memory != 0.0 {
        lines.push(format!("M: {}", format_number(state.memory)));
    }

    if options.show_history && !state.history.is_empty() {
        for entry in state.history.iter().rev() {
            lines.push(format!("  {}", entry.expression));
            lines.push(format!("  = {}", entry.result));
        }
        lines.push(String::new());
    }

    // An empty expression line still shows something so the layout doesn't jump.
    let expression = if state.expression_string.is_empty() {
        "0"
    } else {
        &state.expression_string
    };
    lines.push(expression.to_string());

    let display = if options.group_digits {
        group_digits(&state.display_value)
    } else {
        state.display_value.clone()
    };
    lines.push(display);

    lines.join("\n")
}
