//! Calculator state snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::is_error_text;
use super::ops::{BinaryOp, ParseError};

/// Which keypad is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Simple,
    Scientific,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Scientific => "scientific",
        }
    }

    /// Whether history is recorded in this mode.
    pub fn keeps_history(self) -> bool {
        matches!(self, Self::Scientific)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "scientific" => Ok(Self::Scientific),
            _ => Err(ParseError::new("mode", s)),
        }
    }
}

/// One completed operation, as shown in the history panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Rendered expression, e.g. `"2 + 3 ="` or `"sin(30)"`.
    pub expression: String,
    /// Rendered result.
    pub result: String,
}

/// Everything the calculator knows between two key presses.
///
/// Transitions consume a state and return its replacement; no field is
/// updated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand captured before the pending operator.
    pub first_operand: Option<f64>,
    /// Carried for front ends that display it; no transition reads or writes it.
    pub second_operand: Option<f64>,
    /// Pending binary operator. Only set together with `first_operand`.
    #[serde(with = "operator_symbol")]
    pub current_operator: Option<BinaryOp>,
    /// Text on the main display: a numeric literal or an error sentinel.
    pub display_value: String,
    /// The next digit starts a new number instead of appending.
    pub waiting_for_second_operand: bool,
    /// Trace of the last operation, shown above the display.
    pub expression_string: String,
    pub mode: Mode,
    /// Completed operations, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Memory register for `M+`, `M-`, `MR` and `MC`.
    pub memory: f64,
}

impl CalculatorState {
    /// A fresh session in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            first_operand: None,
            second_operand: None,
            current_operator: None,
            display_value: "0".to_string(),
            waiting_for_second_operand: false,
            expression_string: String::new(),
            mode,
            history: Vec::new(),
            memory: 0.0,
        }
    }

    /// Whether the display holds an error sentinel.
    pub fn is_error(&self) -> bool {
        is_error_text(&self.display_value)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

/// Zero-value state for a new session.
pub fn initial_state(mode: Mode) -> CalculatorState {
    CalculatorState::new(mode)
}

/// Serialize the pending operator by its keypad symbol.
mod operator_symbol {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calculator::ops::BinaryOp;

    pub fn serialize<S: Serializer>(
        op: &Option<BinaryOp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match op {
            Some(op) => serializer.serialize_some(op.symbol()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BinaryOp>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|symbol| symbol.parse().map_err(D::Error::custom))
            .transpose()
    }
}
