//! Operation sets understood by the engine.
//!
//! Binary operators, unary scientific functions and memory keys are each a
//! closed enum, so every dispatch is an exhaustive match.

use std::f64::consts;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::error::CalcError;

/// A token that does not name a known operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A single decimal digit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value, `0..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| ParseError::new("digit", c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A binary operator waiting for its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `a` raised to the power `b`.
    Power,
    /// Remainder; the sign follows the dividend.
    Modulo,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Power,
        BinaryOp::Modulo,
    ];

    /// The symbol shown in expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::Modulo => "mod",
        }
    }

    /// Whether the operator only exists on the scientific keypad.
    pub fn is_scientific(self) -> bool {
        matches!(self, Self::Power | Self::Modulo)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            "mod" | "%" => Ok(Self::Modulo),
            other => Err(ParseError::new("operator", other)),
        }
    }
}

/// Apply a binary operator.
pub fn calculate(a: f64, b: f64, op: BinaryOp) -> Result<f64, CalcError> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Subtract => Ok(a - b),
        BinaryOp::Multiply => Ok(a * b),
        BinaryOp::Divide if b == 0.0 => Err(CalcError::DivideByZero),
        BinaryOp::Divide => Ok(a / b),
        BinaryOp::Power => Ok(a.powf(b)),
        BinaryOp::Modulo => Ok(a % b),
    }
}

/// A unary function on the scientific keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScientificOp {
    /// Sine, in radians.
    Sin,
    /// Cosine, in radians.
    Cos,
    /// Tangent, in radians.
    Tan,
    Sqrt,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Square,
    Cube,
    /// `1/x`
    Reciprocal,
    /// `+/-`
    Negate,
    /// `e^x`
    Exp,
    Pi,
    E,
}

impl ScientificOp {
    pub const ALL: [ScientificOp; 13] = [
        ScientificOp::Sin,
        ScientificOp::Cos,
        ScientificOp::Tan,
        ScientificOp::Sqrt,
        ScientificOp::Log,
        ScientificOp::Ln,
        ScientificOp::Square,
        ScientificOp::Cube,
        ScientificOp::Reciprocal,
        ScientificOp::Negate,
        ScientificOp::Exp,
        ScientificOp::Pi,
        ScientificOp::E,
    ];

    /// Key name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Reciprocal => "1/x",
            Self::Negate => "+/-",
            Self::Exp => "exp",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Constants ignore the display and are not logged to history.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// Evaluate the function at `x`. Constants ignore `x`.
    pub fn apply(self, x: f64) -> Result<f64, CalcError> {
        match self {
            Self::Sin => Ok(x.sin()),
            Self::Cos => Ok(x.cos()),
            Self::Tan => Ok(x.tan()),
            Self::Sqrt if x < 0.0 => Err(CalcError::InvalidInput),
            Self::Sqrt => Ok(x.sqrt()),
            Self::Log | Self::Ln if x <= 0.0 => Err(CalcError::InvalidInput),
            Self::Log => Ok(x.log10()),
            Self::Ln => Ok(x.ln()),
            Self::Square => Ok(x * x),
            Self::Cube => Ok(x * x * x),
            Self::Reciprocal if x == 0.0 => Err(CalcError::DivideByZero),
            Self::Reciprocal => Ok(1.0 / x),
            Self::Negate => Ok(-x),
            Self::Exp => Ok(x.exp()),
            Self::Pi => Ok(consts::PI),
            Self::E => Ok(consts::E),
        }
    }

    /// Render the expression line for this function applied to `operand`.
    pub fn render(self, operand: &str) -> String {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Sqrt | Self::Log | Self::Ln | Self::Exp => {
                format!("{}({})", self.name(), operand)
            }
            Self::Square => format!("({})²", operand),
            Self::Cube => format!("({})³", operand),
            Self::Reciprocal => format!("1/({})", operand),
            Self::Negate => format!("negate({})", operand),
            Self::Pi => "π".to_string(),
            Self::E => "e".to_string(),
        }
    }
}

impl fmt::Display for ScientificOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "sqrt" | "√" => Ok(Self::Sqrt),
            "log" => Ok(Self::Log),
            "ln" => Ok(Self::Ln),
            "square" | "x²" => Ok(Self::Square),
            "cube" | "x³" => Ok(Self::Cube),
            "1/x" => Ok(Self::Reciprocal),
            "+/-" => Ok(Self::Negate),
            "exp" | "e^x" => Ok(Self::Exp),
            "pi" | "π" => Ok(Self::Pi),
            "e" => Ok(Self::E),
            other => Err(ParseError::new("function", other)),
        }
    }
}

/// A memory key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    /// `M+`
    Add,
    /// `M-`
    Subtract,
    /// `MR`
    Recall,
    /// `MC`
    Clear,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "M+",
            Self::Subtract => "M-",
            Self::Recall => "MR",
            Self::Clear => "MC",
        }
    }
}

impl fmt::Display for MemoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemoryOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M+" => Ok(Self::Add),
            "M-" => Ok(Self::Subtract),
            "MR" => Ok(Self::Recall),
            "MC" => Ok(Self::Clear),
            other => Err(ParseError::new("memory key", other)),
        }
    }
}
