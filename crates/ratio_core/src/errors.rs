//! Error types for the rational core.
//!
//! Everything here is recoverable. The trapping operators convert an
//! `ArithmeticError` into a panic at the public call boundary only.

use core::fmt;

use thiserror::Error;

/// Public operation that produced an `ArithmeticError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Construct,
    Mixed,
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    Abs,
    Reciprocal,
    Sum,
    Product,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Construct => "construct",
            Operation::Mixed => "mixed",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Negate => "negate",
            Operation::Abs => "abs",
            Operation::Reciprocal => "reciprocal",
            Operation::Sum => "sum",
            Operation::Product => "product",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a reporting (checked) arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The exact result is not representable in the backing width.
    #[error("arithmetic overflow in {0}")]
    Overflow(Operation),

    /// Zero divisor, zero denominator, or reciprocal of zero.
    #[error("division by zero in {0}")]
    DivisionByZero(Operation),
}

impl ArithmeticError {
    pub fn operation(self) -> Operation {
        match self {
            ArithmeticError::Overflow(op) | ArithmeticError::DivisionByZero(op) => op,
        }
    }
}

pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Why a string was rejected by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Empty input, or a sign or slash with no digits around it.
    Empty,
    /// Wrong shape: whitespace, misplaced sign, extra separators, stray characters.
    Malformed,
    /// An alphanumeric character that is not a digit in the requested radix.
    InvalidDigit,
    /// Numerator or denominator outside the backing integer's range.
    OutOfRange,
    /// Explicit `/0`.
    ZeroDenominator,
    /// Radix outside `2..=36`.
    InvalidRadix,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("invalid rational literal: {}", kind_text(.kind))]
pub struct ParseRationalError {
    pub(crate) kind: ParseErrorKind,
}

fn kind_text(kind: &ParseErrorKind) -> &'static str {
    match kind {
        ParseErrorKind::Empty => "no digits",
        ParseErrorKind::Malformed => "malformed",
        ParseErrorKind::InvalidDigit => "digit out of range for radix",
        ParseErrorKind::OutOfRange => "magnitude out of range",
        ParseErrorKind::ZeroDenominator => "zero denominator",
        ParseErrorKind::InvalidRadix => "radix must be in 2..=36",
    }
}

impl ParseRationalError {
    pub(crate) fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Conversion of a rational to a plain integer failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum TryFromRationalError {
    #[error("value has a fractional part")]
    NotAnInteger,
    #[error("value out of range for the target integer type")]
    OutOfRange,
}

/// A `SamplePolicy` that cannot produce any value for the backing width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SampleError {
    #[error("max_denominator {0} is zero or exceeds the backing width")]
    MaxDenominatorOutOfRange(u64),
    #[error("policy admits no value (max_denominator 1 excluding both zero and one)")]
    EmptyRange,
}
