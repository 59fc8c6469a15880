//! Error types for Romcalc

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Malformed input: expected `<operand> <operator> <operand>`")]
    MalformedInput,

    #[error("Operands use different numbering systems")]
    MixedNumberingSystem,

    #[error("Invalid number: {operand}")]
    InvalidNumber { operand: String },

    #[error("Operand {value} is out of range: numbers must be between 1 and 10")]
    OutOfRange { value: i64 },

    #[error("Unsupported operator: {operator}")]
    UnsupportedOperator { operator: String },

    #[error("Roman numerals have no zero or negative values")]
    RomanBelowOne,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line editor error: {0}")]
    Readline(String),
}

/// Stable, machine-readable classification of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedInput,
    MixedNumberingSystem,
    InvalidNumber,
    OutOfRange,
    UnsupportedOperator,
    RomanBelowOne,
    Io,
    Readline,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MalformedInput => ErrorKind::MalformedInput,
            CalcError::MixedNumberingSystem => ErrorKind::MixedNumberingSystem,
            CalcError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            CalcError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CalcError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            CalcError::RomanBelowOne => ErrorKind::RomanBelowOne,
            CalcError::Io(_) => ErrorKind::Io,
            CalcError::Readline(_) => ErrorKind::Readline,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
