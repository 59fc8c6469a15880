//! Syntax types for a calculator line

use serde::Serialize;
use std::str::FromStr;

use crate::error::CalcError;

/// A line split into its three raw tokens.
///
/// Nothing about the tokens is validated yet: operands may turn out to be
/// unparseable and the operator may be unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub lhs: String,
    pub operator: String,
    pub rhs: String,
}

// ============================================================================
// Operators
// ============================================================================

/// Supported arithmetic operators, serialized as their symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Applies the operator with integer semantics.
    ///
    /// Division truncates toward zero. Callers guarantee a non-zero divisor.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(CalcError::UnsupportedOperator {
                operator: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
