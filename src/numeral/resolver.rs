//! Numeral resolver: classify operands, convert them and check their range

use serde::Serialize;
use tracing::debug;

use crate::error::{CalcError, Result};
use crate::numeral::roman::{from_roman, is_roman};
use crate::parser::OperationRequest;

/// Smallest accepted operand
pub const MIN_OPERAND: i64 = 1;
/// Largest accepted operand
pub const MAX_OPERAND: i64 = 10;

/// The notation an operand, and therefore a result, is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

impl NumeralSystem {
    pub fn classify(token: &str) -> Self {
        if is_roman(token) {
            NumeralSystem::Roman
        } else {
            NumeralSystem::Arabic
        }
    }

    /// Reads a token written in this system as an integer
    pub fn read(self, token: &str) -> Result<i64> {
        match self {
            NumeralSystem::Roman => Ok(from_roman(token)),
            NumeralSystem::Arabic => token.parse::<i64>().map_err(|_| CalcError::InvalidNumber {
                operand: token.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "roman"),
            NumeralSystem::Arabic => write!(f, "arabic"),
        }
    }
}

/// Operands converted to integers, sharing one numbering system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOperation {
    pub system: NumeralSystem,
    pub lhs: i64,
    pub rhs: i64,
    /// Raw operator token, validated by the evaluator
    pub operator: String,
}

/// Resolve both operands of a request.
///
/// Checks run in order and stop at the first failure: mixed systems,
/// unparseable Arabic operands (left first), then the operand range.
pub fn resolve(request: &OperationRequest) -> Result<ResolvedOperation> {
    let system = NumeralSystem::classify(&request.lhs);
    if NumeralSystem::classify(&request.rhs) != system {
        return Err(CalcError::MixedNumberingSystem);
    }

    let lhs = system.read(&request.lhs)?;
    let rhs = system.read(&request.rhs)?;
    debug!(%system, lhs, rhs, "resolved operands");

    for value in [lhs, rhs] {
        check_range(value)?;
    }

    Ok(ResolvedOperation {
        system,
        lhs,
        rhs,
        operator: request.operator.clone(),
    })
}

fn check_range(value: i64) -> Result<()> {
    if (MIN_OPERAND..=MAX_OPERAND).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::OutOfRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn resolve_line(line: &str) -> Result<ResolvedOperation> {
        resolve(&parse_line(line).unwrap())
    }

    #[test]
    fn test_resolve_arabic() {
        let op = resolve_line("3 + 10").unwrap();
        assert_eq!(op.system, NumeralSystem::Arabic);
        assert_eq!((op.lhs, op.rhs), (3, 10));
        assert_eq!(op.operator, "+");
    }

    #[test]
    fn test_resolve_roman() {
        let op = resolve_line("IX * IV").unwrap();
        assert_eq!(op.system, NumeralSystem::Roman);
        assert_eq!((op.lhs, op.rhs), (9, 4));
    }

    #[test]
    fn test_mixed_systems() {
        assert!(matches!(resolve_line("III + 5"), Err(CalcError::MixedNumberingSystem)));
        assert!(matches!(resolve_line("5 + III"), Err(CalcError::MixedNumberingSystem)));
    }

    #[test]
    fn test_lowercase_roman_is_arabic_form() {
        // "iv" is not Roman-form, so it fails as an Arabic number
        assert!(matches!(
            resolve_line("iv + 2"),
            Err(CalcError::InvalidNumber { operand }) if operand == "iv"
        ));
    }

    #[test]
    fn test_invalid_number_names_operand() {
        assert!(matches!(
            resolve_line("2 + 2.5"),
            Err(CalcError::InvalidNumber { operand }) if operand == "2.5"
        ));
        assert!(matches!(
            resolve_line("abc + xyz"),
            Err(CalcError::InvalidNumber { operand }) if operand == "abc"
        ));
    }

    #[test]
    fn test_overflowing_number_is_invalid() {
        assert!(matches!(
            resolve_line("99999999999999999999 + 1"),
            Err(CalcError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        for line in ["0 + 1", "11 + 1", "-1 + 1", "1 + 11"] {
            assert!(
                matches!(resolve_line(line), Err(CalcError::OutOfRange { .. })),
                "{line} should be out of range"
            );
        }
        assert!(matches!(resolve_line("XI + I"), Err(CalcError::OutOfRange { value: 11 })));
    }

    #[test]
    fn test_signed_arabic_accepted() {
        let op = resolve_line("+5 - 03").unwrap();
        assert_eq!((op.lhs, op.rhs), (5, 3));
    }

    #[test]
    fn test_non_canonical_roman_accepted() {
        let op = resolve_line("IIII + VV").unwrap();
        assert_eq!((op.lhs, op.rhs), (4, 10));
    }

    #[test]
    fn test_range_checked_before_operator() {
        let op = resolve_line("3 ^ 2").unwrap();
        assert_eq!(op.operator, "^");
        assert!(matches!(resolve_line("3 ^ 11"), Err(CalcError::OutOfRange { value: 11 })));
    }
}
