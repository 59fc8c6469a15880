//! Integer arithmetic over resolved operands

use tracing::debug;

use crate::error::Result;
use crate::numeral::{NumeralSystem, ResolvedOperation};
use crate::parser::Operator;

/// Raw arithmetic result, still tagged with the operands' system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub system: NumeralSystem,
    pub operator: Operator,
    pub value: i64,
}

/// Apply the operator to both operands.
///
/// Operands are in [1, 10] so division never sees a zero divisor.
pub fn evaluate(op: &ResolvedOperation) -> Result<Evaluation> {
    let operator: Operator = op.operator.parse()?;
    let value = operator.apply(op.lhs, op.rhs);
    debug!(lhs = op.lhs, %operator, rhs = op.rhs, value, "evaluated");

    Ok(Evaluation {
        system: op.system,
        operator,
        value,
    })
}
