//! Line execution: parse, resolve, evaluate and format

use tracing::debug;

use crate::engine::evaluator::evaluate;
use crate::error::Result;
use crate::numeral::{resolve, NumeralSystem};
use crate::output::format_value;
use crate::parser::{parse_line, Operator};

/// Successful outcome of one calculator line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub input: String,
    pub system: NumeralSystem,
    pub operator: Operator,
    pub value: i64,
    /// The value written in `system`
    pub result: String,
}

/// Calculate a single line.
///
/// The first violated rule is reported; nothing is computed past it.
pub fn calculate(line: &str) -> Result<Calculation> {
    let input = line.trim();
    let request = parse_line(input)?;
    let resolved = resolve(&request)?;
    let evaluation = evaluate(&resolved)?;
    let result = format_value(evaluation.system, evaluation.value)?;
    debug!(input, %result, "calculated");

    Ok(Calculation {
        input: input.to_string(),
        system: evaluation.system,
        operator: evaluation.operator,
        value: evaluation.value,
        result,
    })
}

/// Calculate a single line and return only the formatted result
pub fn calculate_str(line: &str) -> Result<String> {
    calculate(line).map(|calc| calc.result)
}
