//! JSON output formatting

use crate::engine::Calculation;
use crate::error::CalcError;
use serde_json::json;

pub fn format_json(calc: &Calculation) -> String {
    json!({
        "input": calc.input,
        "system": calc.system,
        "operator": calc.operator,
        "value": calc.value,
        "result": calc.result,
    })
    .to_string()
}

pub fn format_json_error(input: &str, err: &CalcError) -> String {
    json!({
        "input": input,
        "error": err.kind(),
        "message": err.to_string(),
    })
    .to_string()
}
