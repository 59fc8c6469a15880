//! Human-readable output formatting

use crate::engine::Calculation;
use crate::error::CalcError;

pub fn format_human(calc: &Calculation) -> String {
    format!("Result: {}", calc.result)
}

pub fn format_human_error(err: &CalcError) -> String {
    format!("Error: {}", err)
}
