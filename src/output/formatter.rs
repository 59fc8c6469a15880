//! Output formatting

use crate::engine::Calculation;
use crate::error::{CalcError, Result};
use crate::numeral::{to_roman, NumeralSystem};
use crate::output::human::{format_human, format_human_error};
use crate::output::json::{format_json, format_json_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Write a value in the given numbering system.
///
/// Roman numerals cannot express zero or negative values.
pub fn format_value(system: NumeralSystem, value: i64) -> Result<String> {
    match system {
        NumeralSystem::Roman if value < 1 => Err(CalcError::RomanBelowOne),
        NumeralSystem::Roman => Ok(to_roman(value)),
        NumeralSystem::Arabic => Ok(value.to_string()),
    }
}

pub fn format_output(calc: &Calculation, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(calc),
        OutputFormat::Json => format_json(calc),
    }
}

pub fn format_error(input: &str, err: &CalcError, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_error(err),
        OutputFormat::Json => format_json_error(input, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_roman() {
        assert_eq!(format_value(NumeralSystem::Roman, 9).unwrap(), "IX");
        assert_eq!(format_value(NumeralSystem::Roman, 100).unwrap(), "C");
        assert!(matches!(
            format_value(NumeralSystem::Roman, 0),
            Err(CalcError::RomanBelowOne)
        ));
        assert!(matches!(
            format_value(NumeralSystem::Roman, -4),
            Err(CalcError::RomanBelowOne)
        ));
    }

    #[test]
    fn test_format_value_arabic() {
        assert_eq!(format_value(NumeralSystem::Arabic, -5).unwrap(), "-5");
        assert_eq!(format_value(NumeralSystem::Arabic, 0).unwrap(), "0");
        assert_eq!(format_value(NumeralSystem::Arabic, 100).unwrap(), "100");
    }

    #[test]
    fn test_format_value_is_pure() {
        for value in -9..=100 {
            let first = format_value(NumeralSystem::Arabic, value).unwrap();
            let second = format_value(NumeralSystem::Arabic, value).unwrap();
            assert_eq!(first, second);
        }
    }
}
