//! Pest grammar parser for calculator lines

use pest::Parser;
use pest_derive::Parser;
use tracing::debug;

use crate::error::{CalcError, Result};
use crate::parser::ast::OperationRequest;

#[derive(Parser)]
#[grammar = "../grammar/calc.pest"]
pub struct LineParser;

/// Split a line into whitespace separated tokens
pub fn tokenize(input: &str) -> Result<Vec<&str>> {
    let pairs = LineParser::parse(Rule::line, input).map_err(|_| CalcError::MalformedInput)?;

    let line = pairs.into_iter().next().ok_or(CalcError::MalformedInput)?;

    Ok(line
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::token)
        .map(|pair| pair.as_str())
        .collect())
}

/// Parse a line into an operation request.
///
/// The line must hold exactly three tokens: operand, operator, operand.
pub fn parse_line(input: &str) -> Result<OperationRequest> {
    let tokens = tokenize(input)?;
    debug!(?tokens, "tokenized line");

    match tokens.as_slice() {
        [lhs, operator, rhs] => Ok(OperationRequest {
            lhs: lhs.to_string(),
            operator: operator.to_string(),
            rhs: rhs.to_string(),
        }),
        _ => Err(CalcError::MalformedInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let req = parse_line("3 + 4").unwrap();
        assert_eq!(req.lhs, "3");
        assert_eq!(req.operator, "+");
        assert_eq!(req.rhs, "4");
    }

    #[test]
    fn test_parse_collapses_whitespace_runs() {
        let req = parse_line("  X \t*   II  ").unwrap();
        assert_eq!(
            req,
            OperationRequest {
                lhs: "X".to_string(),
                operator: "*".to_string(),
                rhs: "II".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_wrong_token_count() {
        assert!(matches!(parse_line("3 +"), Err(CalcError::MalformedInput)));
        assert!(matches!(parse_line("3 + 4 + 5"), Err(CalcError::MalformedInput)));
        assert!(matches!(parse_line(""), Err(CalcError::MalformedInput)));
        assert!(matches!(parse_line("   "), Err(CalcError::MalformedInput)));
    }

    #[test]
    fn test_operator_must_be_separated() {
        // "3+4" is a single token
        assert!(matches!(parse_line("3+4"), Err(CalcError::MalformedInput)));
    }

    #[test]
    fn test_contents_not_validated() {
        let req = parse_line("foo bar baz").unwrap();
        assert_eq!(req.operator, "bar");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a  b\tc").unwrap(), vec!["a", "b", "c"]);
        assert!(tokenize("").unwrap().is_empty());
    }
}
