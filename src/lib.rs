//! Romcalc - a calculator for Arabic and Roman numerals
//!
//! Each input line holds one binary operation on two operands from 1 to 10,
//! both written in Arabic numerals or both in Roman numerals. The result is
//! written in the same system as the operands.
//!
//! # Example
//!
//! ```
//! use romcalc::calculate_str;
//!
//! assert_eq!(calculate_str("VI + II").unwrap(), "VIII");
//! assert_eq!(calculate_str("3 - 8").unwrap(), "-5");
//! assert!(calculate_str("V - V").is_err());
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod numeral;
pub mod output;
pub mod parser;
pub mod repl;

pub use engine::{calculate, calculate_str, evaluate, Calculation, Evaluation};
pub use error::{CalcError, ErrorKind, Result};
pub use numeral::{from_roman, is_roman, resolve, to_roman, NumeralSystem, ResolvedOperation};
pub use output::{format_error, format_output, format_value, OutputFormat};
pub use parser::{parse_line, OperationRequest, Operator};
