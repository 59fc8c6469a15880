//! Numeral conversion and operand resolution

pub mod resolver;
pub mod roman;

pub use resolver::{resolve, NumeralSystem, ResolvedOperation, MAX_OPERAND, MIN_OPERAND};
pub use roman::{from_roman, is_roman, to_roman, RomanPair, ROMAN_PAIRS};
