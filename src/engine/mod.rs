//! Evaluation engine

pub mod evaluator;
pub mod executor;

pub use evaluator::{evaluate, Evaluation};
pub use executor::{calculate, calculate_str, Calculation};
