//! Line parser

pub mod ast;
pub mod grammar;

pub use ast::*;
pub use grammar::{parse_line, tokenize};
