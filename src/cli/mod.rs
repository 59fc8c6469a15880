//! Command line interface

pub mod args;
pub mod logging;

pub use args::{Args, SubCommand};
pub use logging::setup_logging;
