//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::repl::SessionConfig;

#[derive(Parser, Debug)]
#[command(name = "romcalc")]
#[command(author, version, about = "Calculate with Arabic or Roman numerals from 1 to 10", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Output results as JSON, one object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Evaluate a single operation, e.g. `romcalc eval "VI + II"`
    Eval {
        /// The operation to evaluate
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Evaluate every line of a file ('-' reads standard input)
    Run {
        /// Path to a file with one operation per line
        file: PathBuf,
    },

    /// Start an interactive session (the default)
    Repl,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    /// Settings for a session that prompts before each line
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            output_format: self.output_format(),
            ..SessionConfig::default()
        }
    }
}
