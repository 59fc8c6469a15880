//! Line-oriented session over any reader and writer

use std::io::{BufRead, ErrorKind, Write};

use tracing::debug;

use crate::engine::calculate;
use crate::error::Result;
use crate::output::{format_error, format_output, OutputFormat};

/// Prompt shown before each line is read
pub const DEFAULT_PROMPT: &str = "Enter an operation (or 'exit' to quit): ";

/// Read failures in a row after which a session gives up
pub const MAX_CONSECUTIVE_READ_ERRORS: usize = 5;

/// Command that ends a session
pub const EXIT_COMMAND: &str = "exit";

/// Command that prints usage
pub const HELP_COMMAND: &str = "help";

pub const HELP_TEXT: &str = "\
Enter one operation per line: <operand> <operator> <operand>

Operands are whole numbers from 1 to 10, written either in Arabic
(1, 2, ... 10) or in Roman (I, II, ... X) numerals. Both operands must
use the same system and the result is written in that system.

Operators:
  +   addition
  -   subtraction
  *   multiplication
  /   integer division (truncates)

Roman results must be at least I. Arabic results may be zero or negative.

Examples:
  3 + 4       => 7
  VI * II     => XII
  7 / 2       => 3

Commands:
  help        show this help
  exit        quit";

/// Session settings derived from the command line
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub output_format: OutputFormat,
    /// `None` disables the prompt, e.g. when reading a file
    pub prompt: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            prompt: Some(DEFAULT_PROMPT.to_string()),
        }
    }
}

/// Counts of lines handled during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub failed: usize,
}

/// What a single input line turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Exit,
    Skip,
    Help,
    Evaluated(String),
    Failed(String),
}

/// Handle one raw input line.
///
/// The exit command is recognised before any parsing takes place.
pub fn process_line(line: &str, format: &OutputFormat) -> LineOutcome {
    let line = line.trim();
    match line {
        EXIT_COMMAND => LineOutcome::Exit,
        HELP_COMMAND => LineOutcome::Help,
        "" => LineOutcome::Skip,
        _ => match calculate(line) {
            Ok(calc) => LineOutcome::Evaluated(format_output(&calc, format)),
            Err(err) => {
                debug!(input = line, error = %err, "line rejected");
                LineOutcome::Failed(format_error(line, &err, format))
            }
        },
    }
}

impl SessionSummary {
    /// Record an outcome, returning the text to print, if any
    pub fn record(&mut self, outcome: LineOutcome) -> Option<String> {
        match outcome {
            LineOutcome::Evaluated(text) => {
                self.evaluated += 1;
                Some(text)
            }
            LineOutcome::Failed(text) => {
                self.failed += 1;
                Some(text)
            }
            LineOutcome::Help => Some(HELP_TEXT.to_string()),
            LineOutcome::Exit | LineOutcome::Skip => None,
        }
    }
}

/// Run a read-evaluate-print loop until `exit` or end of input.
///
/// Read failures are reported on stderr and the loop moves on to the next
/// line. After `MAX_CONSECUTIVE_READ_ERRORS` failures in a row the stream is
/// treated as closed and the last error is returned.
pub fn run_session<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &SessionConfig,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut line = String::new();
    let mut read_errors = 0;

    loop {
        if let Some(ref prompt) = config.prompt {
            write!(writer, "{}", prompt)?;
            writer.flush()?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => read_errors = 0,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                read_errors += 1;
                debug!(error = %e, read_errors, "read failed");
                eprintln!("Read error: {}", e);
                if read_errors >= MAX_CONSECUTIVE_READ_ERRORS {
                    return Err(e.into());
                }
                continue;
            }
        }

        let outcome = process_line(&line, &config.output_format);
        if outcome == LineOutcome::Exit {
            break;
        }
        if let Some(text) = summary.record(outcome) {
            writeln!(writer, "{}", text)?;
        }
    }

    debug!(?summary, "session finished");
    Ok(summary)
}
