//! Interactive REPL implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::error::{CalcError, Result};
use crate::repl::session::{process_line, LineOutcome, SessionConfig, SessionSummary};

/// Run a line-editing session on the terminal
pub fn run_repl(config: &SessionConfig) -> Result<SessionSummary> {
    let mut rl = DefaultEditor::new().map_err(|e| CalcError::Readline(e.to_string()))?;

    println!("Romcalc v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for usage, 'exit' to quit\n");

    let prompt = config.prompt.as_deref().unwrap_or("");
    let mut summary = SessionSummary::default();

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let outcome = process_line(&line, &config.output_format);
                match outcome {
                    LineOutcome::Exit => break,
                    LineOutcome::Skip => continue,
                    _ => {}
                }

                let _ = rl.add_history_entry(line.trim());
                if let Some(text) = summary.record(outcome) {
                    println!("{}", text);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C drops the current line only
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(CalcError::Readline(err.to_string())),
        }
    }

    debug!(?summary, "interactive session finished");
    Ok(summary)
}
