//! REPL module for interactive mode

pub mod session;

#[cfg(feature = "repl")]
pub mod interactive;

pub use session::{
    process_line, run_session, LineOutcome, SessionConfig, SessionSummary, DEFAULT_PROMPT,
    HELP_TEXT,
};

#[cfg(feature = "repl")]
pub use interactive::run_repl;

/// Without line editing the terminal gets the plain session
#[cfg(not(feature = "repl"))]
pub fn run_repl(config: &SessionConfig) -> crate::error::Result<SessionSummary> {
    let stdin = std::io::stdin();
    run_session(stdin.lock(), std::io::stdout(), config)
}
