//! Romcalc CLI - calculate with Arabic or Roman numerals

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use romcalc::cli::{setup_logging, Args, SubCommand};
use romcalc::repl::{run_repl, run_session, SessionConfig, SessionSummary};
use romcalc::{calculate, format_error, format_output};

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    match args.command {
        Some(SubCommand::Eval { ref expression }) => {
            let line = expression.trim();
            let format = args.output_format();
            match calculate(line) {
                Ok(calc) => {
                    println!("{}", format_output(&calc, &format));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", format_error(line, &e, &format));
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Some(SubCommand::Run { ref file }) => {
            let config = SessionConfig {
                output_format: args.output_format(),
                prompt: None,
            };
            let summary = if file.as_os_str() == "-" {
                run_session(io::stdin().lock(), io::stdout(), &config)?
            } else {
                let handle = File::open(file)
                    .with_context(|| format!("failed to open input file `{}`", file.display()))?;
                run_session(BufReader::new(handle), io::stdout(), &config)?
            };
            Ok(exit_code(&summary))
        }

        Some(SubCommand::Repl) | None => {
            let config = args.session_config();
            if io::stdin().is_terminal() {
                run_repl(&config)?;
            } else {
                run_session(io::stdin().lock(), io::stdout(), &config)?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(summary: &SessionSummary) -> ExitCode {
    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
