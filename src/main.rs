use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lob_pricer::cli::Args;
use lob_pricer::{LineOutcome, Pricer};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut pricer = Pricer::new(args.target).with_warn_on_clamp(args.warn_on_clamp);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::error!(%err, "failed to read line from input");
                return ExitCode::FAILURE;
            }
        };

        match pricer.process_line(&line) {
            Ok(LineOutcome::Output(quote)) => {
                if writeln!(out, "{quote}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Ok(LineOutcome::NoOp) => {}
            Ok(LineOutcome::Rejected(err)) => {
                tracing::warn!(%err, "skipping malformed line");
            }
            Err(err) => {
                tracing::error!(%err, "fatal invariant violation, aborting");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
