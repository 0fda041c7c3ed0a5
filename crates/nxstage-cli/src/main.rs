//! nxstage CLI binary.
//!
//! Initializes logging via `tracing` (on stderr, so stdout carries only the
//! repository ID), parses arguments with `clap`, resolves the staging
//! repository and maps failures to exit codes.

mod cli;
mod resolve;

use std::process::ExitCode;

use nxstage_util::errors::StagingError;

fn main() -> ExitCode {
    let args = cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match resolve::exec(&args) {
        Ok(id) => {
            println!("{id}");
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

/// Cardinality failures get a single plain line; everything else is
/// rendered as a full diagnostic.
fn report(err: StagingError) -> ExitCode {
    let code = err.exit_code();
    if matches!(err, StagingError::Cardinality { .. }) {
        eprintln!("{err}");
    } else {
        eprintln!("{:?}", miette::Report::new(err));
    }
    ExitCode::from(code)
}
