use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::Args;

mod args;
mod output;

fn main() -> Result<ExitCode> {
    setup_logging();
    let args = Args::parse();
    debug!("validating \"{}\"", args.file.display());
    let valid = output::report(&mut io::stdout().lock(), &args.file)?;
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn setup_logging() {
    // Stdout carries the report lines, so diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
}
