use std::{io, process::ExitCode};

use clap::Parser;
use neptune::util::EnvProviderImpl;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = cli::Args::parse();
    let mut stdout = io::stdout().lock();
    match cli::run(&args, &EnvProviderImpl, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
