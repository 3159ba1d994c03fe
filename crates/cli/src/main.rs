//! ldap-options - show the LDAP client options a directory client would use.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Resolve options from the real process environment and filesystem.
//! - Print the resolved options (table or JSON), secrets redacted.
//!
//! Does NOT handle:
//! - Option resolution logic (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr (filtered by `RUST_LOG`); stdout carries only the output.

mod args;
mod error;
mod formatters;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use error::ExitCode;
use ldap_config::SystemProvider;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn run(cli: &Cli) -> anyhow::Result<String> {
    let resolution =
        ldap_config::resolve(&SystemProvider).context("Failed to resolve LDAP options")?;
    if resolution.is_skipped() {
        tracing::info!("LDAPNOINIT is set; no LDAP options resolved");
    }
    let options = resolution.into_options();
    let rows = formatters::collect_rows(&options, &cli.keys, cli.seconds);
    formatters::format_rows(&rows, cli.output)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            std::process::exit(ExitCode::Success.as_i32());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
