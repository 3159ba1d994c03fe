//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not resolve options (see `ldap_config::initialize`).
//! - Does not format output (see `formatters` module).

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "ldap-options")]
#[command(
    about = "Show LDAP client options resolved from ldap.conf, ldaprc files and LDAP* environment variables",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ldap-options\n  ldap-options URI BASE\n  ldap-options --seconds TIMEOUT NETWORK_TIMEOUT\n  LDAPCONF=./test.conf ldap-options -o json\n"
)]
pub struct Cli {
    /// Option names to show (default: every resolved option)
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,

    /// Read the selected options as durations in seconds
    #[arg(long, requires = "keys")]
    pub seconds: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
