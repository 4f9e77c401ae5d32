//! Command-line interface.

pub mod export;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants;

/// vault-export - dump a Vault KV mount into a single JSON document.
///
/// Connection settings come from VAULTURL, VAULTPORT, SECRETENGINE and
/// VAULTTOKEN.
#[derive(Parser, Debug)]
#[command(
    name = "vault-export",
    about = "Export every secret in a Vault KV mount to JSON, grouped by service",
    version
)]
pub struct Cli {
    /// File to write the export to
    #[arg(short, long, default_value = constants::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Per-request timeout against Vault, in seconds
    #[arg(long, default_value_t = constants::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the export.
///
/// # Errors
///
/// Returns error if configuration is missing, the store cannot be reached,
/// or the output file cannot be written.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    export::execute(&cli.output, cli.timeout)
}
