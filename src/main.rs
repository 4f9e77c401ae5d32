//! vault-export - dump a Vault KV mount into a single JSON document.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vault_export::cli::output;
use vault_export::cli::{execute, Cli};
use vault_export::core::constants;
use vault_export::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vault_export=debug")
        } else {
            EnvFilter::new("vault_export=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingVariables(_)) => {
                Some("set VAULTURL, VAULTPORT, SECRETENGINE and VAULTTOKEN")
            }
            Error::Store(StoreError::Unavailable(_)) => {
                Some("check that Vault is reachable and the token can list the mount")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
