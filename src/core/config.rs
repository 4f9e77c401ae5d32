//! Process configuration.
//!
//! Read once at startup from the environment and passed explicitly to the
//! store client, walker and exporter.

use std::ffi::OsString;
use std::time::Duration;

use tracing::{debug, error};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Error, Result};

/// Connection and mount settings for a single export run.
#[derive(Clone)]
pub struct Config {
    /// Store endpoint as `url:port`
    pub vault_addr: String,
    /// Mount prefix (secret engine) under which every path is resolved
    pub secret_engine: String,
    /// Access token, wiped from memory on drop
    pub token: Zeroizing<String>,
    /// Upper bound on every individual store call
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("vault_addr", &self.vault_addr)
            .field("secret_engine", &self.secret_engine)
            .field("token", &constants::REDACTED)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariables` naming every required
    /// variable that is not set, or `ConfigError::Invalid` for a variable
    /// that is set but not valid Unicode. Each one is also logged.
    pub fn from_env() -> Result<Self> {
        Self::from_os_lookup(|name| std::env::var_os(name))
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// A variable that is present but empty counts as set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_os_lookup(|name| lookup(name).map(OsString::from))
    }

    /// Load configuration through a lookup returning raw OS strings.
    ///
    /// Presence is checked first so every missing variable is reported
    /// together; only then are values decoded.
    pub fn from_os_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let url = lookup(constants::ENV_VAULT_URL);
        let port = lookup(constants::ENV_VAULT_PORT);
        let engine = lookup(constants::ENV_SECRET_ENGINE);
        let token = lookup(constants::ENV_VAULT_TOKEN);

        let missing: Vec<String> = [
            (constants::ENV_VAULT_URL, url.is_none()),
            (constants::ENV_VAULT_PORT, port.is_none()),
            (constants::ENV_SECRET_ENGINE, engine.is_none()),
            (constants::ENV_VAULT_TOKEN, token.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name.to_string())
        .collect();

        for name in &missing {
            error!(variable = %name, "missing required environment variable");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing).into());
        }

        let url = decode(constants::ENV_VAULT_URL, url)?;
        let port = decode(constants::ENV_VAULT_PORT, port)?;
        let engine = decode(constants::ENV_SECRET_ENGINE, engine)?;
        let token = Zeroizing::new(decode(constants::ENV_VAULT_TOKEN, token)?);

        let config = Self {
            vault_addr: format!("{}:{}", url, port),
            secret_engine: engine,
            token,
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        };
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Override the per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a zero timeout.
    pub fn with_timeout(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(ConfigError::Invalid {
                name: "timeout".to_string(),
                reason: "must be at least one second".to_string(),
            }
            .into());
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }
}

/// Decode a present variable, rejecting values that are not valid Unicode.
fn decode(name: &str, value: Option<OsString>) -> Result<String> {
    value.unwrap_or_default().into_string().map_err(|_| {
        error!(variable = %name, "environment variable is not valid unicode");
        Error::from(ConfigError::Invalid {
            name: name.to_string(),
            reason: "not valid unicode".to_string(),
        })
    })
}
