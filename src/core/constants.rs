//! Constants used throughout vault-export.
//!
//! Centralizes magic strings and configuration values.

/// Store endpoint host/scheme.
pub const ENV_VAULT_URL: &str = "VAULTURL";

/// Store endpoint port, appended to the URL as `url:port`.
pub const ENV_VAULT_PORT: &str = "VAULTPORT";

/// Mount prefix under which all paths are resolved.
pub const ENV_SECRET_ENGINE: &str = "SECRETENGINE";

/// Access token presented to the store.
pub const ENV_VAULT_TOKEN: &str = "VAULTTOKEN";

/// Log filter override (e.g. `VAULT_EXPORT_LOG=debug`).
pub const LOG_ENV: &str = "VAULT_EXPORT_LOG";

/// Default output file, written to the working directory.
pub const OUTPUT_FILE: &str = "output.json";

/// Default per-call timeout against the store, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header carrying the access token.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// Placeholder logged instead of secret values.
pub const REDACTED: &str = "***";
