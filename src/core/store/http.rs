//! Vault HTTP API backend.
//!
//! Talks to a KV (v1-style) mount over `reqwest::blocking`. Every call is
//! bounded by the configured timeout; a timeout surfaces as
//! `StoreError::Http` like any other transport failure.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use super::{Store, StoreResult};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::types::SecretData;
use crate::error::StoreError;

/// Vault server reached over HTTP.
pub struct Http {
    client: Client,
    addr: String,
    mount: String,
    token: Zeroizing<String>,
}

impl std::fmt::Debug for Http {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http")
            .field("addr", &self.addr)
            .field("mount", &self.mount)
            .field("token", &constants::REDACTED)
            .finish()
    }
}

impl Http {
    /// Build a client for the configured endpoint and mount.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            addr: config.vault_addr.trim_end_matches('/').to_string(),
            mount: config.secret_engine.trim_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Full API URL for a store-relative path.
    fn url(&self, path: &str) -> String {
        if self.mount.is_empty() {
            format!("{}/v1{}", self.addr, path)
        } else {
            format!("{}/v1/{}{}", self.addr, self.mount, path)
        }
    }

    /// Send a request and return the decoded body.
    ///
    /// 404 and 204 both mean there is nothing at `path`.
    fn send(&self, request: RequestBuilder, path: &str) -> StoreResult<Value> {
        let response = request
            .header(constants::TOKEN_HEADER, self.token.as_str())
            .send()?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "store response");

        if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            return Err(StoreError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}

impl Store for Http {
    fn list(&self, path: &str) -> StoreResult<Vec<String>> {
        let method = Method::from_bytes(b"LIST").map_err(|e| StoreError::Malformed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let body = self.send(self.client.request(method, self.url(path)), path)?;
        extract_keys(&body, path)
    }

    fn read(&self, path: &str) -> StoreResult<SecretData> {
        let body = self.send(self.client.get(self.url(path)), path)?;
        extract_data(&body, path)
    }
}

/// Pull `data.keys` out of a list response.
fn extract_keys(body: &Value, path: &str) -> StoreResult<Vec<String>> {
    let keys = body
        .get("data")
        .and_then(|data| data.get("keys"))
        .and_then(Value::as_array)
        .ok_or_else(|| StoreError::Malformed {
            path: path.to_string(),
            reason: "missing data.keys".to_string(),
        })?;

    keys.iter()
        .map(|key| {
            key.as_str()
                .map(str::to_string)
                .ok_or_else(|| StoreError::Malformed {
                    path: path.to_string(),
                    reason: format!("non-string key {}", key),
                })
        })
        .collect()
}

/// Pull `data` out of a read response.
///
/// Non-string values are kept as their compact JSON text.
fn extract_data(body: &Value, path: &str) -> StoreResult<SecretData> {
    let data = match body.get("data") {
        Some(Value::Object(map)) => map,
        Some(Value::Null) | None => return Err(StoreError::NotFound(path.to_string())),
        Some(_) => {
            return Err(StoreError::Malformed {
                path: path.to_string(),
                reason: "data is not an object".to_string(),
            })
        }
    };

    Ok(data
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect())
}
