//! Export aggregation.
//!
//! Folds every discovered path into the output document, grouped by the
//! first path segment. Export is best-effort: a path or field that cannot be
//! read is logged and reported in [`Export::skipped`] instead of failing the
//! run.

use tracing::{info, warn};

use crate::core::constants;
use crate::core::paths;
use crate::core::store::{Store, StoreResult};
use crate::core::types::{FieldKey, OutputMapping, SecretPath, SecretValue};
use crate::error::StoreError;

/// A path, or a single field of it, left out of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Normalized path that was being read
    pub path: SecretPath,
    /// Field that failed, `None` when the whole path was unreadable
    pub key: Option<FieldKey>,
    /// Why it was skipped
    pub reason: String,
}

/// Result of an export run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Export {
    /// group → qualified key → value
    pub groups: OutputMapping,
    /// Everything that could not be read
    pub skipped: Vec<Skipped>,
}

impl Export {
    /// Total number of exported values across all groups.
    pub fn secret_count(&self) -> usize {
        self.groups.values().map(|group| group.len()).sum()
    }

    fn insert(&mut self, group: &str, qualified: String, value: SecretValue) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(qualified, value);
    }
}

/// Reads secrets from a store and builds the output document.
pub struct Exporter<S> {
    store: S,
    mount: String,
}

impl<S: Store> Exporter<S> {
    /// Create an exporter for paths under `mount`.
    pub fn new(store: S, mount: impl Into<String>) -> Self {
        Self {
            store,
            mount: mount.into(),
        }
    }

    /// Field names held at a path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the path holds no data.
    pub fn list_keys(&self, path: &str) -> StoreResult<Vec<FieldKey>> {
        let data = self.store.read(path)?;
        if data.is_empty() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        Ok(data.into_keys().collect())
    }

    /// Value of a single field.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the path holds no data, or
    /// `StoreError::KeyNotFound` listing the available fields if `key` is
    /// absent.
    pub fn read_value(&self, path: &str, key: &str) -> StoreResult<SecretValue> {
        let mut data = self.store.read(path)?;
        if data.is_empty() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        match data.remove(key) {
            Some(value) => Ok(value),
            None => Err(StoreError::KeyNotFound {
                path: path.to_string(),
                key: key.to_string(),
                available: data.into_keys().collect(),
            }),
        }
    }

    /// Read every field of every path into an [`Export`].
    ///
    /// Never fails; unreadable paths and fields end up in `skipped`.
    pub fn export<P: AsRef<str>>(&self, paths: &[P]) -> Export {
        let mut export = Export::default();

        for path in paths {
            let path = paths::normalize(path.as_ref());
            info!(path, "reading");

            let keys = match self.list_keys(path) {
                Ok(keys) => keys,
                Err(e) => {
                    warn!(path, error = %e, "skipping path");
                    export.skipped.push(Skipped {
                        path: path.to_string(),
                        key: None,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            info!(path, keys = keys.len(), "found keys");

            let group = paths::group_name(path);
            for key in keys {
                match self.read_value(path, &key) {
                    Ok(value) => {
                        info!(path, key = %key, value = constants::REDACTED, "secret");
                        let qualified = paths::qualified_key(&self.mount, path, &key);
                        export.insert(group, qualified, value);
                    }
                    Err(e) => {
                        warn!(path, key = %key, error = %e, "skipping key");
                        export.skipped.push(Skipped {
                            path: path.to_string(),
                            key: Some(key),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        export
    }
}
