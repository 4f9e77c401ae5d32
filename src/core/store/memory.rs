//! In-process store backend.
//!
//! Mirrors the listing behavior of a KV v1 mount: listing a prefix returns
//! its immediate children, container children carry a trailing `/`, and a
//! name can hold data and children at the same time.

use std::collections::{BTreeMap, BTreeSet};

use super::{Store, StoreResult};
use crate::core::types::SecretData;
use crate::error::StoreError;

/// Secrets held in memory, keyed by mount-relative path without a leading `/`.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    entries: BTreeMap<String, SecretData>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the fields of a secret, replacing any previous data at `path`.
    pub fn write<I, K, V>(&mut self, path: &str, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.entries.insert(Self::key(path), data);
    }

    /// Builder-style variant of [`Memory::write`].
    pub fn with<I, K, V>(mut self, path: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.write(path, fields);
        self
    }

    fn key(path: &str) -> String {
        path.trim_start_matches('/').to_string()
    }
}

impl Store for Memory {
    fn list(&self, path: &str) -> StoreResult<Vec<String>> {
        let mut prefix = Self::key(path);
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }

        let children: BTreeSet<String> = self
            .entries
            .keys()
            .filter_map(|key| key.strip_prefix(prefix.as_str()))
            .filter(|rest| !rest.is_empty())
            .map(|rest| match rest.find('/') {
                Some(idx) => rest[..=idx].to_string(),
                None => rest.to_string(),
            })
            .collect();

        if children.is_empty() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        Ok(children.into_iter().collect())
    }

    fn read(&self, path: &str) -> StoreResult<SecretData> {
        self.entries
            .get(&Self::key(path))
            .filter(|data| !data.is_empty())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }
}
