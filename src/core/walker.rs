//! Secret tree discovery.
//!
//! The store only exposes "list children of a path", so the tree is expanded
//! level by level starting at the root until a pass produces no children.
//! Every listed entry is recorded as a candidate leaf before it is expanded,
//! which means containers appear in the result too; the exporter skips them
//! if they turn out to hold no data.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::core::paths;
use crate::core::store::Store;
use crate::core::types::SecretPath;
use crate::error::{Result, StoreError};

/// Enumerates every path under a store's mount.
pub struct Walker<S> {
    store: S,
}

impl<S: Store> Walker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Discover every candidate leaf path, root level first.
    ///
    /// If the root has no children the whole mount is a single leaf and
    /// `["/"]` is returned. Failures below the root are treated as "no
    /// children".
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the root listing fails for any
    /// reason other than the mount being empty.
    pub fn discover_paths(&self) -> Result<Vec<SecretPath>> {
        let root = match self.store.list("/") {
            Ok(entries) => entries,
            Err(StoreError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(StoreError::Unavailable(e.to_string()).into()),
        };

        if root.is_empty() {
            debug!("root has no children, mount is a single leaf");
            return Ok(vec!["/".to_string()]);
        }

        let mut found = Vec::new();
        let mut seen = HashSet::new();
        let mut frontier = root;
        let mut depth = 0usize;

        while !frontier.is_empty() {
            debug!(depth, entries = frontier.len(), "expanding level");
            let mut next = Vec::new();
            let listed: HashSet<&str> = frontier.iter().map(String::as_str).collect();

            for entry in &frontier {
                if shadowed_by_container(entry, &listed) {
                    debug!(entry = %entry, "skipping name listed alongside its container");
                    continue;
                }

                let path = paths::join("/", entry);
                if !seen.insert(path.clone()) {
                    continue;
                }
                found.push(path.clone());

                for child in self.children(&path) {
                    next.push(paths::join(&path, &child));
                }
            }

            frontier = next;
            depth += 1;
        }

        info!(paths = found.len(), "discovered secret paths");
        Ok(found)
    }

    /// Children of a non-root path, empty on any failure.
    fn children(&self, path: &str) -> Vec<String> {
        match self.store.list(path) {
            Ok(children) => children,
            Err(StoreError::NotFound(_)) => Vec::new(),
            Err(e) => {
                debug!(path, error = %e, "list failed, treating as leaf");
                Vec::new()
            }
        }
    }
}

/// A name without a trailing `/` whose container twin (`name/`) sits in the
/// same listing.
///
/// Some stores list both when a path holds data and children. The container
/// entry covers both the data and the subtree, so the bare name is dropped.
fn shadowed_by_container(entry: &str, listed: &HashSet<&str>) -> bool {
    if entry.ends_with('/') {
        return false;
    }
    listed.contains(format!("{}/", entry).as_str())
}
