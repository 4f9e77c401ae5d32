//! Secret store access.
//!
//! The walker and exporter only need two primitives: list the children of a
//! path and read the field/value pairs held at a path. Both are expressed by
//! the `Store` trait so the export pipeline runs unchanged against a live
//! Vault server or an in-process tree.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `consul.rs`)
//! 3. Re-export from this module

use crate::core::types::SecretData;
use crate::error::StoreError;

mod http;
mod memory;

pub use http::Http;
pub use memory::Memory;

/// Result type for store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Directory-style secret store.
///
/// Paths are relative to the store's mount and always start with `/`.
pub trait Store {
    /// List the immediate children of a path.
    ///
    /// Container children are suffixed with `/`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the path has no children, or
    /// another `StoreError` if the call itself failed.
    fn list(&self, path: &str) -> StoreResult<Vec<String>>;

    /// Read every field held at a path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the path holds no data.
    fn read(&self, path: &str) -> StoreResult<SecretData>;
}

impl<S: Store + ?Sized> Store for &S {
    fn list(&self, path: &str) -> StoreResult<Vec<String>> {
        (**self).list(path)
    }

    fn read(&self, path: &str) -> StoreResult<SecretData> {
        (**self).read(path)
    }
}
