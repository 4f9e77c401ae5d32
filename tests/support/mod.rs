//! Test support utilities for vault-export integration tests.
//!
//! Provides an isolated working directory, a mock Vault server and helper
//! commands.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use mockito::{Server, ServerGuard};
use tempfile::TempDir;

/// Test environment with an isolated working directory and a mock Vault.
///
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Working directory the export is written into
    pub dir: TempDir,
    /// Mock Vault HTTP server
    pub vault: ServerGuard,
}

impl Test {
    /// Create an environment with an empty mock Vault.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let vault = Server::new();
        Self { dir, vault }
    }

    /// Create an environment whose mock Vault serves the standard tree.
    pub fn with_standard_tree() -> Self {
        let mut t = Self::new();
        mount_standard_tree(&mut t.vault, MOUNT);
        t
    }

    /// `VAULTURL` value pointing at the mock server.
    pub fn vault_url(&self) -> String {
        let host = self.vault.host_with_port();
        let host = host.rsplit_once(':').map(|(h, _)| h).unwrap_or(host.as_str());
        format!("http://{}", host)
    }

    /// `VAULTPORT` value pointing at the mock server.
    pub fn vault_port(&self) -> String {
        let host = self.vault.host_with_port();
        host.rsplit_once(':')
            .map(|(_, p)| p.to_string())
            .unwrap_or_default()
    }
}
