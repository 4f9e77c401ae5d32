//! vault-export - dump a Vault KV mount into a single JSON document.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── export        # Walk, aggregate, write
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Environment configuration
//!     ├── store/        # Store trait
//!     │   ├── http      # Vault HTTP API backend
//!     │   └── memory    # In-process backend
//!     ├── walker        # Secret tree discovery
//!     ├── export        # Grouping into the output document
//!     ├── paths         # Path normalization and key derivation
//!     └── writer        # JSON file output
//! ```
//!
//! # Example
//!
//! ```
//! use vault_export::core::export::Exporter;
//! use vault_export::core::store::Memory;
//! use vault_export::core::walker::Walker;
//!
//! let store = Memory::new().with("svcA/db", [("password", "hunter2")]);
//! let paths = Walker::new(&store).discover_paths().unwrap();
//! let export = Exporter::new(&store, "secret").export(&paths);
//! assert_eq!(export.groups["svcA"]["secret/svcA/db:password"], "hunter2");
//! ```

pub mod cli;
pub mod core;
pub mod error;
