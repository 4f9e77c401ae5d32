//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A store-relative path, always starting with `/`.
///
/// Containers conventionally end with `/`.
pub type SecretPath = String;

/// A field name inside a leaf path.
pub type FieldKey = String;

/// A secret payload.
pub type SecretValue = String;

/// Top-level output bucket, the first segment of a path.
pub type Group = String;

/// Output key combining mount, path and field (`secret/svc/db:password`).
pub type QualifiedKey = String;

/// Field/value pairs held at a single leaf path.
pub type SecretData = BTreeMap<FieldKey, SecretValue>;

/// The exported document: group → qualified key → value.
pub type OutputMapping = BTreeMap<Group, BTreeMap<QualifiedKey, SecretValue>>;
