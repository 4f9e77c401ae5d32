//! Path helpers shared by the walker and the exporter.

/// Strip a single trailing `/` so containers are read as their bare name.
///
/// The root path `/` is left untouched.
pub fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// First segment after the leading `/`.
///
/// `/svcA/db/password` → `svcA`, `/standalone` → `standalone`.
pub fn group_name(path: &str) -> &str {
    let rest = path.strip_prefix('/').unwrap_or(path);
    match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}

/// Output key for a field: mount (without leading `/`) + path + `:` + key.
pub fn qualified_key(mount: &str, path: &str, key: &str) -> String {
    format!("{}{}:{}", mount.trim_start_matches('/'), path, key)
}

/// Resolve a listed entry against the prefix it was listed under.
///
/// Entries that already carry an absolute path are used as-is.
pub fn join(prefix: &str, entry: &str) -> String {
    if entry.starts_with('/') {
        entry.to_string()
    } else {
        format!("{}{}", prefix, entry)
    }
}
