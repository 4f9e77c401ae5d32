//! Output file writing.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Serialize `data` as compact JSON and write it to `path`.
///
/// The file content is exactly what `serde_json::to_vec` produces.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json<T: Serialize + ?Sized>(data: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec(data)?;
    std::fs::write(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
