//! Export command - walk the mount and write every secret to a JSON file.

use std::path::Path;

use tracing::{info, warn};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::export::Exporter;
use crate::core::store::Http;
use crate::core::walker::Walker;
use crate::core::writer;
use crate::error::Result;

/// Run a full export into `dest`.
pub fn execute(dest: &Path, timeout: u64) -> Result<()> {
    let config = Config::from_env()?.with_timeout(timeout)?;
    info!(addr = %config.vault_addr, "starting export");

    let store = Http::new(&config)?;
    info!(engine = %config.secret_engine, "reading secrets from secret engine");

    let paths = Walker::new(&store).discover_paths()?;
    info!(count = paths.len(), "found paths in secret engine");

    let export = Exporter::new(&store, config.secret_engine.as_str()).export(&paths);
    for skipped in &export.skipped {
        match &skipped.key {
            Some(key) => warn!(path = %skipped.path, key = %key, reason = %skipped.reason, "not exported"),
            None => warn!(path = %skipped.path, reason = %skipped.reason, "not exported"),
        }
    }

    writer::write_json(&export.groups, dest)?;
    info!(
        secrets = export.secret_count(),
        groups = export.groups.len(),
        skipped = export.skipped.len(),
        "export complete"
    );

    output::success(&format!(
        "exported {} secrets across {} groups to {}",
        export.secret_count(),
        export.groups.len(),
        output::path(&dest.display().to_string())
    ));
    if !export.skipped.is_empty() {
        output::warn(&format!("{} entries could not be read", export.skipped.len()));
    }
    Ok(())
}
