//! Input loading and output directory preparation

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::todo::TodoExport;

/// Parse the whole export document
///
/// Any read or parse failure is fatal; nothing has been written at this
/// point, so an aborted run leaves no partial output behind.
pub fn load_export(path: impl AsRef<Path>) -> Result<TodoExport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading export file {}", path.display()))?;
    let export: TodoExport = serde_json::from_str(&content)
        .with_context(|| format!("parsing export file {}", path.display()))?;
    Ok(export)
}

/// Create the output directory if absent
///
/// A pre-existing directory is logged and reused; chunk files from an
/// earlier run may be overwritten.
pub fn ensure_output_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        warn!(dir = %path.display(), "output directory already exists");
        return Ok(());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("creating output directory {}", path.display()))?;
    Ok(())
}
