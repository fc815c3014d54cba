//! Row-limit configuration for the exporter
//!
//! Asana's importer rejects very large files, so long lists are split into
//! chunks of about `row_target` rows. `row_ceiling` is the hard limit; a
//! chunk passing it aborts the run because it means the target is
//! misconfigured, not that the input is bad.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Rows per CSV file before the exporter starts a new chunk
    pub row_target: usize,
    /// Hard row limit; an unflushed chunk passing it is fatal
    pub row_ceiling: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            row_target: 1900,
            row_ceiling: 2000,
        }
    }
}

impl ExportConfig {
    /// Load overrides from a TOML file
    ///
    /// Keys not present in the file keep their defaults. The loaded values
    /// are validated before use.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: ExportConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limit combinations that could never produce a valid run
    pub fn validate(&self) -> Result<()> {
        if self.row_target == 0 {
            bail!("row_target must be at least 1");
        }
        if self.row_target > self.row_ceiling {
            bail!(
                "row_target ({}) must not exceed row_ceiling ({})",
                self.row_target,
                self.row_ceiling
            );
        }
        Ok(())
    }
}
