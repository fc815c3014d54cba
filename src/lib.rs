//! Microsoft To Do → Asana CSV converter
//!
//! This library converts the JSON document produced by a Microsoft To Do
//! export into one or more CSV files per list, shaped for Asana's CSV
//! importer (<https://asana.com/guide/help/api/csv-importer>).
//!
//! # Architecture
//!
//! The conversion is a 3-stage pipeline, run once per invocation:
//! - **Loader**: `loader` module - parses the export document
//! - **Task Mapper**: `convert` module - maps one To Do record to one Asana row
//! - **List Exporter**: `export` module - chunks, sorts and writes the rows of one list
//!
//! # Example
//!
//! ```no_run
//! use anyhow::Result;
//! use todo2asana::{ExportConfig, run};
//!
//! fn main() -> Result<()> {
//!     run("microsoft_todo.json", "asana_data", &ExportConfig::default())
//! }
//! ```

pub mod asana;
pub mod config;
pub mod convert;
pub mod export;
pub mod loader;
pub mod todo;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used types
pub use asana::{AsanaTask, CSV_HEADER, Section};
pub use config::ExportConfig;
pub use convert::convert_task;
pub use todo::{Timestamp, TodoExport, TodoList, TodoTask};

/// Run the whole conversion
///
/// Loads the export document, prepares the output directory, then exports
/// every list in document order. Lists are independent; chunk files already
/// written stay on disk if a later list fails.
pub fn run(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<()> {
    config.validate()?;
    let export = loader::load_export(input)?;
    loader::ensure_output_dir(output_dir.as_ref())?;

    for list in &export.lists {
        export::export_list(list, &export, output_dir.as_ref(), config)?;
    }
    Ok(())
}
