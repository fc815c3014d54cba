//! List Exporter: chunked, sorted CSV files for one To Do list
//!
//! Tasks are gathered in document order and interleaved with their steps,
//! then each chunk is sorted globally by (parent name, descending position)
//! right before it is written. The sort does not keep steps adjacent to
//! their parent row; it only guarantees that top-level rows precede all
//! subtask rows and that each group is ordered by position.

use anyhow::{Context, Result, bail};
use std::mem;
use std::path::Path;
use tracing::info;

use crate::asana::{AsanaTask, CSV_HEADER};
use crate::config::ExportConfig;
use crate::convert::convert_task;
use crate::todo::{TodoExport, TodoList};

/// Filename prefix for a list's chunk files: sanitized title plus `_`
fn filename_prefix(title: &str) -> String {
    let mut prefix = sanitize_filename::sanitize(title).trim().to_string();
    prefix.push('_');
    prefix
}

/// Sort a chunk in place
///
/// `sort_by` is stable, so rows tying on both keys keep their buffer order.
fn sort_chunk(rows: &mut [AsanaTask]) {
    rows.sort_by(|a, b| a.chunk_order(b));
}

/// Sort and write one chunk; an empty buffer produces no file at all
fn write_chunk(
    mut rows: Vec<AsanaTask>,
    file_number: usize,
    prefix: &str,
    output_dir: &Path,
) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    sort_chunk(&mut rows);

    let filename = format!("{}{}.csv", prefix, file_number);
    let path = output_dir.join(&filename);
    info!(file = %filename, rows = rows.len(), "writing csv");

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(CSV_HEADER)?;
    for row in &rows {
        writer.write_record(row.csv_record())?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export every task of one list
///
/// Long lists are split across several CSV files. The split point is only
/// ever checked at a task boundary, so a task is never separated from its
/// own steps by a flush; a flushed chunk therefore holds exactly
/// `row_target` task rows plus whatever steps accumulated with them.
/// Chunks already written stay on disk if a later chunk fails.
pub fn export_list(
    list: &TodoList,
    export: &TodoExport,
    output_dir: &Path,
    config: &ExportConfig,
) -> Result<()> {
    info!(list = %list.title, "exporting list");
    let prefix = filename_prefix(&list.title);
    let mut rows: Vec<AsanaTask> = Vec::new();
    let mut file_number = 0;

    for task in export.tasks_for_list(&list.id) {
        if rows.len() > config.row_ceiling {
            bail!(
                "chunk for list '{}' reached {} rows, past the {}-row ceiling; lower row_target (currently {})",
                list.title,
                rows.len(),
                config.row_ceiling,
                config.row_target
            );
        } else if rows.len() >= config.row_target {
            info!(rows = rows.len(), "large list, writing out current progress");
            write_chunk(mem::take(&mut rows), file_number, &prefix, output_dir)?;
            file_number += 1;
        }

        rows.push(convert_task(task, None)?);
        for step in export.steps_for_task(&task.id) {
            rows.push(convert_task(step, Some(&task.title))?);
        }
    }

    // Final chunk for long lists, only chunk for short ones
    write_chunk(rows, file_number, &prefix, output_dir)?;
    Ok(())
}
