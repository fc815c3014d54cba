//! Task Mapper: convert one To Do record into one Asana import row
//!
//! Mapping is a pure function of the source record (plus the parent title
//! when the record is a step); converting the same record twice yields
//! identical rows.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use scraper::Html;

use crate::asana::{AsanaTask, Section};
use crate::todo::TodoTask;

/// Reformat an export timestamp as a US date
///
/// In:
/// `2019-05-05`
/// or
/// `2020-05-06T07:06:35.869`
///
/// Out: `05/05/2019`
///
/// Only the 10-character date prefix is used; any time-of-day component is
/// discarded. A timestamp that does not start with a calendar date is an
/// error.
pub fn format_date(date_time: &str) -> Result<String> {
    let prefix = date_time.get(..10).with_context(|| {
        format!("timestamp '{}' is shorter than a calendar date", date_time)
    })?;
    let date = NaiveDate::parse_from_str(prefix, "%Y-%m-%d").with_context(|| {
        format!("timestamp '{}' does not start with YYYY-MM-DD", date_time)
    })?;
    Ok(date.format("%m/%d/%Y").to_string())
}

/// Extract the visible text from a note's rich-text markup
///
/// Notes come over as HTML fragments. Malformed markup degrades to whatever
/// text the parser can salvage instead of failing the task. The result is
/// trimmed of leading/trailing whitespace.
pub fn note_to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Map one task (or step) to an Asana row
///
/// Pass `subtask_of` when mapping a step; it becomes the row's parent
/// reference, and a completed step additionally gets the literal `DONE `
/// name prefix. Top-level tasks never get the prefix regardless of
/// completion. Missing optional source fields map to absent target fields,
/// never to errors.
pub fn convert_task(task: &TodoTask, subtask_of: Option<&str>) -> Result<AsanaTask> {
    let mut name = task.title.clone();
    if subtask_of.is_some() && task.completed {
        name.insert_str(0, "DONE ");
    }

    let section = if task.completed {
        Section::Done
    } else {
        Section::ToDo
    };

    let description = task.note.as_deref().map(note_to_text);

    let created = format_date(&task.created_at.date_time)
        .with_context(|| format!("task '{}': bad creation timestamp", task.id))?;
    let due_date = task
        .due_date
        .as_ref()
        .map(|ts| format_date(&ts.date_time))
        .transpose()
        .with_context(|| format!("task '{}': bad due timestamp", task.id))?;
    let completed = task
        .completed_at
        .as_ref()
        .map(|ts| format_date(&ts.date_time))
        .transpose()
        .with_context(|| format!("task '{}': bad completion timestamp", task.id))?;

    Ok(AsanaTask {
        name,
        section,
        subtask_of: subtask_of.map(str::to_string),
        description,
        created,
        due_date,
        completed,
        position: task.position,
    })
}
