//! Asana-side output model
//!
//! One `AsanaTask` is one row of the generated import CSV. The column set
//! follows Asana's CSV importer
//! (<https://asana.com/guide/help/api/csv-importer>).

use std::cmp::Ordering;
use std::fmt;

/// Column headers of every generated CSV, in emit order
pub const CSV_HEADER: [&str; 7] = [
    "Name",
    "Section",
    "Subtask of",
    "Description",
    "Created",
    "Due Date",
    "Completed",
];

/// Section a row lands in after import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ToDo,
    Done,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::ToDo => "To do",
            Section::Done => "Done",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the Asana import CSV
///
/// `subtask_of` is `None` (never an empty string) for top-level rows, so the
/// chunk sort sees a single well-defined top-level partition. `position` is
/// the internal sort key and never reaches the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsanaTask {
    pub name: String,
    pub section: Section,
    pub subtask_of: Option<String>,
    pub description: Option<String>,
    pub created: String,
    pub due_date: Option<String>,
    pub completed: Option<String>,
    pub position: i64,
}

impl AsanaTask {
    /// Two-key chunk ordering: rows without a parent sort before rows with
    /// any parent name (`Option`'s derived ordering puts `None` first), then
    /// parent names ascending; within equal parents, descending `position`.
    pub fn chunk_order(&self, other: &Self) -> Ordering {
        self.subtask_of
            .cmp(&other.subtask_of)
            .then_with(|| other.position.cmp(&self.position))
    }

    /// Row cells in [`CSV_HEADER`] order; absent fields render as empty cells
    pub fn csv_record(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.section.as_str(),
            self.subtask_of.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.created.as_str(),
            self.due_date.as_deref().unwrap_or(""),
            self.completed.as_deref().unwrap_or(""),
        ]
    }
}
