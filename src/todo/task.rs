use serde::Deserialize;

/// Timestamp object as the exporter writes it
///
/// Every date in the export is wrapped in an object carrying a `date_time`
/// string, either a bare calendar date (`2019-05-05`) or a full timestamp
/// (`2020-05-06T07:06:35.869`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timestamp {
    pub date_time: String,
}

/// A To Do list; tasks reference it through their `list_id`
#[derive(Debug, Clone, Deserialize)]
pub struct TodoList {
    pub id: String,
    pub title: String,
}

/// A task or step record from the export
///
/// Tasks and steps share the same shape. A task carries `list_id`, a step
/// carries `task_id` instead; steps nest exactly one level deep. Records are
/// read-only once parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoTask {
    pub id: String,
    /// Parent list (tasks only)
    #[serde(default)]
    pub list_id: Option<String>,
    /// Parent task (steps only)
    #[serde(default)]
    pub task_id: Option<String>,
    pub title: String,
    pub completed: bool,
    /// Display order within the parent; any sign, uniqueness not guaranteed
    pub position: i64,
    /// The export always carries a creation timestamp, so absence is a
    /// deserialization error rather than a defaulted field
    pub created_at: Timestamp,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    /// Task body as rich-text/HTML markup
    #[serde(default)]
    pub note: Option<String>,
}
