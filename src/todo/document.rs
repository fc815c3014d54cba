use serde::Deserialize;

use super::task::{TodoList, TodoTask};

/// The whole To Do export document
///
/// Three flat sequences; ownership is expressed by identifier matching
/// (`TodoTask::list_id` into `lists`, `TodoTask::task_id` into `tasks`).
/// A document missing any of the three keys is not a To Do export and
/// fails to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoExport {
    pub lists: Vec<TodoList>,
    pub tasks: Vec<TodoTask>,
    pub steps: Vec<TodoTask>,
}

impl TodoExport {
    /// Tasks belonging to a list, in document order
    pub fn tasks_for_list(&self, list_id: &str) -> Vec<&TodoTask> {
        self.tasks
            .iter()
            .filter(|task| task.list_id.as_deref() == Some(list_id))
            .collect()
    }

    /// Steps belonging to a task, in document order
    pub fn steps_for_task(&self, task_id: &str) -> Vec<&TodoTask> {
        self.steps
            .iter()
            .filter(|step| step.task_id.as_deref() == Some(task_id))
            .collect()
    }
}
