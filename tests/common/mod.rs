//! Common test utilities for integration tests

#![allow(dead_code)]

use todo2asana::{Timestamp, TodoExport, TodoList, TodoTask};

/// Create a test list
pub fn make_list(id: &str, title: &str) -> TodoList {
    TodoList {
        id: id.to_string(),
        title: title.to_string(),
    }
}

/// Create a test task with minimal fields
pub fn make_task(id: &str, list_id: &str, title: &str, position: i64) -> TodoTask {
    TodoTask {
        id: id.to_string(),
        list_id: Some(list_id.to_string()),
        task_id: None,
        title: title.to_string(),
        completed: false,
        position,
        created_at: Timestamp {
            date_time: "2019-05-05".to_string(),
        },
        due_date: None,
        completed_at: None,
        note: None,
    }
}

/// Create a test step attached to a task
pub fn make_step(id: &str, task_id: &str, title: &str, position: i64) -> TodoTask {
    TodoTask {
        id: id.to_string(),
        list_id: None,
        task_id: Some(task_id.to_string()),
        title: title.to_string(),
        completed: false,
        position,
        created_at: Timestamp {
            date_time: "2019-05-05".to_string(),
        },
        due_date: None,
        completed_at: None,
        note: None,
    }
}

/// Assemble a whole export document
pub fn make_export(
    lists: Vec<TodoList>,
    tasks: Vec<TodoTask>,
    steps: Vec<TodoTask>,
) -> TodoExport {
    TodoExport {
        lists,
        tasks,
        steps,
    }
}

/// Count the data rows of a chunk file (header excluded)
pub fn count_rows(path: &std::path::Path) -> usize {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().count()
}

/// Collect the Name column of a chunk file, in file order
pub fn read_names(path: &std::path::Path) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|record| record.unwrap().get(0).unwrap().to_string())
        .collect()
}
