//! Source-side domain model: the Microsoft To Do export document.
//!
//! This module contains the structures the JSON export deserializes into.
//! It is split into submodules for better organization:
//! - `task`: individual list, task and timestamp records
//! - `document`: the whole export document and its lookup queries

mod document;
mod task;

// Re-export all public types
pub use document::TodoExport;
pub use task::{Timestamp, TodoList, TodoTask};
