//! In-memory task list.

use crate::status::Status;

/// Ordered list of tasks for the current session. Nothing here touches disk.
#[derive(Debug, Default, Clone)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Duplicates are kept.
    pub fn add_task(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(task = %text, "task added");
        self.tasks.push(text);
    }

    /// Tasks in insertion order. Iterating has no side effects, so this can be
    /// called as often as needed.
    pub fn list_tasks(&self) -> impl Iterator<Item = &str> + '_ {
        self.tasks.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn sync_calendar(&self) -> Status {
        Status::NotImplemented("calendar_sync_not_implemented")
    }
}
