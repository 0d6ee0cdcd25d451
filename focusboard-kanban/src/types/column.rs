//! Column type: a named workflow stage with an ordered task list

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage.
///
/// `task_ids` is the on-screen order, top to bottom. It contains no
/// duplicates and references only tasks whose `column` field matches
/// this column's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create a new, empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Whether the column's task list contains the given id
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }

    /// Position of the given id in the task list
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|t| t == id)
    }

    /// Append a task id at the end of the list
    pub(crate) fn push_task(&mut self, id: TaskId) {
        self.task_ids.push(id);
    }

    /// Insert a task id at the given position, clamped to the list end
    pub(crate) fn insert_task_at(&mut self, index: usize, id: TaskId) {
        let index = index.min(self.task_ids.len());
        self.task_ids.insert(index, id);
    }

    /// Remove a task id wherever it appears. Returns whether anything changed.
    pub(crate) fn remove_task(&mut self, id: &TaskId) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|t| t != id);
        self.task_ids.len() != before
    }

    /// Remove and return the task id at the given position.
    ///
    /// Callers must have bounds-checked `index`.
    pub(crate) fn remove_task_at(&mut self, index: usize) -> TaskId {
        self.task_ids.remove(index)
    }
}
