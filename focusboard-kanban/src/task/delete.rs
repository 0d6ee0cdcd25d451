//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::events::BoardEvent;
use crate::execute::Execute;
use crate::types::{Task, TaskId};
use serde::Deserialize;

/// Delete a task.
///
/// The id is filtered out of every column's task list, not just the
/// recorded one, so the cross-reference invariant holds even if the
/// task's column field had drifted.
#[derive(Debug, Deserialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute for DeleteTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> Result<Task> {
        let Some(task) = ctx.remove_task(&self.id) else {
            return Err(BoardError::task_not_found(&self.id));
        };

        for column in ctx.columns_mut() {
            column.remove_task(&self.id);
        }

        ctx.persist_tasks();
        ctx.persist_columns();
        ctx.emit(BoardEvent::TaskDeleted {
            id: task.id.clone(),
        });
        tracing::debug!(task = %task.id, "task deleted");

        Ok(task)
    }
}
