//! ReorderTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::events::BoardEvent;
use crate::execute::Execute;
use crate::types::{ColumnId, TaskId};
use serde::Deserialize;

/// Reorder a task within a single column.
///
/// The entry at `from_index` is removed and reinserted at `to_index`
/// (positions re-counted after the removal, so reordering `[a,b,c,d]`
/// from 0 to 2 yields `[b,c,a,d]`). No other column and no task fields
/// are touched.
#[derive(Debug, Deserialize)]
pub struct ReorderTask {
    /// The column whose task list is reordered
    pub column: ColumnId,
    /// Current position of the task being reordered; must exist
    pub from_index: usize,
    /// Target position; past-the-end appends
    pub to_index: usize,
}

impl ReorderTask {
    /// Create a new ReorderTask command
    pub fn new(column: impl Into<ColumnId>, from_index: usize, to_index: usize) -> Self {
        Self {
            column: column.into(),
            from_index,
            to_index,
        }
    }
}

impl Execute for ReorderTask {
    type Output = Vec<TaskId>;

    fn execute(&self, ctx: &mut BoardContext) -> Result<Vec<TaskId>> {
        let Some(column) = ctx.column_mut(&self.column) else {
            return Err(BoardError::column_not_found(&self.column));
        };

        let len = column.task_ids.len();
        if self.from_index >= len {
            return Err(BoardError::IndexOutOfRange {
                column: self.column.to_string(),
                index: self.from_index,
                len,
            });
        }

        let id = column.remove_task_at(self.from_index);
        column.insert_task_at(self.to_index, id);
        let order = column.task_ids.clone();

        ctx.persist_columns();
        ctx.emit(BoardEvent::ColumnReordered {
            id: self.column.clone(),
        });
        tracing::debug!(
            column = %self.column,
            from = self.from_index,
            to = self.to_index,
            "column reordered"
        );

        Ok(order)
    }
}
