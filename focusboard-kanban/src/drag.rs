//! Drag interaction boundary
//!
//! The pointer/gesture library is an external collaborator: it reports
//! drag lifecycle events referencing a dragged task and a resolved drop
//! target. This module translates a drag-end report into at most one
//! store call - a cross-column move or an in-column reorder.

use crate::context::BoardContext;
use crate::error::Result;
use crate::execute::Execute;
use crate::task::{MoveTask, ReorderTask};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// What a dragged task was released over.
///
/// A column target means the column's drop-zone (the lane itself), as
/// opposed to a specific task card inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    Column(ColumnId),
    Task(TaskId),
}

/// A drag lifecycle event from the gesture controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DragEvent {
    Started {
        task: TaskId,
    },
    Over {
        task: TaskId,
        target: Option<DropTarget>,
    },
    Ended {
        task: TaskId,
        target: Option<DropTarget>,
    },
}

/// The store call a drag-end resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DropAction {
    Move {
        id: TaskId,
        from: ColumnId,
        to: ColumnId,
        index: usize,
    },
    Reorder {
        column: ColumnId,
        from_index: usize,
        to_index: usize,
    },
}

/// Decide what a drop should do. Returns `None` when the drop changes
/// nothing:
///
/// - no target, or the dragged id is unknown;
/// - the target is the drop-zone of the column the task already occupies
///   (skipped entirely, so no write and no timestamp refresh);
/// - the target task id is unknown, or is the dragged task's own position.
///
/// Dropping on another column's drop-zone places the task at the front of
/// that column. Dropping on a task in another column inserts at that
/// task's current position; dropping on a task in the same column becomes
/// a reorder between the two current positions.
pub fn resolve_drop(
    ctx: &BoardContext,
    task: &TaskId,
    target: Option<&DropTarget>,
) -> Option<DropAction> {
    let task = ctx.task(task)?;
    match target? {
        DropTarget::Column(column) => {
            if &task.column == column {
                return None;
            }
            Some(DropAction::Move {
                id: task.id.clone(),
                from: task.column.clone(),
                to: column.clone(),
                index: 0,
            })
        }
        DropTarget::Task(other_id) => {
            let other = ctx.task(other_id)?;
            if other.column != task.column {
                let index = ctx
                    .column(&other.column)
                    .and_then(|c| c.position_of(other_id))
                    .unwrap_or(0);
                return Some(DropAction::Move {
                    id: task.id.clone(),
                    from: task.column.clone(),
                    to: other.column.clone(),
                    index,
                });
            }

            let column = ctx.column(&task.column)?;
            let from_index = column.position_of(&task.id)?;
            let to_index = column.position_of(other_id)?;
            if from_index == to_index {
                return None;
            }
            Some(DropAction::Reorder {
                column: task.column.clone(),
                from_index,
                to_index,
            })
        }
    }
}

/// Resolve a drag-end event and execute the resulting store call.
///
/// Non-terminal events and no-op drops return `Ok(None)`.
pub fn apply_drag_end(ctx: &mut BoardContext, event: &DragEvent) -> Result<Option<DropAction>> {
    let DragEvent::Ended { task, target } = event else {
        return Ok(None);
    };
    let Some(action) = resolve_drop(ctx, task, target.as_ref()) else {
        return Ok(None);
    };

    match &action {
        DropAction::Move {
            id,
            from,
            to,
            index,
        } => {
            MoveTask::new(id.clone(), from.clone(), to.clone(), *index).execute(ctx)?;
        }
        DropAction::Reorder {
            column,
            from_index,
            to_index,
        } => {
            ReorderTask::new(column.clone(), *from_index, *to_index).execute(ctx)?;
        }
    }

    Ok(Some(action))
}
