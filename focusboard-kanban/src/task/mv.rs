//! MoveTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::events::BoardEvent;
use crate::execute::Execute;
use crate::types::{ColumnId, Task, TaskId};
use chrono::Utc;
use serde::Deserialize;

/// Move a task to a position in another column (or within its own).
///
/// The removal from `from` tolerates stale caller state: if that column
/// does not actually hold the task, the removal is a no-op and the task
/// still ends up exactly once in the destination.
#[derive(Debug, Deserialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The column the caller believes currently holds the task
    pub from: ColumnId,
    /// The destination column
    pub to: ColumnId,
    /// Insertion position in the destination; past-the-end appends
    pub index: usize,
}

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(
        id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
        index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            index,
        }
    }

    /// Create a MoveTask command that places the task at the front of a column
    pub fn to_front(
        id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
    ) -> Self {
        Self::new(id, from, to, 0)
    }
}

impl Execute for MoveTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> Result<Task> {
        // Validate the destination before touching anything
        if ctx.column(&self.to).is_none() {
            return Err(BoardError::column_not_found(&self.to));
        }

        let moved = match ctx.task_mut(&self.id) {
            Some(task) => {
                task.column = self.to.clone();
                task.updated_at = Utc::now();
                task.clone()
            }
            None => return Err(BoardError::task_not_found(&self.id)),
        };

        // Stale caller state: a missing source column or an id it never
        // held both degrade to a no-op removal
        if let Some(from) = ctx.column_mut(&self.from) {
            from.remove_task(&self.id);
        }
        if let Some(to) = ctx.column_mut(&self.to) {
            to.insert_task_at(self.index, self.id.clone());
        }

        ctx.persist_tasks();
        ctx.persist_columns();
        ctx.emit(BoardEvent::TaskMoved {
            id: self.id.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        });
        tracing::debug!(task = %self.id, from = %self.from, to = %self.to, index = self.index, "task moved");

        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn setup() -> BoardContext {
        BoardContext::in_memory()
    }

    #[test]
    fn test_move_to_other_column() {
        let mut ctx = setup();
        let task = AddTask::new("Task", "todo").execute(&mut ctx).unwrap();

        let moved = MoveTask::to_front(task.id.clone(), "todo", "done")
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(moved.column.as_str(), "done");
        assert!(!ctx.column(&"todo".into()).unwrap().contains(&task.id));
        assert_eq!(ctx.column(&"done".into()).unwrap().task_ids, vec![task.id]);
    }

    #[test]
    fn test_move_inserts_at_index() {
        let mut ctx = setup();
        let a = AddTask::new("a", "done").execute(&mut ctx).unwrap();
        let b = AddTask::new("b", "done").execute(&mut ctx).unwrap();
        let t = AddTask::new("t", "todo").execute(&mut ctx).unwrap();

        MoveTask::new(t.id.clone(), "todo", "done", 1)
            .execute(&mut ctx)
            .unwrap();

        let done = ctx.column(&"done".into()).unwrap();
        assert_eq!(done.task_ids, vec![a.id, t.id, b.id]);
    }

    #[test]
    fn test_move_clamps_past_the_end() {
        let mut ctx = setup();
        let a = AddTask::new("a", "done").execute(&mut ctx).unwrap();
        let t = AddTask::new("t", "todo").execute(&mut ctx).unwrap();

        MoveTask::new(t.id.clone(), "todo", "done", 99)
            .execute(&mut ctx)
            .unwrap();

        let done = ctx.column(&"done".into()).unwrap();
        assert_eq!(done.task_ids, vec![a.id, t.id]);
    }

    #[test]
    fn test_move_with_stale_source_self_heals() {
        let mut ctx = setup();
        let task = AddTask::new("Task", "todo").execute(&mut ctx).unwrap();

        // Simulate drift: the column lists lost the id entirely
        ctx.column_mut(&"todo".into()).unwrap().remove_task(&task.id);

        // The caller still believes the task sits in "todo"
        MoveTask::to_front(task.id.clone(), "todo", "done")
            .execute(&mut ctx)
            .unwrap();

        // The removal was a no-op and the task ends up exactly once,
        // in the destination only
        assert_eq!(
            ctx.column(&"done".into()).unwrap().task_ids,
            vec![task.id.clone()]
        );
        assert!(!ctx.column(&"todo".into()).unwrap().contains(&task.id));
    }

    #[test]
    fn test_move_to_unknown_column() {
        let mut ctx = setup();
        let task = AddTask::new("Task", "todo").execute(&mut ctx).unwrap();

        let result =
            MoveTask::to_front(task.id.clone(), "todo", "nonexistent").execute(&mut ctx);

        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        // Nothing changed
        assert_eq!(ctx.task(&task.id).unwrap().column.as_str(), "todo");
        assert!(ctx.column(&"todo".into()).unwrap().contains(&task.id));
    }

    #[test]
    fn test_move_unknown_task() {
        let mut ctx = setup();

        let result = MoveTask::to_front("missing", "todo", "done").execute(&mut ctx);
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }

    #[test]
    fn test_move_there_and_back() {
        let mut ctx = setup();
        let x = AddTask::new("x", "todo").execute(&mut ctx).unwrap();
        let t = AddTask::new("t", "todo").execute(&mut ctx).unwrap();

        MoveTask::to_front(t.id.clone(), "todo", "done")
            .execute(&mut ctx)
            .unwrap();
        MoveTask::to_front(t.id.clone(), "done", "todo")
            .execute(&mut ctx)
            .unwrap();

        // Back in the origin column, now at the front
        assert_eq!(ctx.task(&t.id).unwrap().column.as_str(), "todo");
        assert_eq!(
            ctx.column(&"todo".into()).unwrap().task_ids,
            vec![t.id, x.id]
        );
        assert!(ctx.column(&"done".into()).unwrap().task_ids.is_empty());
    }
}
