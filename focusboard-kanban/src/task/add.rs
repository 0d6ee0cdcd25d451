//! AddTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::events::BoardEvent;
use crate::execute::Execute;
use crate::types::{ChecklistItem, ColumnId, Priority, Task};
use chrono::NaiveDate;
use serde::Deserialize;

/// Add a new task to the board.
///
/// The id and both timestamps are assigned here; the new id is appended at
/// the end of the target column's task list. Titles are taken as given -
/// whether an empty title is submittable is the caller's decision.
#[derive(Debug, Deserialize)]
pub struct AddTask {
    /// The task title
    pub title: String,
    /// The column to add the task to
    pub column: ColumnId,
    /// Detailed task description
    pub description: Option<String>,
    /// Initial checklist
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Optional deadline
    pub deadline: Option<NaiveDate>,
    /// Responsible members, in display order
    #[serde(default)]
    pub responsible_members: Vec<String>,
    /// Priority; defaults to medium when absent
    pub priority: Option<Priority>,
}

impl AddTask {
    /// Create a new AddTask command with a title and target column
    pub fn new(title: impl Into<String>, column: impl Into<ColumnId>) -> Self {
        Self {
            title: title.into(),
            column: column.into(),
            description: None,
            checklist: Vec::new(),
            deadline: None,
            responsible_members: Vec::new(),
            priority: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the checklist
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the responsible members
    pub fn with_responsible_members(mut self, members: Vec<String>) -> Self {
        self.responsible_members = members;
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Execute for AddTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> Result<Task> {
        let mut task = Task::new(self.title.clone(), self.column.clone());
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        task.checklist = self.checklist.clone();
        task.deadline = self.deadline;
        task.responsible_members = self.responsible_members.clone();
        task.priority = self.priority.unwrap_or_default();

        // The target column must exist, otherwise the task would be
        // orphaned with no column list referencing it
        match ctx.column_mut(&self.column) {
            Some(column) => column.push_task(task.id.clone()),
            None => return Err(BoardError::column_not_found(&self.column)),
        }
        ctx.push_task(task.clone());

        ctx.persist_tasks();
        ctx.persist_columns();
        ctx.emit(BoardEvent::TaskAdded {
            id: task.id.clone(),
        });
        tracing::debug!(task = %task.id, column = %self.column, "task added");

        Ok(task)
    }
}
