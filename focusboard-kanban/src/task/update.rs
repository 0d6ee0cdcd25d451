//! UpdateTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::events::BoardEvent;
use crate::execute::Execute;
use crate::types::{ChecklistItem, Priority, Task, TaskId};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Update an existing task in place.
///
/// Only the fields that are set are merged; `updated_at` is refreshed on
/// every successful call. There is deliberately no column field here -
/// column membership changes only through the move operation, which keeps
/// the column task lists in step with the task.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// Replace the checklist
    pub checklist: Option<Vec<ChecklistItem>>,
    /// New deadline (None = don't change, Some(None) = clear, Some(Some(d)) = set)
    pub deadline: Option<Option<NaiveDate>>,
    /// Replace the responsible members
    pub responsible_members: Option<Vec<String>>,
    /// New priority
    pub priority: Option<Priority>,
}

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            checklist: None,
            deadline: None,
            responsible_members: None,
            priority: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the checklist (replaces all existing items)
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = Some(checklist);
        self
    }

    /// Set or clear the deadline
    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the responsible members (replaces all existing members)
    pub fn with_responsible_members(mut self, members: Vec<String>) -> Self {
        self.responsible_members = Some(members);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Execute for UpdateTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardContext) -> Result<Task> {
        let Some(task) = ctx.task_mut(&self.id) else {
            return Err(BoardError::task_not_found(&self.id));
        };

        // Apply updates
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(checklist) = &self.checklist {
            task.checklist = checklist.clone();
        }
        if let Some(deadline) = &self.deadline {
            task.deadline = *deadline;
        }
        if let Some(members) = &self.responsible_members {
            task.responsible_members = members.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        task.updated_at = Utc::now();
        let task = task.clone();

        ctx.persist_tasks();
        ctx.emit(BoardEvent::TaskUpdated {
            id: task.id.clone(),
        });
        tracing::debug!(task = %task.id, "task updated");

        Ok(task)
    }
}
