//! Task types: Task, ChecklistItem, Priority

use super::ids::{ChecklistItemId, ColumnId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// Ordered checklist; drives the progress ratio
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    /// Optional calendar-date deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Free-text member names, insertion order preserved for display
    #[serde(default)]
    pub responsible_members: Vec<String>,

    #[serde(default)]
    pub priority: Priority,

    /// The column that owns this task. Changed only by the move operation.
    pub column: ColumnId,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given title in the given column
    pub fn new(title: impl Into<String>, column: impl Into<ColumnId>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            checklist: Vec::new(),
            deadline: None,
            responsible_members: Vec::new(),
            priority: Priority::default(),
            column: column.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
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
        self.priority = priority;
        self
    }

    /// Checklist counts as (total, completed)
    pub fn checklist_counts(&self) -> (usize, usize) {
        let total = self.checklist.len();
        let completed = self.checklist.iter().filter(|item| item.completed).count();
        (total, completed)
    }

    /// Progress as fraction of completed checklist items.
    ///
    /// Returns 0.0 when the checklist is empty.
    pub fn progress(&self) -> f64 {
        let (total, completed) = self.checklist_counts();
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64
    }

    /// Whether the deadline lies strictly before the given date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline.is_some_and(|deadline| deadline < today)
    }

    /// Find a checklist item by id
    pub fn find_checklist_item(&self, id: &ChecklistItemId) -> Option<&ChecklistItem> {
        self.checklist.iter().find(|item| &item.id == id)
    }

    /// Find a checklist item by id (mutable)
    pub fn find_checklist_item_mut(
        &mut self,
        id: &ChecklistItemId,
    ) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|item| &item.id == id)
    }
}

/// A sub-unit of a task with text and a completed flag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    /// Create a new, incomplete checklist item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Task priority. New tasks default to `Medium`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}
