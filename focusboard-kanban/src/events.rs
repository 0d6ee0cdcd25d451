//! Change notification for board consumers
//!
//! Every successful mutation emits one event. Renderers subscribe to know
//! when to refresh instead of being coupled to the mutation call sites.

use crate::types::{ColumnId, TaskId};
use serde::Serialize;

/// A change to the board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    TaskAdded { id: TaskId },
    TaskUpdated { id: TaskId },
    TaskDeleted { id: TaskId },
    TaskMoved { id: TaskId, from: ColumnId, to: ColumnId },
    ColumnReordered { id: ColumnId },
}

impl BoardEvent {
    /// The task this event concerns, if any
    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::TaskAdded { id }
            | Self::TaskUpdated { id }
            | Self::TaskDeleted { id }
            | Self::TaskMoved { id, .. } => Some(id),
            Self::ColumnReordered { .. } => None,
        }
    }
}
