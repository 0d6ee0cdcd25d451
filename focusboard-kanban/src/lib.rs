//! Kanban board engine with JSON-record storage
//!
//! This crate owns the canonical board state for the Focusboard app: the
//! task collection and the ordered column task lists. All writes go
//! through command structs; a context provides state access and
//! persistence, and every mutation leaves the board satisfying its
//! cross-reference invariant - each task belongs to exactly one column,
//! and that column's ordered list holds the task's id exactly once.
//!
//! ## Basic Usage
//!
//! ```rust
//! use focusboard_kanban::{task::AddTask, BoardContext, Execute};
//!
//! # fn example() -> focusboard_kanban::Result<()> {
//! let mut ctx = BoardContext::in_memory();
//!
//! let task = AddTask::new("Write the release notes", "todo")
//!     .with_description("Cover the storage changes")
//!     .execute(&mut ctx)?;
//!
//! assert_eq!(ctx.tasks_in(&"todo".into())[0].id, task.id);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Storage
//!
//! Durable state is two named records in a local store, rewritten in
//! full after every mutation:
//!
//! ```text
//! board/
//! ├── tasks.json     # Task collection (JSON array)
//! └── columns.json   # Column collection (JSON array)
//! ```
//!
//! The in-memory state is the source of truth; storage is a best-effort
//! mirror. Reads happen once when a context opens (missing records fall
//! back to an empty task collection and the seeded column set), and a
//! failed write is logged without rolling back the mutation.
//!
//! ## Drag and drop
//!
//! The pointer-gesture layer reports drag events with tagged drop
//! targets ([`drag::DropTarget`]); [`drag::apply_drag_end`] turns a
//! drag-end report into at most one move or reorder.

mod context;
mod error;
mod execute;

pub mod defaults;
pub mod drag;
pub mod events;
pub mod storage;
pub mod task;
pub mod types;

pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use execute::Execute;

// Re-export commonly used types
pub use events::BoardEvent;
pub use types::{ChecklistItem, ChecklistItemId, Column, ColumnId, Priority, Task, TaskId};
