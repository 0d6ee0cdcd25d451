//! Task operations

mod add;
mod delete;
mod mv;
mod reorder;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use mv::MoveTask;
pub use reorder::ReorderTask;
pub use update::UpdateTask;
