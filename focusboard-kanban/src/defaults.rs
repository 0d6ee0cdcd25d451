//! Seeded board configuration

use crate::types::Column;

/// The column set used when storage holds no column record.
///
/// Operations never assume this cardinality; any nonempty column set works.
pub fn seed_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do"),
        Column::new("in-progress", "In Progress"),
        Column::new("review", "Review"),
        Column::new("done", "Done"),
    ]
}
