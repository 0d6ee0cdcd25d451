//! Identifier newtypes for board entities

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from an existing string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifies a task. Generated as a ULID by the store.
    TaskId
);

string_id!(
    /// Identifies a column. Stable slugs seeded at startup (e.g. "todo").
    ColumnId
);

string_id!(
    /// Identifies a checklist item within a task.
    ChecklistItemId
);

impl TaskId {
    /// Generate a fresh task id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistItemId {
    /// Generate a fresh checklist item id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }
}

impl Default for ChecklistItemId {
    fn default() -> Self {
        Self::new()
    }
}
