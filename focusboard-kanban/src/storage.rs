//! Durable record storage
//!
//! Board state persists as two named records: one holding the serialized
//! task collection, one holding the serialized column collection. Both are
//! read once when a context opens and rewritten in full after every
//! mutation to the respective collection.
//!
//! The in-memory state is the source of truth; storage is a best-effort
//! mirror. Write failures are logged by the context, never propagated.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the record holding the task collection
pub const TASKS_RECORD: &str = "tasks";

/// Name of the record holding the column collection
pub const COLUMNS_RECORD: &str = "columns";

/// A local key-value store for named records
pub trait RecordStore {
    /// Read a record. `Ok(None)` means the record has never been written.
    fn read(&self, name: &str) -> Result<Option<String>>;

    /// Write a record, replacing any previous payload
    fn write(&self, name: &str, payload: &str) -> Result<()>;
}

/// File-backed record store: one `<name>.json` per record under a root
/// directory, written atomically via temp file + rename.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to a record's JSON file
    pub fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

impl RecordStore for FileRecordStore {
    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, name: &str, payload: &str) -> Result<()> {
        atomic_write(&self.record_path(name), payload.as_bytes())
    }
}

/// In-memory record store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemRecordStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemRecordStore {
    fn read(&self, name: &str) -> Result<Option<String>> {
        Ok(self.records.borrow().get(name).cloned())
    }

    fn write(&self, name: &str, payload: &str) -> Result<()> {
        self.records
            .borrow_mut()
            .insert(name.to_string(), payload.to_string());
        Ok(())
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write to temp file in same directory
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)?;

    Ok(())
}
