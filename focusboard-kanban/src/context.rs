//! BoardContext - state and persistence primitives for board operations
//!
//! The context owns the in-memory task and column collections (the source
//! of truth), the durable record store, and change subscribers. No business
//! logic methods, just data access primitives. Commands do all the work.

use crate::defaults::seed_columns;
use crate::events::BoardEvent;
use crate::storage::{MemRecordStore, RecordStore, COLUMNS_RECORD, TASKS_RECORD};
use crate::types::{Column, ColumnId, Task, TaskId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::warn;

/// Context passed to every command - provides access, not logic
pub struct BoardContext {
    tasks: Vec<Task>,
    columns: Vec<Column>,
    store: Box<dyn RecordStore>,
    subscribers: Vec<Sender<BoardEvent>>,
}

impl BoardContext {
    /// Open a context over the given record store.
    ///
    /// Both records are read once. A record that is absent or fails to
    /// parse falls back to its default (empty task collection, seeded
    /// column set); the in-memory state then becomes authoritative and
    /// overwrites storage on the next mutation.
    pub fn open(store: Box<dyn RecordStore>) -> Self {
        let tasks = load_record(store.as_ref(), TASKS_RECORD).unwrap_or_default();
        let columns =
            load_record(store.as_ref(), COLUMNS_RECORD).unwrap_or_else(seed_columns);

        Self {
            tasks,
            columns,
            store,
            subscribers: Vec::new(),
        }
    }

    /// Open a context backed by an in-memory store (tests, ephemeral sessions)
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemRecordStore::new()))
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The task collection
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The column collection, in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a task by id
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Look up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Tasks in a column, in the column's display order
    pub fn tasks_in(&self, column: &ColumnId) -> Vec<&Task> {
        let Some(column) = self.column(column) else {
            return Vec::new();
        };
        column
            .task_ids
            .iter()
            .filter_map(|id| self.task(id))
            .collect()
    }

    // =========================================================================
    // Mutation primitives (commands only)
    // =========================================================================

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    pub(crate) fn columns_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.columns.iter_mut()
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove a task from the collection, returning it
    pub(crate) fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(index))
    }

    // =========================================================================
    // Persistence (best effort)
    // =========================================================================

    /// Rewrite the task record in full.
    ///
    /// A write failure is logged and swallowed: the in-memory state is the
    /// source of truth and is never rolled back.
    pub(crate) fn persist_tasks(&self) {
        self.persist_record(TASKS_RECORD, &self.tasks);
    }

    /// Rewrite the column record in full. Same failure policy as tasks.
    pub(crate) fn persist_columns(&self) {
        self.persist_record(COLUMNS_RECORD, &self.columns);
    }

    fn persist_record<T: Serialize>(&self, name: &str, items: &[T]) {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(record = name, error = %err, "failed to serialize record");
                return;
            }
        };
        if let Err(err) = self.store.write(name, &payload) {
            warn!(
                record = name,
                error = %err,
                "failed to persist record; in-memory state keeps the change"
            );
        }
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Subscribe to board changes. The receiver sees every event emitted
    /// after this call; dropping it unsubscribes on the next emit.
    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: BoardEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn load_record<T: DeserializeOwned>(store: &dyn RecordStore, name: &str) -> Option<Vec<T>> {
    match store.read(name) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(record = name, error = %err, "corrupt record, using defaults");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(record = name, error = %err, "unreadable record, using defaults");
            None
        }
    }
}
