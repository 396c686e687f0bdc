//! Server state - the todo list and its backing file behind one lock
//!
//! The list is loaded once at startup and kept resident. Every request runs
//! its whole read or load-mutate-save cycle while holding the lock, so two
//! requests can never interleave writes to the file.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::todo::{Item, TodoList};

/// Lock-guarded todo list paired with the file it persists to
pub struct TodoStore {
    list: Mutex<TodoList>,
    path: PathBuf,
}

impl TodoStore {
    /// Open the store, loading any existing list from `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let list = TodoList::load(&path)?;
        tracing::debug!(path = ?path, items = list.len(), "Loaded todo list");

        Ok(Self {
            list: Mutex::new(list),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of every item
    pub fn all(&self) -> Vec<Item> {
        self.list.lock().items().to_vec()
    }

    /// Copy of item `id` (1-based)
    pub fn get(&self, id: usize) -> Result<Item> {
        Ok(self.list.lock().get(id)?.clone())
    }

    pub fn add(&self, task: &str) -> Result<()> {
        self.mutate(|list| {
            list.add(task);
            Ok(())
        })
    }

    pub fn complete(&self, id: usize) -> Result<()> {
        self.mutate(|list| list.complete(id))
    }

    pub fn delete(&self, id: usize) -> Result<()> {
        self.mutate(|list| list.delete(id))
    }

    /// Apply `op` to a working copy, persist it, then commit it in memory.
    ///
    /// The in-memory list only changes once the file write succeeded.
    fn mutate<F>(&self, op: F) -> Result<()>
    where
        F: FnOnce(&mut TodoList) -> crate::todo::Result<()>,
    {
        let mut guard = self.list.lock();
        let mut next = guard.clone();
        op(&mut next)?;
        next.save(&self.path)?;
        *guard = next;
        Ok(())
    }
}
