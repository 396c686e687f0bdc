//! Todo list model and JSON file persistence
//!
//! The list is an ordered sequence of items. An item's external identifier
//! is its 1-based position, so deleting an item renumbers every item after it.
//!
//! On disk the list is a JSON array of `{Task, Done, CreatedAt, CompletedAt}`
//! objects. An unset completion time is stored as the zero timestamp
//! `0001-01-01T00:00:00Z`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors from list operations and persistence
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("item {0} does not exist")]
    ItemNotFound(usize),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed todo data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TodoError>;

/// A single task in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub task: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "zero_time")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Item {
    fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            done: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

/// Ordered todo list addressed by 1-based position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, incomplete item
    pub fn add(&mut self, task: impl Into<String>) {
        self.items.push(Item::new(task));
    }

    /// Mark item `i` done and stamp its completion time
    pub fn complete(&mut self, i: usize) -> Result<()> {
        let idx = self.index(i)?;
        let item = &mut self.items[idx];
        item.done = true;
        item.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Remove item `i`; later items shift down by one
    pub fn delete(&mut self, i: usize) -> Result<()> {
        let idx = self.index(i)?;
        self.items.remove(idx);
        Ok(())
    }

    pub fn get(&self, i: usize) -> Result<&Item> {
        let idx = self.index(i)?;
        Ok(&self.items[idx])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Load a list from `path`.
    ///
    /// A missing or empty file yields an empty list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(TodoError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| TodoError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite `path` with the whole list
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec(self).map_err(|source| TodoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| TodoError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn index(&self, i: usize) -> Result<usize> {
        if i == 0 || i > self.items.len() {
            return Err(TodoError::ItemNotFound(i));
        }
        Ok(i - 1)
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, item) in self.items.iter().enumerate() {
            let prefix = if item.done { "X " } else { "  " };
            writeln!(f, "{prefix}{}: {}", k + 1, item.task)?;
        }
        Ok(())
    }
}

/// Serde adapter mapping `None` to the zero timestamp and back
mod zero_time {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const ZERO: &str = "0001-01-01T00:00:00Z";
    // 0001-01-01T00:00:00Z as seconds since the Unix epoch
    const ZERO_SECS: i64 = -62_135_596_800;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_str(ZERO),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
        Ok(value.filter(|ts| ts.timestamp() > ZERO_SECS))
    }
}
