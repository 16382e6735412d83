//! Generic collection storage: load/seed/prepend/persist for the ordered,
//! newest-first record lists the journal keeps per store key.

pub mod seeds;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::Database;

/// Storage failure taxonomy. `Corrupt` is distinct from an absent value so
/// unparseable user data is surfaced instead of silently re-seeded over.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The persistence medium could not be read or written.
    Unavailable(String),
    /// A stored value exists but does not deserialize.
    Corrupt { key: String, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(message) => write!(f, "Storage unavailable: {}", message),
            StoreError::Corrupt { key, message } => {
                write!(f, "Stored data for '{}' is corrupt: {}", key, message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Ordered record storage for one collection key.
///
/// The first load of a key with no stored value runs the key's seed
/// provider once and persists its output before returning, so a second
/// load observes the same records. An explicitly emptied collection is a
/// present (empty) value and is never re-seeded.
pub struct CollectionStore<R> {
    db: Arc<Database>,
    key: &'static str,
    seed: fn() -> Vec<R>,
}

impl<R> CollectionStore<R>
where
    R: Serialize + DeserializeOwned + Clone,
{
    pub fn new(db: Arc<Database>, key: &'static str, seed: fn() -> Vec<R>) -> Self {
        CollectionStore { db, key, seed }
    }

    /// Load the collection, seeding defaults on the first ever read.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        let stored = self.db.kv_get(self.key).map_err(StoreError::Unavailable)?;

        match stored {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                key: self.key.to_string(),
                message: e.to_string(),
            }),
            None => {
                let defaults = (self.seed)();
                self.persist(&defaults)?;
                log::info!(
                    "Seeded collection '{}' with {} default records",
                    self.key,
                    defaults.len()
                );
                Ok(defaults)
            }
        }
    }

    /// Serialize and write the full collection, replacing any prior value.
    pub fn persist(&self, records: &[R]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records).map_err(|e| {
            StoreError::Unavailable(format!("Failed to encode '{}': {}", self.key, e))
        })?;
        self.db.kv_set(self.key, &raw).map_err(StoreError::Unavailable)
    }

    /// Return a new collection with `record` ahead of all existing entries.
    /// Pure; callers persist the result themselves.
    pub fn prepend(&self, record: R, records: &[R]) -> Vec<R> {
        let mut updated = Vec::with_capacity(records.len() + 1);
        updated.push(record);
        updated.extend_from_slice(records);
        updated
    }
}
