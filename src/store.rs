use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::HIGH_SCORE_KEY;

const APP_DIR_NAME: &str = "grid-snake";
const STORE_FILE_NAME: &str = "store.json";

/// Failure reported by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("store file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store is unavailable")]
    Unavailable,
}

/// Minimal string key-value persistence used for the high score.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails, standing in for unavailable storage.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            failing: true,
        }
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self {
            values,
            failing: false,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// JSON object of string keys to string values on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Opens the store at the platform-correct data path.
    #[must_use]
    pub fn open_default() -> Self {
        Self::new(default_store_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(error @ StoreError::Malformed { .. }) => {
                warn!(%error, "replacing malformed store file");
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };
        entries.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Returns the platform-correct store file path.
#[must_use]
pub fn default_store_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(STORE_FILE_NAME);
    base
}

/// Reads the persisted high score.
///
/// Missing, unreadable, or non-numeric values all yield 0.
pub fn load_high_score<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    match store.get(HIGH_SCORE_KEY) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, "ignoring non-numeric stored high score");
            0
        }),
        Ok(None) => 0,
        Err(error) => {
            warn!(%error, "failed to load high score");
            0
        }
    }
}

/// Writes the high score, logging instead of failing.
pub fn save_high_score<S: KeyValueStore + ?Sized>(store: &mut S, score: u32) {
    match store.set(HIGH_SCORE_KEY, &score.to_string()) {
        Ok(()) => debug!(score, "persisted high score"),
        Err(error) => warn!(%error, score, "failed to save high score"),
    }
}
