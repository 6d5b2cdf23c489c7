//! Key/value persistence for settings, high scores and stats
//!
//! The simulation never touches storage. Records are loaded and saved through
//! a [`Storage`] handed in by the platform layer:
//! - `MemoryStorage` for tests and headless runs
//! - `platform::FileStorage` on native
//! - `platform::web::LocalStorage` in the browser

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key/value store
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistError>;
}

/// In-process storage, lost on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Load a JSON record, falling back to default when missing or unreadable
pub fn load_json<T>(storage: &dyn Storage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.get(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => {
                log::info!("Loaded {key}");
                value
            }
            Err(e) => {
                log::warn!("Discarding unreadable {key}: {e}");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("Could not read {key}: {e}");
            T::default()
        }
    }
}

pub fn save_json<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), PersistError> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Record {
        n: u32,
    }

    #[test]
    fn test_roundtrip() {
        let mut storage = MemoryStorage::new();
        save_json(&mut storage, "rec", &Record { n: 7 }).unwrap();
        let back: Record = load_json(&storage, "rec");
        assert_eq!(back, Record { n: 7 });
    }

    #[test]
    fn test_missing_and_corrupt_fall_back() {
        let mut storage = MemoryStorage::new();
        assert_eq!(load_json::<Record>(&storage, "rec"), Record::default());
        storage.set("rec", "{not json").unwrap();
        assert_eq!(load_json::<Record>(&storage, "rec"), Record::default());
    }

    #[test]
    fn test_remove() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }
}
