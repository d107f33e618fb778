//! Key/value persistence
//!
//! A LocalStorage-shaped interface: string values under string keys.
//! - `MemoryStorage`: in-process map (tests, ephemeral sessions)
//! - `FileStorage`: one `<key>.json` file per key in a data directory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

/// String storage keyed by name
pub trait Storage {
    /// Read a value; `Ok(None)` when the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Load a JSON value, falling back to `T::default()` when missing or unreadable
pub fn load_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage + ?Sized,
{
    match storage.get_item(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => {
                log::info!("Loaded {}", key);
                value
            }
            Err(e) => {
                log::warn!("Discarding corrupt {}: {}", key, e);
                T::default()
            }
        },
        Ok(None) => {
            log::info!("No {} found, using defaults", key);
            T::default()
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", key, e);
            T::default()
        }
    }
}

/// Serialize a value as JSON under `key`
pub fn save_json<T, S>(storage: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: Storage + ?Sized,
{
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)?;
    log::debug!("Saved {}", key);
    Ok(())
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for storage, creating it if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        // Write then rename so a crash never leaves a half-written file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn test_memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);
        save_json(&mut storage, "k", &Sample { value: 7 }).unwrap();
        let loaded: Sample = load_or_default(&storage, "k");
        assert_eq!(loaded, Sample { value: 7 });
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "not json").unwrap();
        let loaded: Sample = load_or_default(&storage, "k");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_file_storage() {
        let dir = std::env::temp_dir().join(format!("hurdle-hero-test-{}", std::process::id()));
        let mut storage = FileStorage::open(&dir).unwrap();
        assert_eq!(storage.get_item("missing").unwrap(), None);
        storage.set_item("best", "{\"value\":3}").unwrap();
        assert_eq!(storage.get_item("best").unwrap().as_deref(), Some("{\"value\":3}"));
        let _ = fs::remove_dir_all(&dir);
    }
}
