//! Key-value persistence adapter
//!
//! The browser build backs this with local storage; natively a JSON file
//! plays the same role. Consumers only see the `KeyValueStore` trait, so the
//! favorites store and theme preference can be tested against the in-memory
//! implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ClientError, ClientResult};

/// Storage key holding the serialized favorite city list
pub const FAVORITES_KEY: &str = "weatherFavorites";
/// Storage key holding the active theme name
pub const THEME_KEY: &str = "theme";

/// Named string values that survive process restarts.
///
/// Writes are synchronous from the caller's perspective; in a multi-writer
/// setting last-write-wins is the accepted conflict policy.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> ClientResult<()>;
}

/// Volatile store for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ClientResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON object of string entries, rewritten on every
/// set. A missing or unreadable file means an empty store, never an error.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "discarding malformed store file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::Storage(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| ClientError::Storage(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ClientResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path);
        store.set(FAVORITES_KEY, r#"["Bangkok"]"#).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(FAVORITES_KEY), Some(r#"["Bangkok"]"#.to_string()));
    }

    #[test]
    fn test_file_store_recovers_from_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(FAVORITES_KEY), None);
    }
}
