//! Key/value persistence behind a trait
//!
//! The original system kept session and shared task state in browser local
//! storage. Here the same role is played by JSON files under `~/.care-tui/`,
//! reached only through the `Storage` trait so stores can be faked in tests.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn clear(&mut self, key: &str);
}

/// One file per key under a dot directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// `~/.care-tui`, shared with the config file.
    pub fn default_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".care-tui"))
    }

    pub fn open_default() -> Result<Self> {
        Self::default_dir()
            .map(Self::new)
            .ok_or_else(|| anyhow!("could not determine home directory"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) {
        self.map.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("auth_user").is_none());

        storage.set("auth_user", "{\"id\":\"1\"}").unwrap();
        assert_eq!(storage.get("auth_user").as_deref(), Some("{\"id\":\"1\"}"));

        storage.clear("auth_user");
        assert!(storage.get("auth_user").is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested"));

        assert!(storage.get("tasks").is_none());
        storage.set("tasks", "[]").unwrap();
        assert_eq!(storage.get("tasks").as_deref(), Some("[]"));

        // Overwrite wins.
        storage.set("tasks", "[1]").unwrap();
        assert_eq!(storage.get("tasks").as_deref(), Some("[1]"));

        storage.clear("tasks");
        assert!(storage.get("tasks").is_none());
        // Clearing an absent key is a no-op.
        storage.clear("tasks");
    }
}
