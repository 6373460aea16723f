//! Session token persistence
//!
//! A small key-value document on disk. The auth token lives in one fixed
//! slot: written once per successful login, read at bootstrap to decide
//! between the anonymous and authenticated start views.

use anyhow::Result;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Key of the auth token slot
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Trait for session persistence, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Read a value from the store
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value to the store
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value from the store
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed session store in the platform data directory
pub struct FileSessionStore {
    path: Option<PathBuf>,
}

impl FileSessionStore {
    /// Create a store at the platform-default session file location
    pub fn new() -> Self {
        let path = ProjectDirs::from("io", "nuber", "podcast-tui")
            .map(|dirs| dirs.data_dir().join("session.json"));
        Self { path }
    }

    /// Create a store backed by an explicit file (used by tests)
    #[allow(dead_code)]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn read_document(&self) -> BTreeMap<String, String> {
        let Some(path) = &self.path else {
            return BTreeMap::new();
        };
        let Ok(content) = fs::read_to_string(path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(document)?)?;
        }
        Ok(())
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_document().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut document = self.read_document();
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut document = self.read_document();
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}
