use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::PanelError;

/// Persistent string key/value store backed by a JSON file, the panel's
/// counterpart of the browser's local storage. Every write is flushed to disk.
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: RwLock<BTreeMap<String, String>>,
}

impl LocalStorage {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "Local storage opened");

        Ok(Self {
            path: Some(path),
            entries: RwLock::new(entries),
        })
    }

    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), PanelError> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    pub fn remove(&self, key: &str) -> Result<(), PanelError> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), PanelError> {
        if let Some(path) = &self.path {
            fs::write(path, serde_json::to_vec_pretty(entries)?)?;
        }
        Ok(())
    }
}
