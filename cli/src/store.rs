//! File-backed key-value store for the CLI session.
//!
//! The file holds one flat JSON object of string values. A missing or
//! unreadable file reads as empty; write failures are logged and dropped, the
//! same contract `localStorage` gives the browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use session::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable store file");
            BTreeMap::new()
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) {
        if let Err(e) = self.try_save(items) {
            tracing::warn!(path = %self.path.display(), error = %e, "store write failed");
        }
    }

    fn try_save(&self, items: &BTreeMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = serde_json::to_string_pretty(items).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, rendered)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = self.load();
        items.insert(key.to_owned(), value.to_owned());
        self.save(&items);
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.load();
        if items.remove(key).is_some() {
            self.save(&items);
        }
    }
}
