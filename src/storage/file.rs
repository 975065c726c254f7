//! File-backed key-value store with atomic writes

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::KeyValueStore;

/// Key-value store kept as a single JSON object file
///
/// Every read goes to disk so that two sessions sharing the file see each other's last
/// write (last-write-wins, no locking).
#[derive(Debug, Clone)]
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

    /// Raw file contents; `None` when the file does not exist yet
    fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read store file: {}", self.path.display())),
        }
    }

    fn parse_map(&self, bytes: &[u8]) -> Result<BTreeMap<String, String>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(bytes)
            .with_context(|| format!("Failed to parse store file: {}", self.path.display()))
    }

    /// Read the whole map. A missing file is an empty map.
    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match self.read_bytes()? {
            Some(bytes) => self.parse_map(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Map to write back on update. Unparseable contents are replaced; a failed read is an
    /// error so other keys are never dropped because of it.
    fn map_for_update(&self) -> Result<BTreeMap<String, String>> {
        let Some(bytes) = self.read_bytes()? else {
            return Ok(BTreeMap::new());
        };
        Ok(self.parse_map(&bytes).unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{:#}", e), "replacing corrupt store file");
            BTreeMap::new()
        }))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        // Write atomically (temp file + rename)
        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(map).context("Failed to serialize store")?;
        fs::write(&temp_path, json).context("Failed to write store temp file")?;
        fs::rename(&temp_path, &self.path).context("Failed to rename store temp file")?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_map() {
            Ok(mut map) => map.remove(key),
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "ignoring unreadable store file");
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.map_for_update()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert_eq!(store.get_item("anything"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("store.json"));

        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();

        assert_eq!(store.get_item("a").as_deref(), Some("1"));
        assert_eq!(store.get_item("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_values_visible_to_second_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut writer = FileStore::new(&path);
        writer.set_item("k", "v").unwrap();

        let reader = FileStore::new(&path);
        assert_eq!(reader.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");
        let mut store = FileStore::new(&path);

        store.set_item("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get_item("k"), None);

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_read_failure_fails_write() {
        let dir = TempDir::new().unwrap();
        // A directory at the store path cannot be read as a file
        let path = dir.path().join("store.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get_item("k"), None);

        let err = store.set_item("k", "v").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read store file"));
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_update_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set_item("k", "v").unwrap();

        assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(store.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::new(&path);

        store.set_item("k", "v").unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }
}
