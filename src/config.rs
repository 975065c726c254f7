//! Runtime configuration
//!
//! Values come from command-line flags first, then environment variables (`CASE_SEARCH_DATA`,
//! `CASE_SEARCH_HISTORY`, handled by clap), then defaults under the platform data directory:
//! - Linux: `~/.local/share/case-search/`
//! - macOS: `~/Library/Application Support/case-search/`
//! - Windows: `%APPDATA%\case-search\`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::storage::{FileStore, KeyValueStore, MemoryStore};

pub const APP_DIR_NAME: &str = "case-search";
pub const CATALOG_FILENAME: &str = "catalog.json";
pub const HISTORY_FILENAME: &str = "history.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    /// `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Fill unset values from the platform data directory
    pub fn resolve(
        data_file: Option<PathBuf>,
        history_file: Option<PathBuf>,
        no_history: bool,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        // Only touch the platform directory when a default is actually needed
        let needs_default = data_file.is_none() || (history_file.is_none() && !no_history);
        let app_dir = if needs_default { Some(default_app_dir()?) } else { None };

        Ok(Self::resolve_in(data_file, history_file, no_history, log_file, app_dir.as_deref()))
    }

    fn resolve_in(
        data_file: Option<PathBuf>,
        history_file: Option<PathBuf>,
        no_history: bool,
        log_file: Option<PathBuf>,
        app_dir: Option<&Path>,
    ) -> Self {
        let default_in = |name: &str| app_dir.map(|dir| dir.join(name)).unwrap_or_default();

        let data_file = data_file.unwrap_or_else(|| default_in(CATALOG_FILENAME));
        let history_file = if no_history {
            None
        } else {
            Some(history_file.unwrap_or_else(|| default_in(HISTORY_FILENAME)))
        };

        Self { data_file, history_file, log_file }
    }

    /// Key-value store backing the search history
    pub fn history_store(&self) -> Box<dyn KeyValueStore> {
        match &self.history_file {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        }
    }
}

/// Platform data directory for this application
pub fn default_app_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::history::HISTORY_KEY;

    #[test]
    fn test_defaults_under_app_dir() {
        let app_dir = PathBuf::from("/data/case-search");
        let config = Config::resolve_in(None, None, false, None, Some(&app_dir));

        assert_eq!(config.data_file, app_dir.join("catalog.json"));
        assert_eq!(config.history_file, Some(app_dir.join("history.json")));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_explicit_values_win() {
        let config = Config::resolve_in(
            Some(PathBuf::from("/tmp/export.json")),
            Some(PathBuf::from("/tmp/h.json")),
            false,
            Some(PathBuf::from("/tmp/cs.log")),
            Some(Path::new("/data/case-search")),
        );

        assert_eq!(config.data_file, PathBuf::from("/tmp/export.json"));
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/h.json")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/cs.log")));
    }

    #[test]
    fn test_no_history_disables_file() {
        let config = Config::resolve_in(
            Some(PathBuf::from("/tmp/export.json")),
            Some(PathBuf::from("/tmp/h.json")),
            true,
            None,
            None,
        );
        assert_eq!(config.history_file, None);
    }

    #[test]
    fn test_resolve_with_all_paths_given_skips_platform_dir() {
        let config = Config::resolve(
            Some(PathBuf::from("/tmp/export.json")),
            None,
            true,
            None,
        )
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/export.json"));
    }

    #[test]
    fn test_history_store_uses_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let config = Config {
            data_file: dir.path().join("catalog.json"),
            history_file: Some(path.clone()),
            log_file: None,
        };

        let mut store = config.history_store();
        store.set_item(HISTORY_KEY, "[\"abc\"]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_history_store_in_memory() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_file: dir.path().join("catalog.json"),
            history_file: None,
            log_file: None,
        };

        let mut store = config.history_store();
        store.set_item(HISTORY_KEY, "[]").unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
