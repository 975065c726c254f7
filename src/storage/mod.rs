//! Persistent key-value storage
//!
//! The search history survives restarts through a small string key-value store, the
//! terminal counterpart of browser local storage:
//! - [`FileStore`]: one JSON object on disk, written atomically (temp file + rename)
//! - [`MemoryStore`]: process-local map, used for `--no-history` runs and tests

pub mod file;
pub mod memory;

use anyhow::Result;
pub use file::FileStore;
pub use memory::MemoryStore;

/// String key-value store with local-storage semantics
pub trait KeyValueStore {
    /// Read a value; missing keys and unreadable storage both yield `None`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}
