//! Recent search history
//!
//! A bounded, deduplicated, most-recent-first list of accepted queries. The list is read
//! once when a session starts and written back after every accepted selection. Storage
//! problems never reach the caller: a missing or corrupt value loads as an empty list and
//! a failed write is logged and dropped.

use crate::storage::KeyValueStore;

/// Storage key the history list lives under
pub const HISTORY_KEY: &str = "case-search.history";
/// Maximum number of remembered queries
pub const MAX_HISTORY: usize = 5;

pub struct HistoryStore {
    entries: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl HistoryStore {
    /// Load persisted history from `store`
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries =
            store.get_item(HISTORY_KEY).map(|raw| parse_entries(&raw)).unwrap_or_default();
        Self { entries, store }
    }

    /// Remembered queries, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `query` to the front, dropping any older copy and anything past
    /// [`MAX_HISTORY`], then persist before returning.
    pub fn record(&mut self, query: &str) {
        if let Some(pos) = self.entries.iter().position(|q| q == query) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY);
        self.persist();
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize search history");
                return;
            }
        };
        if let Err(e) = self.store.set_item(HISTORY_KEY, &json) {
            tracing::warn!(error = %format!("{:#}", e), "failed to persist search history");
        }
    }
}

/// Decode a stored list, enforcing the length and uniqueness invariants on whatever was
/// found. Anything unparseable is an empty history.
fn parse_entries(raw: &str) -> Vec<String> {
    let stored: Vec<String> = match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed search history");
            return Vec::new();
        }
    };

    let mut entries: Vec<String> = Vec::with_capacity(MAX_HISTORY);
    for query in stored {
        if entries.len() == MAX_HISTORY {
            break;
        }
        if !query.is_empty() && !entries.contains(&query) {
            entries.push(query);
        }
    }
    entries
}
