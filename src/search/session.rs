//! Query store, panel state machine and keyboard navigation.
//!
//! A [`SearchSession`] owns the query text, the open/closed flag of the result panel, the
//! current result list and the selection index. The panel state is derived from those:
//!
//! | open  | query chars | results   | state            |
//! |-------|-------------|-----------|------------------|
//! | no    | any         | any       | `Idle`           |
//! | yes   | < 2         | -         | `ShowingHistory` (or `Idle` without history) |
//! | yes   | >= 2        | non-empty | `ShowingResults` |
//! | yes   | >= 2        | empty     | `NoResults`      |
//!
//! Every query change re-runs the matcher synchronously and resets the selection, so the
//! selection is always a valid index into the visible list or that list is empty.

use super::matcher::{MIN_QUERY_LEN, match_catalog};
use crate::history::HistoryStore;
use crate::models::{Catalog, SearchResult};
use crate::navigation::Navigator;

/// Longest query the session accepts, in bytes
pub const MAX_QUERY_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    ShowingHistory,
    ShowingResults,
    NoResults,
}

/// Keys the navigator reacts to; everything else is text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// What a navigation key did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Panel closed, or the key had nothing to act on
    Ignored,
    /// Selection index changed (or was already at the clamp)
    Moved,
    /// Panel closed, query kept
    Closed,
    /// Result accepted and handed to the navigator
    Accepted(Accepted),
    /// History entry copied back into the query
    Recalled(String),
}

/// A result the user picked, with the query that found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub query: String,
    pub result: SearchResult,
}

pub struct SearchSession {
    catalog: Catalog,
    history: HistoryStore,
    query: String,
    open: bool,
    results: Vec<SearchResult>,
    selected_idx: usize,
}

impl SearchSession {
    pub fn new(catalog: Catalog, history: HistoryStore) -> Self {
        Self {
            catalog,
            history,
            query: String::new(),
            open: false,
            results: Vec::new(),
            selected_idx: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        match self.state() {
            PanelState::ShowingResults => self.results.get(self.selected_idx),
            _ => None,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the query is long enough to be matched
    pub fn query_is_active(&self) -> bool {
        self.query.chars().count() >= MIN_QUERY_LEN
    }

    pub fn state(&self) -> PanelState {
        if !self.open {
            PanelState::Idle
        } else if !self.query_is_active() {
            if self.history.is_empty() { PanelState::Idle } else { PanelState::ShowingHistory }
        } else if self.results.is_empty() {
            PanelState::NoResults
        } else {
            PanelState::ShowingResults
        }
    }

    /// Number of entries the selection moves over in the current state
    fn visible_len(&self) -> usize {
        match self.state() {
            PanelState::ShowingResults => self.results.len(),
            PanelState::ShowingHistory => self.history.len(),
            PanelState::Idle | PanelState::NoResults => 0,
        }
    }

    /// Append a typed character. Returns false when the query is at its length limit.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.query.len() + c.len_utf8() > MAX_QUERY_LEN {
            // A rejected keystroke still reopens the panel
            self.open = true;
            return false;
        }
        self.query.push(c);
        self.refresh();
        true
    }

    /// Remove the last character (Backspace). Still counts as a keystroke.
    pub fn pop_char(&mut self) {
        self.query.pop();
        self.refresh();
    }

    /// Replace the whole query, as pasting or recalling does
    pub fn set_query(&mut self, query: &str) {
        self.query = truncate_to_limit(query).to_string();
        self.refresh();
    }

    /// Input gained focus: show history or results for the current query
    pub fn focus(&mut self) {
        self.refresh();
    }

    /// Input lost focus: close the panel, keep the query
    pub fn blur(&mut self) {
        self.close();
    }

    /// Close the panel without touching the query text
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Re-run the matcher for the current query and open the panel
    fn refresh(&mut self) {
        self.open = true;
        self.selected_idx = 0;
        if self.query_is_active() {
            self.results = match_catalog(&self.query, &self.catalog);
        } else {
            self.results.clear();
        }
    }

    /// Move the selection by `delta`, clamped to the visible list (no wraparound)
    pub fn move_selection(&mut self, delta: isize) {
        let total = self.visible_len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);
    }

    /// Apply a navigation key. Does nothing while the panel is closed.
    pub fn handle_key(&mut self, key: NavKey, navigator: &mut dyn Navigator) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::Down => {
                self.move_selection(1);
                KeyOutcome::Moved
            }
            NavKey::Up => {
                self.move_selection(-1);
                KeyOutcome::Moved
            }
            NavKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            NavKey::Enter => match self.state() {
                PanelState::ShowingResults => self
                    .accept(self.selected_idx, navigator)
                    .map(KeyOutcome::Accepted)
                    .unwrap_or(KeyOutcome::Ignored),
                PanelState::ShowingHistory => {
                    let Some(query) = self.history.get(self.selected_idx).map(str::to_string)
                    else {
                        return KeyOutcome::Ignored;
                    };
                    self.recall(&query);
                    KeyOutcome::Recalled(query)
                }
                PanelState::Idle | PanelState::NoResults => KeyOutcome::Ignored,
            },
        }
    }

    /// Accept the result at `idx`: remember the query, reset the session and hand the
    /// target path to `navigator`. Only results on screen can be accepted: a closed panel
    /// or an out-of-range index is a no-op.
    pub fn accept(&mut self, idx: usize, navigator: &mut dyn Navigator) -> Option<Accepted> {
        if self.state() != PanelState::ShowingResults {
            return None;
        }
        let result = self.results.get(idx)?.clone();
        let query = std::mem::take(&mut self.query);

        self.history.record(&query);
        self.open = false;
        self.results.clear();
        self.selected_idx = 0;

        tracing::info!(kind = result.kind.as_str(), id = %result.id, "accepted search result");
        navigator.navigate(&result.target_path);

        Some(Accepted { query, result })
    }

    /// Put a past query back into the input and reopen the panel, without navigating
    pub fn recall(&mut self, query: &str) {
        self.set_query(query);
    }
}

fn truncate_to_limit(query: &str) -> &str {
    if query.len() <= MAX_QUERY_LEN {
        return query;
    }
    let mut end = MAX_QUERY_LEN;
    while !query.is_char_boundary(end) {
        end -= 1;
    }
    &query[..end]
}
