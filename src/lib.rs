//! Case Search - incremental search for an investigation dashboard
//!
//! Finds cases, evidence and timeline events in a catalog snapshot as the user types,
//! remembers recently accepted searches, and hands the chosen record's target path to a
//! navigator. It provides:
//!
//! - Substring matching with a minimum query length and a result cap ([`search`])
//! - A search session with a panel state machine and keyboard navigation
//! - A bounded, deduplicated history persisted through a key-value store ([`history`])
//! - A terminal UI and a scriptable CLI on top of both
//!
//! # Example
//!
//! ```
//! use case_search::history::HistoryStore;
//! use case_search::parsers::parse_catalog;
//! use case_search::storage::MemoryStore;
//! use case_search::{PathCollector, SearchSession};
//!
//! let catalog = parse_catalog(r#"{"cases":[{"id":"c1","title":"S3 Bucket Breach"}]}"#)?;
//! let history = HistoryStore::load(Box::new(MemoryStore::new()));
//! let mut session = SearchSession::new(catalog, history);
//! session.set_query("s3");
//!
//! let mut navigator = PathCollector::new();
//! session.accept(0, &mut navigator);
//! assert_eq!(navigator.last(), Some("/cases/c1"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod parsers;
pub mod search;
pub mod stats;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use error::{ApiError, ApiErrorKind};
pub use models::{Catalog, ResultKind, SearchResult};
pub use navigation::{Navigator, PathCollector};
pub use parsers::load_catalog;
pub use search::{SearchSession, match_catalog, match_query};
