//! Incremental search over the investigation catalog.
//!
//! - [`matcher`] - pure substring matching of a query against cases, evidence and events
//! - [`session`] - query store, panel state machine and keyboard navigation
//!
//! Matching is synchronous: every query change recomputes the complete result list, so a
//! settled query always shows exactly what [`match_query`] returns for it.

pub mod matcher;
pub mod session;

pub use matcher::{MAX_RESULTS, MIN_QUERY_LEN, match_catalog, match_query};
pub use session::{Accepted, KeyOutcome, NavKey, PanelState, SearchSession};
