//! Data models for the investigation catalog and search results.
//!
//! - [`Case`], [`Evidence`], [`TimelineEvent`] - records supplied by the dashboard backend
//! - [`Catalog`] - the already-fetched collections the search runs over
//! - [`SearchResult`] - one matched entry with a navigable target path
//!
//! Records deserialize from the backend's JSON with camelCase aliases accepted for the
//! multi-word fields.

pub mod case;
pub mod search;

pub use case::{Case, CaseStatus, Catalog, Evidence, TimelineEvent};
pub use search::{ResultKind, SearchResult};
