//! Loading the catalog snapshot exported by the dashboard backend
//!
//! The snapshot is a single JSON document. Unlike a line-oriented log there is no partial
//! recovery: a document that fails to parse is rejected as a whole, with the serde error
//! (line and column) in the error chain.

pub mod catalog;

pub use catalog::{load_catalog, parse_catalog};
