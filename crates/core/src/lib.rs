//! Domain layer for the portfolio site.
//!
//! Everything here is synchronous and operates on data that is loaded once
//! and never mutated: project records, their content blocks, the
//! chronological ordering, and related-project selection.

pub mod block;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod project;
pub mod recency;
pub mod related;
pub mod store;
