//! Class Catalog
//!
//! Immutable lookup from vertex identifier to semantic class and human
//! label. Populated once during ingestion, then shared read-only (behind
//! `Arc`) by every component built from the same dataset.

mod catalog;

pub use catalog::{ClassCatalog, ClassCatalogBuilder};
