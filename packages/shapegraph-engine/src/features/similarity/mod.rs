//! Similarity Bags
//!
//! Approximate deduplication of components by the set of class-labeled
//! edge signatures they contain.
//!
//! # Example
//! ```
//! use shapegraph_engine::features::similarity::SimilarityGrouper;
//!
//! let outcome = SimilarityGrouper::default().group(&[]);
//! assert!(outcome.bags.is_empty());
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{BagMember, GroupingOutcome, SimilarityBag, SkipReason, SkippedComponent};
pub use infrastructure::{BagRendering, SimilarityGrouper, DEFAULT_MAX_VERTICES};
