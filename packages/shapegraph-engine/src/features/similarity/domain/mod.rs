//! Similarity Domain

pub mod bag;

pub use bag::{BagMember, GroupingOutcome, SimilarityBag, SkipReason, SkippedComponent};
