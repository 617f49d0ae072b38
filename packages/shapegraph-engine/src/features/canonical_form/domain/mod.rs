//! Canonical Form Domain

pub mod canonical_form;
pub mod traversal;

pub use canonical_form::{CanonicalEdge, CanonicalForm, CanonicalFormDocument, CanonicalVertex};
pub use traversal::{IncidentEdge, TraversalKind};
