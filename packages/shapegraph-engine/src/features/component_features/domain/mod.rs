//! Component Features Domain
//!
//! Graph snapshot and the value types the feature engine reports.

pub mod component;
pub mod degree;
pub mod document;
pub mod flags;
pub mod measurement;

pub use component::{Component, GraphView};
pub use degree::{DegreeKind, DegreeStats, VertexDegree};
pub use document::{ComponentDocument, DocumentEdge, DocumentVertex};
pub use flags::{ShapeFamily, ShapeFlags};
pub use measurement::Measurement;
