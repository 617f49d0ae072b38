//! Shared models

mod class_label;
mod signature;
mod vertex;

pub use class_label::ClassLabel;
pub use signature::{EdgeSignature, SignatureDelta, SignatureHistogram};
pub use vertex::{VertexId, VertexOrder};
