//! Semantic class label of a vertex

use serde::{Serialize, Serializer};
use std::fmt;

/// Class label attached to a vertex (e.g. its RDF type).
///
/// Vertices the catalog cannot resolve carry [`ClassLabel::Unknown`]. This is
/// ordinary data: it takes part in signatures and canonical forms like any
/// other class and renders as `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassLabel {
    Known(String),
    Unknown,
}

impl ClassLabel {
    /// Rendered name of the sentinel class
    pub const UNKNOWN_NAME: &'static str = "unknown";

    pub fn known(name: impl Into<String>) -> Self {
        ClassLabel::Known(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClassLabel::Known(name) => name,
            ClassLabel::Unknown => Self::UNKNOWN_NAME,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ClassLabel::Unknown)
    }
}

impl From<Option<&str>> for ClassLabel {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(name) => ClassLabel::Known(name.to_string()),
            None => ClassLabel::Unknown,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClassLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_renders_sentinel() {
        let label = ClassLabel::from(None);
        assert!(label.is_unknown());
        assert_eq!(label.to_string(), "unknown");
    }

    #[test]
    fn test_known_label() {
        let label = ClassLabel::from(Some("Person"));
        assert_eq!(label, ClassLabel::known("Person"));
        assert_eq!(label.as_str(), "Person");
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"Person\"");
    }
}
