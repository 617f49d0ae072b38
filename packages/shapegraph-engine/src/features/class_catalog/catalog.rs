//! Class catalog value and its builder

use std::collections::HashMap;

use crate::shared::models::ClassLabel;

/// Vertex → class / label lookup.
///
/// Unresolved vertices resolve to [`ClassLabel::Unknown`], never to an error.
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    classes: HashMap<String, String>,
    labels: HashMap<String, String>,
}

impl ClassCatalog {
    /// Empty catalog: every vertex is of unknown class
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ClassCatalogBuilder {
        ClassCatalogBuilder::default()
    }

    /// Class of `vertex`, or the unknown sentinel
    pub fn class_of(&self, vertex: &str) -> ClassLabel {
        ClassLabel::from(self.classes.get(vertex).map(String::as_str))
    }

    /// Human label of `vertex`, if one was ingested
    pub fn label_of(&self, vertex: &str) -> Option<&str> {
        self.labels.get(vertex).map(String::as_str)
    }

    /// Number of vertices with a resolved class
    pub fn classified_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct class names
    pub fn distinct_classes(&self) -> usize {
        let mut names: Vec<&str> = self.classes.values().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.labels.is_empty()
    }
}

/// Builder for [`ClassCatalog`]
///
/// A vertex keeps the first class (and first label) it is given, so a
/// dataset declaring several types per vertex resolves deterministically in
/// ingestion order.
#[derive(Debug, Default)]
pub struct ClassCatalogBuilder {
    classes: HashMap<String, String>,
    labels: HashMap<String, String>,
}

impl ClassCatalogBuilder {
    pub fn with_class(mut self, vertex: impl Into<String>, class: impl Into<String>) -> Self {
        self.add_class(vertex, class);
        self
    }

    pub fn with_label(mut self, vertex: impl Into<String>, label: impl Into<String>) -> Self {
        self.add_label(vertex, label);
        self
    }

    /// Record `class` for `vertex` unless it already has one.
    ///
    /// Returns false when an earlier class was kept.
    pub fn add_class(&mut self, vertex: impl Into<String>, class: impl Into<String>) -> bool {
        let vertex = vertex.into();
        if self.classes.contains_key(&vertex) {
            return false;
        }
        self.classes.insert(vertex, class.into());
        true
    }

    pub fn add_label(&mut self, vertex: impl Into<String>, label: impl Into<String>) -> bool {
        let vertex = vertex.into();
        if self.labels.contains_key(&vertex) {
            return false;
        }
        self.labels.insert(vertex, label.into());
        true
    }

    pub fn build(self) -> ClassCatalog {
        ClassCatalog {
            classes: self.classes,
            labels: self.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_vertex_is_unknown() {
        let catalog = ClassCatalog::new();
        assert_eq!(catalog.class_of("http://ex/a"), ClassLabel::Unknown);
        assert_eq!(catalog.label_of("http://ex/a"), None);
    }

    #[test]
    fn test_first_class_wins() {
        let mut builder = ClassCatalog::builder();
        assert!(builder.add_class("a", "Person"));
        assert!(!builder.add_class("a", "Agent"));
        let catalog = builder.with_label("a", "Alice").build();

        assert_eq!(catalog.class_of("a"), ClassLabel::known("Person"));
        assert_eq!(catalog.label_of("a"), Some("Alice"));
        assert_eq!(catalog.classified_count(), 1);
    }

    #[test]
    fn test_distinct_classes() {
        let catalog = ClassCatalog::builder()
            .with_class("a", "Person")
            .with_class("b", "Person")
            .with_class("c", "Org")
            .build();
        assert_eq!(catalog.distinct_classes(), 2);
    }
}
