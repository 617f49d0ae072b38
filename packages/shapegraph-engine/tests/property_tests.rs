//! Property-based tests
//!
//! Invariants that should hold for all generated inputs:
//! - Paths: diameter is n - 1 and the path predicates hold
//! - The path predicate agrees with undirected diameter + 1 == vertex count
//! - Colouring: at most 2 colours on bipartite graphs, at most 3 on odd cycles
//! - Idempotence: repeated predicate calls and rebuilt features agree
//! - Canonical forms: deterministic, never larger than the component
//! - Config: every in-range value validates and survives a YAML round trip

mod common;

use common::*;
use proptest::prelude::*;
use shapegraph_engine::config::{AnalysisConfig, Preset, Validatable};
use shapegraph_engine::features::canonical_form::{CanonicalFormBuilder, TraversalKind};
use shapegraph_engine::features::component_features::ComponentFeatures;

/// Random edge list over `v0..v{n-1}`
fn arb_edges(max_vertices: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    (2..max_vertices).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 1..n * 2).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(s, t)| (format!("v{s}"), format!("v{t}")))
                .collect()
        })
    })
}

fn features_from(edges: &[(String, String)], classes: &[&str]) -> ComponentFeatures {
    let mut builder = ComponentBuilder::new();
    for (index, (source, target)) in edges.iter().enumerate() {
        builder = builder
            .with_edge(source, target)
            .with_class(source, classes[index % classes.len()]);
    }
    builder.build()
}

proptest! {
    #[test]
    fn prop_path_diameter(n in 2usize..40) {
        let path = path_features(n);
        prop_assert_eq!(path.diameter(), n - 1);
        prop_assert_eq!(path.diameter_undirected(), n - 1);
        prop_assert!(path.is_path_graph());
        prop_assert!(path.is_tree());
        prop_assert!(!path.is_caterpillar());
        prop_assert!(!path.is_lobster());
        prop_assert_eq!(path.diameter_path().map(|p| p.len()), Some(n));
    }

    #[test]
    fn prop_path_predicate_matches_diameter(edges in arb_edges(10)) {
        let features = features_from(&edges, &["A"]);
        prop_assert_eq!(
            features.is_path_graph(),
            features.diameter_undirected() + 1 == features.vertex_count()
        );
    }

    #[test]
    fn prop_bipartite_uses_two_colours(
        left in 1usize..8,
        right in 1usize..8,
        pairs in prop::collection::vec((0usize..8, 0usize..8), 1..30),
    ) {
        let mut builder = ComponentBuilder::new();
        for (l, r) in pairs {
            builder = builder.with_edge(&format!("l{}", l % left), &format!("r{}", r % right));
        }
        let features = builder.build();
        prop_assert!(features.is_bipartite());
        prop_assert!(features.chromatic_number() <= 2);
    }

    #[test]
    fn prop_odd_cycle_uses_three_colours(k in 1usize..15) {
        let n = 2 * k + 1;
        let mut builder = ComponentBuilder::new();
        for i in 0..n {
            builder = builder.with_edge(&format!("c{i:02}"), &format!("c{:02}", (i + 1) % n));
        }
        let features = builder.build();
        prop_assert!(!features.is_bipartite());
        prop_assert!(features.chromatic_number() <= 3);
    }

    #[test]
    fn prop_predicates_idempotent(edges in arb_edges(12)) {
        let features = features_from(&edges, &["A", "B"]);
        let first = features.shape_flags();
        prop_assert_eq!(features.shape_flags(), first);
        prop_assert_eq!(features_from(&edges, &["A", "B"]).shape_flags(), first);
        prop_assert_eq!(features.diameter(), features.diameter());
        prop_assert_eq!(features.chromatic_number(), features.chromatic_number());
    }

    #[test]
    fn prop_canonical_form_deterministic_and_smaller(
        edges in arb_edges(12),
        undirected in any::<bool>(),
    ) {
        let kind = if undirected { TraversalKind::Undirected } else { TraversalKind::Directed };
        let features = features_from(&edges, &["A", "B", "C"]);
        let builder = CanonicalFormBuilder::new(kind);
        let form = builder.build(&features);

        prop_assert_eq!(form.shape_key(), builder.build(&features).shape_key());
        prop_assert!(form.vertex_count() <= features.vertex_count());
        prop_assert!(form.edge_count() <= features.edge_count());
        prop_assert_eq!(form.vertex_count() + form.collapsed_count(), features.vertex_count());
    }

    #[test]
    fn prop_partition_into_connected_parts(edges in arb_edges(16)) {
        let whole = features_from(&edges, &["A"]);
        let parts = whole.create_subgraph_features(&whole.connected_sets());
        let total: usize = parts.iter().map(ComponentFeatures::vertex_count).sum();
        prop_assert_eq!(total, whole.vertex_count());
        assert_valid_partition(&parts);
    }

    #[test]
    fn prop_config_in_range_validates(
        max in 2usize..=1_000_000,
        limit in prop::option::of(1usize..=10_000_000),
        top_k in 1usize..=1_000,
    ) {
        let config = AnalysisConfig::preset(Preset::Balanced)
            .max_component_size(max)
            .measure_limit(limit)
            .top_k(top_k);
        prop_assert!(config.validate().is_ok());

        let yaml = config.to_yaml().unwrap();
        prop_assert_eq!(AnalysisConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
