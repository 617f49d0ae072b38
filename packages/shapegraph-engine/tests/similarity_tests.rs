//! Similarity grouping and canonical forms across components

mod common;

use common::*;
use pretty_assertions::assert_eq;
use shapegraph_engine::features::canonical_form::{CanonicalFormBuilder, TraversalKind};
use shapegraph_engine::features::component_features::ComponentFeatures;
use shapegraph_engine::features::similarity::{SimilarityGrouper, SkipReason};
use shapegraph_engine::shared::models::{ClassLabel, EdgeSignature};

fn person_org() -> EdgeSignature {
    EdgeSignature::new(ClassLabel::known("Person"), ClassLabel::known("Org"))
}

#[test]
fn test_counts_differ_but_keys_match() {
    let c1 = ComponentBuilder::new()
        .with_edge("a", "b")
        .with_class("a", "Person")
        .with_class("b", "Org")
        .build();
    let c2 = ComponentBuilder::new()
        .with_edges(&[("c", "d"), ("e", "f")])
        .with_class("c", "Person")
        .with_class("d", "Org")
        .with_class("e", "Person")
        .with_class("f", "Org")
        .build();

    let outcome = SimilarityGrouper::default().group(&[c1, c2]);
    assert_eq!(outcome.bags.len(), 1);
    assert_eq!(outcome.bags[0].member_indices(), vec![0, 1]);
    assert_eq!(outcome.bags[0].deltas().get(&person_org()), Some(&1));
}

#[test]
fn test_first_fit_is_order_dependent() {
    let small = || star_features(2, "Leaf");
    let large = || star_features(5, "Leaf");
    let other = || star_features(3, "Other");

    let forward = SimilarityGrouper::default().group(&[small(), large(), other()]);
    assert_eq!(forward.bags.len(), 2);
    assert_eq!(forward.bags[0].member_indices(), vec![0, 1]);

    let backward = SimilarityGrouper::default().group(&[other(), large(), small()]);
    assert_eq!(backward.bags[0].founder(), 0);
    assert_eq!(backward.bags[1].member_indices(), vec![1, 2]);
}

#[test]
fn test_oversized_components_are_skipped() {
    let components = vec![star_features(3, "Leaf"), star_features(300, "Leaf")];
    let outcome = SimilarityGrouper::default().group(&components);
    assert_eq!(outcome.bags.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(
        outcome.skipped[0].reason,
        SkipReason::TooLarge {
            vertices: 301,
            limit: 200
        }
    );
}

#[test]
fn test_star_with_same_class_leaves_keeps_one_leaf_edge() {
    let star = star_features(3, "Person");
    for kind in [TraversalKind::Directed, TraversalKind::Undirected] {
        let form = CanonicalFormBuilder::new(kind).build(&star);
        assert_eq!(form.edge_count(), 1, "{kind:?}");
        assert_eq!(form.vertex_count(), 2, "{kind:?}");
    }
}

#[test]
fn test_stars_of_any_size_share_a_shape_key() {
    let builder = CanonicalFormBuilder::default();
    let key = builder.build(&star_features(2, "Person")).shape_key();
    for n in [3, 10, 50] {
        assert_eq!(builder.build(&star_features(n, "Person")).shape_key(), key);
    }
}

/// `n` leaves of one class pointing at `hub`
fn inbound_star(n: usize, prefix: &str) -> ComponentFeatures {
    let mut builder = ComponentBuilder::new().with_class("hub", "Org");
    for i in 0..n {
        let leaf = format!("{prefix}{i:02}");
        builder = builder.with_edge(&leaf, "hub").with_class(&leaf, "Person");
    }
    builder.build()
}

#[test]
fn test_inbound_stars_of_any_size_share_a_shape_key() {
    // leaves sorted before and after the hub
    for prefix in ["a", "p"] {
        for kind in [TraversalKind::Directed, TraversalKind::Undirected] {
            let builder = CanonicalFormBuilder::new(kind);
            let small = builder.build(&inbound_star(3, prefix));
            let large = builder.build(&inbound_star(50, prefix));
            assert_eq!(small.shape_key(), large.shape_key(), "{prefix} {kind:?}");
            assert_eq!(large.vertex_count(), 2, "{prefix} {kind:?}");
            assert_eq!(large.collapsed_count(), 49, "{prefix} {kind:?}");
        }
    }
}

#[test]
fn test_rendering_for_bag() {
    let components = vec![star_features(2, "Person"), star_features(4, "Person")];
    let grouper = SimilarityGrouper::default().with_traversal(TraversalKind::Undirected);
    let outcome = grouper.group(&components);
    let rendering = grouper.render(&outcome.bags[0], &components);

    assert_eq!(rendering.member_documents.len(), 2);
    assert_eq!(rendering.member_documents[1].vertices.len(), 5);
    assert_eq!(rendering.signature_form.edge_count(), 1);
    assert_eq!(rendering.founder_form.edge_count(), 1);
    assert!(rendering.founder_form.to_dot().contains("Person"));
}
