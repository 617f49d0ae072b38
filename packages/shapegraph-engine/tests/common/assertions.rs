//! Custom assertions for shape classification

use shapegraph_engine::features::component_features::{ComponentFeatures, ShapeFamily};

pub fn assert_family(features: &ComponentFeatures, expected: ShapeFamily) {
    assert_eq!(
        features.shape_family(),
        expected,
        "Expected {expected}, got {}. Flags: {:?}",
        features.shape_family(),
        features.shape_flags()
    );
}

/// Every part connected, sizes ascending, parts disjoint
pub fn assert_valid_partition(parts: &[ComponentFeatures]) {
    let sizes: Vec<usize> = parts.iter().map(ComponentFeatures::vertex_count).collect();
    assert!(
        sizes.windows(2).all(|pair| pair[0] <= pair[1]),
        "Expected ascending sizes, got {sizes:?}"
    );
    for part in parts {
        assert!(part.is_connected(), "Part {:?} is not connected", part.vertices().collect::<Vec<_>>());
    }
    let mut seen = std::collections::HashSet::new();
    for vertex in parts.iter().flat_map(|part| part.vertices()) {
        assert!(seen.insert(vertex.to_string()), "Vertex {vertex} appears twice");
    }
}
