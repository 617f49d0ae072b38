//! Single-level leaf pruning
//!
//! Caterpillar and lobster detection strip one level of leaves found by a
//! single depth-first traversal. A vertex counts as a leaf when its finish
//! event directly follows its own discovery, i.e. the traversal found no
//! child below it. The traversal root is never pruned unless it is
//! isolated.

use petgraph::graph::NodeIndex;
use std::collections::HashSet;

use crate::features::component_features::domain::{Component, GraphView};

/// Vertices that are leaves of the depth-first tree rooted at the first
/// vertex of `component`.
///
/// Iterative, with neighbours visited in vertex order.
pub fn dfs_leaves(component: &Component) -> HashSet<NodeIndex> {
    let mut leaves = HashSet::new();
    let Some(root) = component.node_indices().next() else {
        return leaves;
    };

    struct Frame {
        node: NodeIndex,
        neighbors: Vec<NodeIndex>,
        cursor: usize,
        has_child: bool,
    }

    let frame = |node| Frame {
        node,
        neighbors: component.sorted_neighbors(GraphView::Undirected, node),
        cursor: 0,
        has_child: false,
    };

    let mut discovered = vec![false; component.vertex_count()];
    discovered[root.index()] = true;
    let mut stack = vec![frame(root)];

    while let Some(top) = stack.last_mut() {
        let mut child = None;
        while top.cursor < top.neighbors.len() {
            let next = top.neighbors[top.cursor];
            top.cursor += 1;
            if !discovered[next.index()] {
                child = Some(next);
                break;
            }
        }

        match child {
            Some(child) => {
                top.has_child = true;
                discovered[child.index()] = true;
                stack.push(frame(child));
            }
            None => {
                if !top.has_child {
                    leaves.insert(top.node);
                }
                stack.pop();
            }
        }
    }
    leaves
}

/// New component with the depth-first leaves (and their connecting edges)
/// removed. The input is left untouched.
pub fn prune_leaves(component: &Component) -> Component {
    component.without(&dfs_leaves(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::VertexOrder;

    #[test]
    fn test_star_rooted_at_hub() {
        let component = Component::from_edges(
            [("a", "x"), ("a", "y"), ("a", "z")],
            VertexOrder::Lexicographic,
        );
        let pruned = prune_leaves(&component);
        assert_eq!(pruned.vertices().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_root_leaf_survives() {
        // root "a" is a tree leaf but has a DFS child
        let component = Component::from_edges(
            [("a", "h"), ("h", "x"), ("h", "y")],
            VertexOrder::Lexicographic,
        );
        let pruned = prune_leaves(&component);
        assert_eq!(pruned.vertices().collect::<Vec<_>>(), vec!["a", "h"]);
        assert_eq!(pruned.edge_count(), 1);
    }

    #[test]
    fn test_long_branch_is_pruned_iteratively() {
        // 8000-vertex chain with one extra leaf hanging off its middle
        let names: Vec<String> = (0..8000).map(|i| format!("v{:05}", i)).collect();
        let mut edges: Vec<(&str, &str)> = names
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect();
        edges.push(("v04000", "w"));
        let component = Component::from_edges(edges, VertexOrder::Lexicographic);

        let leaves = dfs_leaves(&component);
        let names: HashSet<&str> = leaves.iter().map(|&node| component.vertex(node)).collect();
        assert_eq!(names, HashSet::from(["v07999", "w"]));
        assert_eq!(prune_leaves(&component).vertex_count(), 7999);
    }

    #[test]
    fn test_empty_component() {
        let component = Component::new(Vec::<String>::new(), Vec::<(String, String)>::new(), VertexOrder::Lexicographic);
        assert!(dfs_leaves(&component).is_empty());
    }
}
