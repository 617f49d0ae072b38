//! Class-aware minimizing breadth-first traversal
//!
//! # Algorithm
//!
//! ```text
//! for root in vertices (fixed order), skipping visited:
//!     BFS from root:
//!         edges  = incident_edges(v)            (strategy: directed | undirected)
//!         sort edges by neighbour class name    (stable)
//!         for each edge:
//!             collapse if  neighbour has total degree 1, is unvisited
//!                      and v already keeps a leaf of that class
//!             otherwise emit edge, enqueue neighbour
//! ```
//!
//! Collapsing keeps one representative per class of the leaves around a
//! vertex, so a hub with a thousand `Person` leaves canonicalizes to a hub
//! with one.
//!
//! A directed traversal cannot reach the sources of an inbound hub, so each
//! of them would seed its own root. Leaf roots share the same per-anchor
//! record and are collapsed under the same rule.
//!
//! The output depends only on the graph, the class labels and the
//! component's vertex order.

use petgraph::graph::{EdgeIndex, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::features::canonical_form::domain::{CanonicalForm, TraversalKind};
use crate::features::component_features::{ComponentFeatures, GraphView};
use crate::shared::models::ClassLabel;

/// Builds canonical forms with a fixed traversal strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormBuilder {
    kind: TraversalKind,
}

/// Per-run traversal state
struct Traversal<'a> {
    features: &'a ComponentFeatures,
    kind: TraversalKind,
    visited: Vec<bool>,
    collapsed: Vec<bool>,
    synthetic: Vec<Option<usize>>,
    emitted: HashSet<EdgeIndex>,
    /// Classes of the single-link leaves kept next to each vertex
    kept_leaves: HashMap<NodeIndex, HashSet<ClassLabel>>,
    queue: VecDeque<NodeIndex>,
    form: CanonicalForm,
}

impl<'a> Traversal<'a> {
    fn new(features: &'a ComponentFeatures, kind: TraversalKind) -> Self {
        let n = features.vertex_count();
        Self {
            features,
            kind,
            visited: vec![false; n],
            collapsed: vec![false; n],
            synthetic: vec![None; n],
            emitted: HashSet::new(),
            kept_leaves: HashMap::new(),
            queue: VecDeque::new(),
            form: CanonicalForm::new(),
        }
    }

    /// Synthetic id of `node`, allocating one on first sight
    fn synthetic_id(&mut self, node: NodeIndex) -> usize {
        if let Some(id) = self.synthetic[node.index()] {
            return id;
        }
        let features = self.features;
        let component = features.component();
        let id = self.form.add_vertex(
            features.class_of(node),
            Some(component.vertex(node).to_string()),
        );
        self.synthetic[node.index()] = Some(id);
        id
    }

    /// Drop `node` from the form; it never seeds or joins a traversal
    fn collapse(&mut self, node: NodeIndex) {
        if !self.collapsed[node.index()] {
            self.visited[node.index()] = true;
            self.collapsed[node.index()] = true;
            self.form.record_collapsed();
        }
    }

    fn visit(&mut self, node: NodeIndex) {
        self.visited[node.index()] = true;
        self.synthetic_id(node);
        self.queue.push_back(node);
    }

    /// The only neighbour of a degree-1 vertex
    fn leaf_anchor(&self, node: NodeIndex) -> Option<NodeIndex> {
        let component = self.features.component();
        if component.degree(node) != 1 {
            return None;
        }
        component
            .sorted_neighbors(GraphView::Undirected, node)
            .first()
            .copied()
    }

    fn run(mut self) -> CanonicalForm {
        let roots: Vec<NodeIndex> = self.features.component().node_indices().collect();
        for root in roots {
            if self.visited[root.index()] {
                continue;
            }
            if let Some(anchor) = self.leaf_anchor(root) {
                let class = self.features.class_of(root);
                let kept = self.kept_leaves.entry(anchor).or_default();
                if kept.contains(&class) {
                    self.collapse(root);
                    continue;
                }
                kept.insert(class);
            }
            self.visit(root);
            while let Some(node) = self.queue.pop_front() {
                self.expand(node);
            }
        }
        self.form
    }

    fn expand(&mut self, node: NodeIndex) {
        let features = self.features;
        let component = features.component();
        let mut incident: Vec<_> = self
            .kind
            .incident_edges(component, node)
            .into_iter()
            .map(|edge| (edge, features.class_of(edge.neighbor)))
            .collect();
        incident.sort_by(|(_, a), (_, b)| a.as_str().cmp(b.as_str()));

        for (edge, class) in incident {
            let neighbor = edge.neighbor;
            if self.collapsed[neighbor.index()] {
                continue;
            }
            // one leaf per class survives at each anchor
            if component.degree(neighbor) == 1 && !self.visited[neighbor.index()] {
                let kept = self.kept_leaves.entry(node).or_default();
                if !kept.insert(class) {
                    self.collapse(neighbor);
                    continue;
                }
            }

            let from = self.synthetic_id(node);
            if !self.visited[neighbor.index()] {
                self.visit(neighbor);
            }
            if self.emitted.insert(edge.edge) {
                let to = self.synthetic_id(neighbor);
                self.form.add_edge(from, to);
            }
        }
    }
}

impl CanonicalFormBuilder {
    pub fn new(kind: TraversalKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    pub fn build(&self, features: &ComponentFeatures) -> CanonicalForm {
        Traversal::new(features, self.kind).run()
    }
}
