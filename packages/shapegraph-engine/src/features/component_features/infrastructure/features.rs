//! Component feature engine
//!
//! Wraps one component snapshot and answers every structural question the
//! classifier asks: degree statistics, connectivity decompositions,
//! diameters and the shape predicates.
//!
//! # Memoization
//!
//! A component never changes after construction, so each predicate (and
//! the two diameters it leans on) is computed at most once and frozen in a
//! `OnceCell`. The cells are the thread-safe flavour, which keeps
//! `ComponentFeatures` `Send + Sync` for parallel callers.
//!
//! # Known approximations
//!
//! - `is_path_graph` is defined by undirected diameter + 1 == vertex count.
//!   It is evaluated without any shortest-path search (see its docs), so
//!   shape flags stay linear and never bypass a measurement cap.
//! - `is_caterpillar` / `is_lobster` prune a single level of depth-first
//!   leaves instead of every tree leaf.
//! - `chromatic_number` is a greedy upper bound.
//! - `check_color_isomorphism` never reports a match (see its docs).

use once_cell::sync::OnceCell;
use petgraph::graph::NodeIndex;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::petgraph_oracles::PetgraphOracles;
use super::pruning::prune_leaves;
use crate::features::class_catalog::ClassCatalog;
use crate::features::component_features::domain::{
    degree, Component, ComponentDocument, DegreeKind, DegreeStats, DocumentEdge, DocumentVertex,
    GraphView, Measurement, ShapeFamily, ShapeFlags, VertexDegree,
};
use crate::features::component_features::ports::GraphOracles;
use crate::shared::models::{ClassLabel, EdgeSignature, SignatureHistogram, VertexId};

#[derive(Default)]
struct PredicateCache {
    diameter: OnceCell<usize>,
    diameter_undirected: OnceCell<usize>,
    tree: OnceCell<bool>,
    path: OnceCell<bool>,
    directed_path: OnceCell<bool>,
    outbound_star: OnceCell<bool>,
    inbound_star: OnceCell<bool>,
    mixed_star: OnceCell<bool>,
    caterpillar: OnceCell<bool>,
    lobster: OnceCell<bool>,
    bipartite: OnceCell<bool>,
    complete: OnceCell<bool>,
    signatures: OnceCell<SignatureHistogram>,
}

/// Structural features of one component
pub struct ComponentFeatures {
    component: Component,
    catalog: Arc<ClassCatalog>,
    oracles: Arc<dyn GraphOracles>,
    cache: PredicateCache,
}

impl fmt::Debug for ComponentFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentFeatures")
            .field("vertices", &self.component.vertex_count())
            .field("edges", &self.component.edge_count())
            .finish()
    }
}

impl ComponentFeatures {
    /// Features backed by the default petgraph oracles
    pub fn new(component: Component, catalog: Arc<ClassCatalog>) -> Self {
        Self::with_oracles(component, catalog, Arc::new(PetgraphOracles::new()))
    }

    pub fn with_oracles(
        component: Component,
        catalog: Arc<ClassCatalog>,
        oracles: Arc<dyn GraphOracles>,
    ) -> Self {
        Self {
            component,
            catalog,
            oracles,
            cache: PredicateCache::default(),
        }
    }

    /// Features of another component sharing this one's catalog and backend
    fn derive(&self, component: Component) -> Self {
        Self::with_oracles(component, Arc::clone(&self.catalog), Arc::clone(&self.oracles))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn catalog(&self) -> &Arc<ClassCatalog> {
        &self.catalog
    }

    pub fn vertex_count(&self) -> usize {
        self.component.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.component.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.component.vertices()
    }

    pub fn class_of(&self, node: NodeIndex) -> ClassLabel {
        self.catalog.class_of(self.component.vertex(node))
    }

    pub fn class_of_vertex(&self, vertex: &str) -> ClassLabel {
        self.catalog.class_of(vertex)
    }

    fn names(&self, sets: Vec<Vec<NodeIndex>>) -> Vec<Vec<VertexId>> {
        sets.into_iter()
            .map(|set| {
                set.into_iter()
                    .map(|node| self.component.vertex(node).to_string())
                    .collect()
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Connectivity
    // ═══════════════════════════════════════════════════════════════════

    /// Connected in the undirected projection (vacuously true when empty)
    pub fn is_connected(&self) -> bool {
        self.oracles.connected_sets(&self.component).len() <= 1
    }

    pub fn connected_sets(&self) -> Vec<Vec<VertexId>> {
        self.names(self.oracles.connected_sets(&self.component))
    }

    pub fn strongly_connected_sets(&self) -> Vec<Vec<VertexId>> {
        self.names(self.oracles.strongly_connected_sets(&self.component))
    }

    pub fn biconnected_sets(&self) -> Vec<Vec<VertexId>> {
        self.names(self.oracles.biconnected_sets(&self.component))
    }

    /// One `ComponentFeatures` per part of `partition`, each over the
    /// subgraph induced by that part, sorted ascending by vertex count.
    ///
    /// `self` is usually the full dataset graph and `partition` one of its
    /// connectivity decompositions; parts must be disjoint.
    pub fn create_subgraph_features(&self, partition: &[Vec<VertexId>]) -> Vec<ComponentFeatures> {
        let mut parts: Vec<ComponentFeatures> = self
            .component
            .induced_parts(partition)
            .into_iter()
            .map(|component| self.derive(component))
            .collect();
        parts.sort_by_key(|features| features.vertex_count());
        debug!(parts = parts.len(), "built subgraph features");
        parts
    }

    // ═══════════════════════════════════════════════════════════════════
    // Distances
    // ═══════════════════════════════════════════════════════════════════

    fn longest_shortest_path(&self, view: GraphView) -> usize {
        self.component
            .node_indices()
            .map(|source| {
                self.oracles
                    .hop_distances(&self.component, view, source)
                    .into_iter()
                    .flatten()
                    .max()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
    }

    /// Longest shortest directed path over all reachable ordered pairs.
    /// 0 for a single vertex.
    pub fn diameter(&self) -> usize {
        *self
            .cache
            .diameter
            .get_or_init(|| self.longest_shortest_path(GraphView::Directed))
    }

    /// Longest shortest path in the undirected projection
    pub fn diameter_undirected(&self) -> usize {
        *self
            .cache
            .diameter_undirected
            .get_or_init(|| self.longest_shortest_path(GraphView::Undirected))
    }

    /// Vertices of a longest shortest path in the undirected projection.
    ///
    /// Pairs are tried in vertex order and the first longest path wins.
    /// `None` for an empty or disconnected component.
    pub fn diameter_path(&self) -> Option<Vec<VertexId>> {
        if self.component.is_empty() || !self.is_connected() {
            return None;
        }

        let first = self.component.node_indices().next()?;
        let mut best = (first, first, 0usize);
        for source in self.component.node_indices() {
            let distances = self
                .oracles
                .hop_distances(&self.component, GraphView::Undirected, source);
            for target in self.component.node_indices() {
                if let Some(distance) = distances[target.index()] {
                    if distance > best.2 {
                        best = (source, target, distance);
                    }
                }
            }
        }

        let (source, target, _) = best;
        let path = if source == target {
            vec![source]
        } else {
            self.oracles
                .shortest_path(&self.component, GraphView::Undirected, source, target)?
        };
        Some(
            path.into_iter()
                .map(|node| self.component.vertex(node).to_string())
                .collect(),
        )
    }

    // ═══════════════════════════════════════════════════════════════════
    // Degrees
    // ═══════════════════════════════════════════════════════════════════

    fn degree_of(&self, kind: DegreeKind, node: NodeIndex) -> usize {
        match kind {
            DegreeKind::In => self.component.in_degree(node),
            DegreeKind::Out => self.component.out_degree(node),
            DegreeKind::Total => self.component.degree(node),
        }
    }

    /// Degree of every vertex, in vertex order
    pub fn degree_list(&self, kind: DegreeKind) -> Vec<VertexDegree> {
        self.component
            .node_indices()
            .map(|node| VertexDegree {
                vertex: self.component.vertex(node).to_string(),
                degree: self.degree_of(kind, node),
            })
            .collect()
    }

    pub fn in_degrees(&self) -> Vec<VertexDegree> {
        self.degree_list(DegreeKind::In)
    }

    pub fn out_degrees(&self) -> Vec<VertexDegree> {
        self.degree_list(DegreeKind::Out)
    }

    pub fn degree_stats(&self, kind: DegreeKind) -> Option<DegreeStats> {
        let degrees: Vec<usize> = self
            .component
            .node_indices()
            .map(|node| self.degree_of(kind, node))
            .collect();
        DegreeStats::from_degrees(&degrees)
    }

    /// The `k` highest degrees, descending; ties in vertex order
    pub fn top_degrees(&self, kind: DegreeKind, k: usize) -> Vec<VertexDegree> {
        degree::top_k(self.degree_list(kind), k)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Colouring
    // ═══════════════════════════════════════════════════════════════════

    /// Greedy colour count over the undirected projection.
    ///
    /// An upper bound on the chromatic number, not the exact value.
    pub fn chromatic_number(&self) -> usize {
        self.oracles.color_count(&self.component)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Shape predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Connected and acyclic in the undirected projection
    pub fn is_tree(&self) -> bool {
        *self.cache.tree.get_or_init(|| {
            !self.component.is_empty()
                && self.is_connected()
                && !self.oracles.has_undirected_cycle(&self.component)
        })
    }

    /// Undirected diameter + 1 equals the vertex count.
    ///
    /// A connected simple graph reaches that diameter only when one shortest
    /// path runs through every vertex and no chord shortens it, so this is
    /// checked as: connected, `n - 1` simple edges, no simple degree above 2.
    /// A disconnected graph never qualifies.
    pub fn is_path_graph(&self) -> bool {
        *self.cache.path.get_or_init(|| {
            let n = self.vertex_count();
            n > 0
                && self.component.undirected().edge_count() == n - 1
                && self
                    .component
                    .node_indices()
                    .all(|node| self.component.simple_degree(node) <= 2)
                && self.is_connected()
        })
    }

    /// A path graph in which no vertex has more than one incoming edge
    pub fn is_directed_path_graph(&self) -> bool {
        *self.cache.directed_path.get_or_init(|| {
            self.is_path_graph()
                && self
                    .component
                    .node_indices()
                    .all(|node| self.component.in_degree(node) <= 1)
        })
    }

    /// Some vertex is the source of every edge
    pub fn is_outbound_star_graph(&self) -> bool {
        *self.cache.outbound_star.get_or_init(|| {
            let edges = self.edge_count();
            self.component
                .node_indices()
                .any(|node| self.component.out_degree(node) == edges)
        })
    }

    /// Some vertex is the target of every edge
    pub fn is_inbound_star_graph(&self) -> bool {
        *self.cache.inbound_star.get_or_init(|| {
            let edges = self.edge_count();
            self.component
                .node_indices()
                .any(|node| self.component.in_degree(node) == edges)
        })
    }

    /// Some vertex touches every edge, whatever the direction
    pub fn is_mixed_directed_star_graph(&self) -> bool {
        *self.cache.mixed_star.get_or_init(|| {
            let edges = self.edge_count();
            self.component
                .node_indices()
                .any(|node| self.component.degree(node) == edges)
        })
    }

    pub fn is_complete_graph(&self) -> bool {
        *self.cache.complete.get_or_init(|| {
            let n = self.vertex_count();
            self.component.undirected().edge_count() == n * n.saturating_sub(1) / 2
        })
    }

    pub fn is_bipartite(&self) -> bool {
        *self
            .cache
            .bipartite
            .get_or_init(|| self.oracles.is_two_colorable(&self.component))
    }

    /// Tree, not a path, and a path once one level of depth-first leaves
    /// is pruned.
    pub fn is_caterpillar(&self) -> bool {
        *self.cache.caterpillar.get_or_init(|| {
            if !self.is_tree() || self.is_path_graph() {
                return false;
            }
            self.pruned().is_path_graph()
        })
    }

    /// Tree, not a path, and a caterpillar once one level of depth-first
    /// leaves is pruned.
    pub fn is_lobster(&self) -> bool {
        *self.cache.lobster.get_or_init(|| {
            if !self.is_tree() || self.is_path_graph() {
                return false;
            }
            self.pruned().is_caterpillar()
        })
    }

    /// Fresh features over this component minus its depth-first leaves
    fn pruned(&self) -> ComponentFeatures {
        self.derive(prune_leaves(&self.component))
    }

    /// All predicates at once
    pub fn shape_flags(&self) -> ShapeFlags {
        ShapeFlags {
            singleton: self.vertex_count() == 1,
            tree: self.is_tree(),
            path: self.is_path_graph(),
            directed_path: self.is_directed_path_graph(),
            outbound_star: self.is_outbound_star_graph(),
            inbound_star: self.is_inbound_star_graph(),
            mixed_star: self.is_mixed_directed_star_graph(),
            caterpillar: self.is_caterpillar(),
            lobster: self.is_lobster(),
            bipartite: self.is_bipartite(),
            complete: self.is_complete_graph(),
        }
    }

    pub fn shape_family(&self) -> ShapeFamily {
        self.shape_flags().family()
    }

    /// Run `measure` unless the component has more than `limit` vertices
    pub fn measure<T>(&self, limit: Option<usize>, measure: impl FnOnce(&Self) -> T) -> Measurement<T> {
        match limit {
            Some(limit) if self.vertex_count() > limit => Measurement::TooLarge {
                vertices: self.vertex_count(),
                limit,
            },
            _ => Measurement::Computed {
                value: measure(self),
            },
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Classes
    // ═══════════════════════════════════════════════════════════════════

    /// Histogram of (source class, target class) over the directed edges
    pub fn signature_histogram(&self) -> &SignatureHistogram {
        self.cache.signatures.get_or_init(|| {
            SignatureHistogram::from_signatures(self.component.edges().map(|(source, target)| {
                EdgeSignature::new(self.class_of(source), self.class_of(target))
            }))
        })
    }

    fn neighborhood_classes(&self, node: NodeIndex) -> Vec<ClassLabel> {
        let mut classes: Vec<ClassLabel> = self
            .component
            .undirected()
            .neighbors(node)
            .map(|next| self.class_of(next))
            .collect();
        classes.sort();
        classes
    }

    /// Heuristic class-coloured comparison with `other`.
    ///
    /// Known defect, kept as is: the per-vertex "found equivalent" flag is
    /// never set when a matching vertex is located, so any component with
    /// at least one vertex is reported as not matching. Only size-mismatched
    /// inputs (false) and two empty components (true) are answered
    /// meaningfully.
    pub fn check_color_isomorphism(&self, other: &ComponentFeatures) -> bool {
        if self.vertex_count() != other.vertex_count() || self.edge_count() != other.edge_count() {
            return false;
        }

        for node in self.component.node_indices() {
            let found_equivalent = false;
            let class = self.class_of(node);
            let neighborhood = self.neighborhood_classes(node);
            for candidate in other.component.node_indices() {
                if other.class_of(candidate) == class
                    && other.neighborhood_classes(candidate) == neighborhood
                {
                    break;
                }
            }
            if !found_equivalent {
                return false;
            }
        }
        true
    }

    /// Vertex and edge lists annotated with class and label
    pub fn to_document(&self) -> ComponentDocument {
        let vertices = self
            .component
            .vertices()
            .map(|vertex| DocumentVertex {
                id: vertex.to_string(),
                class: self.catalog.class_of(vertex),
                label: self.catalog.label_of(vertex).map(str::to_string),
            })
            .collect();
        let edges = self
            .component
            .edges()
            .map(|(source, target)| DocumentEdge {
                source: self.component.vertex(source).to_string(),
                target: self.component.vertex(target).to_string(),
            })
            .collect();
        ComponentDocument { vertices, edges }
    }
}
