//! petgraph-backed graph oracles
//!
//! Default backend for `ComponentFeatures`. Library algorithms are used
//! where petgraph has them (Kosaraju SCC, Dijkstra, union-find, cycle and
//! bipartite tests); breadth-first path search, greedy colouring and
//! biconnected blocks are written here because their iteration order must
//! follow the component's fixed vertex order.
//!
//! Every algorithm here is iterative. Long chains (`rdf:rest` lists) are
//! common and must not grow the call stack.

use petgraph::algo::{dijkstra, is_bipartite_undirected, is_cyclic_undirected, kosaraju_scc};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::features::component_features::domain::{Component, GraphView};
use crate::features::component_features::ports::{
    ChromaticHeuristic, ConnectivityOracle, CycleDetector, ShortestPathOracle,
};
use crate::shared::models::VertexId;

/// Graph oracles backed by petgraph
#[derive(Debug, Clone, Copy, Default)]
pub struct PetgraphOracles;

impl PetgraphOracles {
    pub fn new() -> Self {
        Self
    }
}

/// Sort every set, then order sets by their first vertex
fn normalized(mut sets: Vec<Vec<NodeIndex>>) -> Vec<Vec<NodeIndex>> {
    for set in &mut sets {
        set.sort_unstable();
        set.dedup();
    }
    sets.retain(|set| !set.is_empty());
    sets.sort_by_key(|set| set[0]);
    sets
}

fn distances<Ty: EdgeType>(graph: &Graph<VertexId, (), Ty>, source: NodeIndex) -> Vec<Option<usize>> {
    let reached = dijkstra(graph, source, None, |_| 1usize);
    let mut out = vec![None; graph.node_count()];
    for (node, distance) in reached {
        out[node.index()] = Some(distance);
    }
    out
}

/// Breadth-first order over the undirected view, restarting at the next
/// unvisited vertex in vertex order.
fn breadth_first_order(component: &Component) -> Vec<NodeIndex> {
    let n = component.vertex_count();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    for root in component.node_indices() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            order.push(node);
            for next in component.sorted_neighbors(GraphView::Undirected, node) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    order
}

impl ConnectivityOracle for PetgraphOracles {
    fn connected_sets(&self, component: &Component) -> Vec<Vec<NodeIndex>> {
        let mut union_find = UnionFind::new(component.vertex_count());
        for edge in component.undirected().edge_references() {
            union_find.union(edge.source().index(), edge.target().index());
        }

        let labels = union_find.into_labeling();
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut sets: Vec<Vec<NodeIndex>> = Vec::new();
        for node in component.node_indices() {
            let root = labels[node.index()];
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(node);
        }
        sets
    }

    fn strongly_connected_sets(&self, component: &Component) -> Vec<Vec<NodeIndex>> {
        normalized(kosaraju_scc(component.directed()))
    }

    fn biconnected_sets(&self, component: &Component) -> Vec<Vec<NodeIndex>> {
        struct Frame {
            node: NodeIndex,
            parent: Option<NodeIndex>,
            neighbors: Vec<NodeIndex>,
            cursor: usize,
        }

        let n = component.vertex_count();
        let mut discovery: Vec<Option<usize>> = vec![None; n];
        let mut low = vec![0usize; n];
        let mut timer = 0usize;
        let mut blocks: Vec<Vec<NodeIndex>> = Vec::new();
        let mut edge_stack: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();

        for root in component.node_indices() {
            if discovery[root.index()].is_some() {
                continue;
            }
            discovery[root.index()] = Some(timer);
            low[root.index()] = timer;
            timer += 1;

            let neighbors = component.sorted_neighbors(GraphView::Undirected, root);
            if neighbors.is_empty() {
                blocks.push(vec![root]);
                continue;
            }
            frames.push(Frame {
                node: root,
                parent: None,
                neighbors,
                cursor: 0,
            });

            while let Some(frame) = frames.last_mut() {
                let node = frame.node;
                if frame.cursor < frame.neighbors.len() {
                    let next = frame.neighbors[frame.cursor];
                    frame.cursor += 1;
                    if Some(next) == frame.parent {
                        continue;
                    }
                    let node_discovery = discovery[node.index()].unwrap_or(0);
                    match discovery[next.index()] {
                        None => {
                            edge_stack.push((node, next));
                            discovery[next.index()] = Some(timer);
                            low[next.index()] = timer;
                            timer += 1;
                            let neighbors = component.sorted_neighbors(GraphView::Undirected, next);
                            frames.push(Frame {
                                node: next,
                                parent: Some(node),
                                neighbors,
                                cursor: 0,
                            });
                        }
                        Some(next_discovery) if next_discovery < node_discovery => {
                            // back edge
                            edge_stack.push((node, next));
                            low[node.index()] = low[node.index()].min(next_discovery);
                        }
                        Some(_) => {}
                    }
                } else {
                    frames.pop();
                    let Some(parent) = frames.last().map(|frame| frame.node) else {
                        continue;
                    };
                    low[parent.index()] = low[parent.index()].min(low[node.index()]);
                    let parent_discovery = discovery[parent.index()].unwrap_or(0);
                    if low[node.index()] >= parent_discovery {
                        let mut block = Vec::new();
                        while let Some((a, b)) = edge_stack.pop() {
                            block.push(a);
                            block.push(b);
                            if (a, b) == (parent, node) {
                                break;
                            }
                        }
                        blocks.push(block);
                    }
                }
            }
        }

        normalized(blocks)
    }
}

impl ShortestPathOracle for PetgraphOracles {
    fn hop_distances(
        &self,
        component: &Component,
        view: GraphView,
        source: NodeIndex,
    ) -> Vec<Option<usize>> {
        match view {
            GraphView::Directed => distances(component.directed(), source),
            GraphView::Undirected => distances(component.undirected(), source),
        }
    }

    fn shortest_path(
        &self,
        component: &Component,
        view: GraphView,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Option<Vec<NodeIndex>> {
        if source == target {
            return Some(vec![source]);
        }

        let n = component.vertex_count();
        let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::new();
        seen[source.index()] = true;
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            for next in component.sorted_neighbors(view, node) {
                if seen[next.index()] {
                    continue;
                }
                seen[next.index()] = true;
                parent[next.index()] = Some(node);
                if next == target {
                    let mut path = vec![target];
                    let mut cursor = node;
                    path.push(cursor);
                    while let Some(previous) = parent[cursor.index()] {
                        path.push(previous);
                        cursor = previous;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }
}

impl ChromaticHeuristic for PetgraphOracles {
    /// Greedy colouring in breadth-first order.
    ///
    /// Within one breadth-first layer no two vertices of a bipartite graph
    /// are adjacent, so this order never needs a third colour there.
    fn color_count(&self, component: &Component) -> usize {
        let mut colors: Vec<Option<usize>> = vec![None; component.vertex_count()];
        let mut used = 0;

        for node in breadth_first_order(component) {
            let taken: HashSet<usize> = component
                .undirected()
                .neighbors(node)
                .filter_map(|next| colors[next.index()])
                .collect();
            let mut color = 0;
            while taken.contains(&color) {
                color += 1;
            }
            colors[node.index()] = Some(color);
            used = used.max(color + 1);
        }
        used
    }

    fn is_two_colorable(&self, component: &Component) -> bool {
        self.connected_sets(component)
            .iter()
            .all(|set| is_bipartite_undirected(component.undirected(), set[0]))
    }
}

impl CycleDetector for PetgraphOracles {
    fn has_undirected_cycle(&self, component: &Component) -> bool {
        is_cyclic_undirected(component.undirected())
    }
}
