// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Graph
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mutable weighted graph.
//!
//! The graph owns its nodes and edges in index-stable arenas (ordered
//! `Vec`s — insertion order fixes each node's `index`). Every
//! structural mutation reindexes the node sequence, rebuilds the
//! adjacency matrix from the full edge list and drops the cached
//! shortest-path tree; queries recompute lazily (see
//! [`crate::shortest_path`]).
//!
//! Adjacency matrix contract: `A[i][j]` holds the weight of the edge
//! from node `i` to node `j`, mirrored into `A[j][i]` for undirected
//! edges, zero where no edge exists.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use lattice_math::Matrix;
use lattice_types::config::NetworkConfig;
use lattice_types::error::{LatticeError, LatticeResult};
use num_complex::Complex64;

use crate::edge::{Edge, EdgeId};
use crate::node::{Node, NodeId};
use crate::shortest_path::ShortestPathTree;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque graph identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Matrix,
    pub(crate) path_cache: Option<ShortestPathTree>,
}

// ───────────────────────────── construction ──────────────────────────

impl Graph {
    pub fn new() -> Self {
        Graph {
            id: GraphId::fresh(),
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Matrix::new(0),
            path_cache: None,
        }
    }

    /// Complete graph on `n ≥ 2` nodes: every unordered pair joined by
    /// an undirected unit-weight edge.
    pub fn complete(n: usize) -> LatticeResult<Graph> {
        if n < 2 {
            return Err(LatticeError::InvalidArgument(format!(
                "a complete graph needs at least 2 nodes, got {n}"
            )));
        }
        let mut graph = Graph::new();
        let ids: Vec<NodeId> = (0..n).map(|i| graph.add_node(Node::new(i.to_string()))).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                graph.add_edge(Edge::undirected(ids[i], ids[j]))?;
            }
        }
        Ok(graph)
    }

    /// Ring graph on `n ≥ 2` nodes: node `i` joined to node
    /// `(i+1) mod n` by an undirected unit-weight edge.
    pub fn ring(n: usize) -> LatticeResult<Graph> {
        if n < 2 {
            return Err(LatticeError::InvalidArgument(format!(
                "a ring graph needs at least 2 nodes, got {n}"
            )));
        }
        let mut graph = Graph::new();
        let ids: Vec<NodeId> = (0..n).map(|i| graph.add_node(Node::new(i.to_string()))).collect();
        for i in 0..n {
            graph.add_edge(Edge::undirected(ids[i], ids[(i + 1) % n]))?;
        }
        Ok(graph)
    }

    /// Instantiate a graph from a deserialized network description.
    /// Edge endpoints reference nodes by label; an unknown label fails
    /// with `InvalidArgument`.
    pub fn from_config(config: &NetworkConfig) -> LatticeResult<Graph> {
        let mut graph = Graph::new();
        for spec in &config.nodes {
            graph.add_node(Node::new(spec.label.clone()));
        }
        for spec in &config.edges {
            let source = graph.node_by_label(&spec.source).map(Node::id).ok_or_else(|| {
                LatticeError::InvalidArgument(format!("unknown edge source label '{}'", spec.source))
            })?;
            let target = graph.node_by_label(&spec.target).map(Node::id).ok_or_else(|| {
                LatticeError::InvalidArgument(format!("unknown edge target label '{}'", spec.target))
            })?;
            graph.add_edge(Edge::new(source, target, spec.weight, spec.directed))?;
        }
        Ok(graph)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

// ───────────────────────────── accessors ─────────────────────────────

impl Graph {
    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Position of `id` in the node sequence.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    pub fn adjacency(&self) -> &Matrix {
        &self.adjacency
    }
}

// ───────────────────────────── mutation ──────────────────────────────

impl Graph {
    /// Add a node. Deduplicated by identity: re-adding a node already
    /// in the graph changes nothing. Returns the node's id.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id();
        if self.index_of(id).is_some() {
            return id;
        }
        self.nodes.push(node);
        self.reindex();
        self.rebuild_adjacency();
        self.path_cache = None;
        id
    }

    /// Add an edge. Deduplicated by structural equality (endpoints,
    /// weight, directedness). Both endpoints must already be graph
    /// nodes. Updates both endpoints' neighbor sets and rebuilds the
    /// adjacency matrix over the full edge list.
    pub fn add_edge(&mut self, edge: Edge) -> LatticeResult<EdgeId> {
        let src = self.index_of(edge.source).ok_or_else(|| {
            LatticeError::InvalidArgument("edge source is not a node of this graph".to_string())
        })?;
        let dst = self.index_of(edge.target).ok_or_else(|| {
            LatticeError::InvalidArgument("edge target is not a node of this graph".to_string())
        })?;
        if let Some(existing) = self.edges.iter().find(|e| e.structurally_eq(&edge)) {
            return Ok(existing.id());
        }

        let (source, target) = (edge.source, edge.target);
        self.nodes[src].add_neighbor(target);
        self.nodes[dst].add_neighbor(source);

        let id = edge.id();
        self.edges.push(edge);
        self.rebuild_adjacency();
        self.path_cache = None;
        Ok(id)
    }

    /// Convenience: add an edge between two existing nodes.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
        directed: bool,
    ) -> LatticeResult<EdgeId> {
        self.add_edge(Edge::new(source, target, weight, directed))
    }

    /// Remove a node: incident edges go first, then the node itself,
    /// then the sequence reindexes and the adjacency matrix rebuilds.
    /// The node also disappears from every remaining neighbor set.
    pub fn remove_node(&mut self, id: NodeId) -> LatticeResult<()> {
        let pos = self.index_of(id).ok_or_else(|| {
            LatticeError::InvalidArgument("remove_node: not a node of this graph".to_string())
        })?;
        self.edges.retain(|e| !e.touches(id));
        self.nodes.remove(pos);
        for node in &mut self.nodes {
            node.remove_neighbor(id);
        }
        self.reindex();
        self.rebuild_adjacency();
        self.path_cache = None;
        Ok(())
    }

    /// Remove a single edge and the neighbor back-references it
    /// justified. A parallel edge between the same endpoints keeps
    /// the neighbor relation alive.
    pub fn remove_edge(&mut self, id: EdgeId) -> LatticeResult<()> {
        let pos = self.edges.iter().position(|e| e.id() == id).ok_or_else(|| {
            LatticeError::InvalidArgument("remove_edge: not an edge of this graph".to_string())
        })?;
        let edge = self.edges.remove(pos);

        let still_connected = self
            .edges
            .iter()
            .any(|e| e.connects(edge.source, edge.target));
        if !still_connected {
            if let Some(i) = self.index_of(edge.source) {
                self.nodes[i].remove_neighbor(edge.target);
            }
            if let Some(i) = self.index_of(edge.target) {
                self.nodes[i].remove_neighbor(edge.source);
            }
        }
        self.rebuild_adjacency();
        self.path_cache = None;
        Ok(())
    }

    fn reindex(&mut self) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.set_index(i);
        }
    }

    /// Derive the adjacency matrix from the full edge list.
    fn rebuild_adjacency(&mut self) {
        let n = self.nodes.len();
        let mut adj = Matrix::new(n);
        for edge in &self.edges {
            let (Some(i), Some(j)) = (self.index_of(edge.source), self.index_of(edge.target))
            else {
                continue; // dangling endpoints cannot occur post-validation
            };
            adj.set(i, j, Complex64::new(edge.weight, 0.0));
            if !edge.directed {
                adj.set(j, i, Complex64::new(edge.weight, 0.0));
            }
        }
        self.adjacency = adj;
    }
}

// ─────────────────────────── derived views ───────────────────────────

impl Graph {
    /// Map from degree to the number of nodes with that degree.
    pub fn degree_distribution(&self) -> BTreeMap<usize, usize> {
        let mut dist = BTreeMap::new();
        for node in &self.nodes {
            *dist.entry(node.degree()).or_insert(0) += 1;
        }
        dist
    }

    /// Diagonal matrix of node degrees, in node-sequence order.
    pub fn degree_matrix(&self) -> Matrix {
        let n = self.nodes.len();
        let mut m = Matrix::new(n);
        for (i, node) in self.nodes.iter().enumerate() {
            m.set(i, i, Complex64::new(node.degree() as f64, 0.0));
        }
        m
    }

    /// Edge density: realized arcs over the n(n-1) possible ordered
    /// pairs. An undirected edge realizes two arcs, a directed edge
    /// one. Simple graphs land in [0, 1]; parallel edges (e.g. the
    /// two-node ring, which keeps both of its n edges) push past it.
    pub fn density(&self) -> f64 {
        let n = self.nodes.len();
        if n < 2 {
            return 0.0;
        }
        let arcs: usize = self
            .edges
            .iter()
            .map(|e| if e.directed { 1 } else { 2 })
            .sum();
        arcs as f64 / (n * (n - 1)) as f64
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════
