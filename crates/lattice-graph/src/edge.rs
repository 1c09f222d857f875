// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Edge
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Graph edge primitive.
//!
//! Directedness is a plain flag consumed uniformly by the adjacency
//! maintenance logic: an undirected edge mirrors symmetrically into
//! the adjacency matrix, a directed edge does not.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::node::NodeId;

static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque process-wide-unique edge identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u64);

impl EdgeId {
    fn fresh() -> Self {
        EdgeId(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A weighted edge between two nodes of the same graph. The endpoints
/// are arena keys, owned by the graph alongside the edge itself.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    pub directed: bool,
}

impl Edge {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new(source: NodeId, target: NodeId, weight: f64, directed: bool) -> Self {
        Edge {
            id: EdgeId::fresh(),
            source,
            target,
            weight,
            directed,
        }
    }

    /// Undirected edge with the default weight of 1.
    pub fn undirected(source: NodeId, target: NodeId) -> Self {
        Edge::new(source, target, Edge::DEFAULT_WEIGHT, false)
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Structural equality: same endpoints, weight and directedness.
    /// Used by the graph to deduplicate edges on insertion.
    pub fn structurally_eq(&self, other: &Edge) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.weight == other.weight
            && self.directed == other.directed
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Whether this edge connects the unordered pair `(a, b)`.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    /// Edges with the same endpoints order by weight, with identity
    /// order breaking weight ties so `Some(Equal)` holds exactly when
    /// `==` does; edges with different endpoints fall back to identity
    /// order directly. NaN weights make the order partial, so only
    /// `PartialOrd` is provided.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.source == other.source && self.target == other.target {
            match self.weight.partial_cmp(&other.weight)? {
                std::cmp::Ordering::Equal => Some(self.id.cmp(&other.id)),
                ord => Some(ord),
            }
        } else {
            Some(self.id.cmp(&other.id))
        }
    }
}
