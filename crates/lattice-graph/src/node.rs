// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Node
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Graph node primitive.
//!
//! Nodes live in the owning [`crate::graph::Graph`]'s arena; all
//! cross-references (neighbor sets, edge endpoints) are [`NodeId`]
//! keys into that arena, never owning references, so the cyclic
//! node/edge object graph carries no ownership cycles.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque process-wide-unique node identity. Used for equality, map
/// keys and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A labelled node with its position in the owning graph's node
/// sequence and the identities of its adjacent nodes.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    /// Position within the owning graph's node sequence. Reassigned by
    /// the graph whenever the sequence changes; 0 for a standalone
    /// node.
    index: usize,
    pub label: String,
    neighbors: BTreeSet<NodeId>,
}

impl Node {
    /// Standalone node with a fresh identity and no neighbors.
    pub fn new(label: impl Into<String>) -> Self {
        Node {
            id: NodeId::fresh(),
            index: 0,
            label: label.into(),
            neighbors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn neighbors(&self) -> &BTreeSet<NodeId> {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn add_neighbor(&mut self, id: NodeId) {
        self.neighbors.insert(id);
    }

    pub(crate) fn remove_neighbor(&mut self, id: NodeId) {
        self.neighbors.remove(&id);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    /// Identity ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
