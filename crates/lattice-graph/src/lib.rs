// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Lattice Graph
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mutable weighted-graph engine: arena-owned nodes and edges, an
//! incrementally maintained adjacency matrix, and Dijkstra shortest
//! paths over an indexed binary min-heap.

pub mod edge;
pub mod graph;
pub mod heap;
pub mod node;
pub mod shortest_path;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use heap::IndexedMinHeap;
pub use node::{Node, NodeId};
pub use shortest_path::ShortestPathTree;
