// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Property-Based Tests (proptest) for lattice-graph
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for lattice-graph using proptest.
//!
//! Covers: heap ordering under random operation sequences, node
//! removal cascades, density bounds, and shortest-path sanity on
//! random ring graphs.

use lattice_graph::{Graph, IndexedMinHeap, Node, NodeId};
use proptest::prelude::*;

/// A random operation against the heap.
#[derive(Debug, Clone)]
enum HeapOp {
    Insert(f64),
    DecreaseKey { slot: usize, by: f64 },
    ExtractMin,
}

fn heap_ops() -> impl Strategy<Value = Vec<HeapOp>> {
    prop::collection::vec(
        prop_oneof![
            (0.0..100.0f64).prop_map(HeapOp::Insert),
            ((0usize..16), (0.1..50.0f64))
                .prop_map(|(slot, by)| HeapOp::DecreaseKey { slot, by }),
            Just(HeapOp::ExtractMin),
        ],
        1..60,
    )
}

proptest! {
    /// After any sequence of insert / decrease-key / extract-min, every
    /// extraction comes out in non-decreasing priority order.
    #[test]
    fn heap_extracts_sorted_after_random_ops(ops in heap_ops()) {
        let mut heap = IndexedMinHeap::new();
        let mut queued: Vec<NodeId> = Vec::new();

        for op in ops {
            match op {
                HeapOp::Insert(priority) => {
                    let id = Node::new("n").id();
                    heap.insert(id, priority).unwrap();
                    queued.push(id);
                }
                HeapOp::DecreaseKey { slot, by } => {
                    if queued.is_empty() {
                        continue;
                    }
                    let id = queued[slot % queued.len()];
                    if let Some(current) = heap.priority_of(id) {
                        heap.decrease_key(id, (current - by).max(0.0)).unwrap();
                    }
                }
                HeapOp::ExtractMin => {
                    heap.extract_min();
                }
            }
        }

        let mut drained = Vec::new();
        while let Some((_, priority)) = heap.extract_min() {
            drained.push(priority);
        }
        for pair in drained.windows(2) {
            prop_assert!(pair[0] <= pair[1],
                "extraction order violated: {} then {}", pair[0], pair[1]);
        }
        prop_assert!(heap.is_empty());
    }

    /// Removing any node from a complete graph removes exactly its
    /// incident edges and scrubs it from every neighbor set.
    #[test]
    fn remove_node_cascade(n in 2usize..=7, victim in 0usize..7) {
        let mut g = Graph::complete(n).unwrap();
        let victim_id = g.nodes()[victim % n].id();
        g.remove_node(victim_id).unwrap();

        prop_assert_eq!(g.node_count(), n - 1);
        prop_assert_eq!(g.edge_count(), (n - 1) * (n - 2) / 2);
        for node in g.nodes() {
            prop_assert!(!node.neighbors().contains(&victim_id));
            prop_assert_eq!(node.degree(), n.saturating_sub(2));
        }
        prop_assert_eq!(g.adjacency().shape(), (n - 1, n - 1));
    }

    /// Density always lands in [0, 1] for simple undirected graphs,
    /// and the complete graph saturates it. Rings start at n = 3:
    /// the two-node ring is a multigraph (both of its 2 edges join
    /// the same pair) and its density is 2, exercised in the graph
    /// unit tests.
    #[test]
    fn density_bounds(n in 3usize..=8) {
        let ring = Graph::ring(n).unwrap();
        let d = ring.density();
        prop_assert!((0.0..=1.0).contains(&d), "ring density = {d}");

        let complete = Graph::complete(n).unwrap();
        prop_assert!((complete.density() - 1.0).abs() < 1e-12);
    }

    /// On a unit-weight ring, the shortest path length between any two
    /// nodes is the circular distance.
    #[test]
    fn ring_shortest_paths_are_circular_distance(
        n in 3usize..=9,
        from in 0usize..9,
        to in 0usize..9,
    ) {
        let mut g = Graph::ring(n).unwrap();
        let ids: Vec<NodeId> = g.nodes().iter().map(|node| node.id()).collect();
        let a = from % n;
        let b = to % n;

        let length = g.shortest_path_length(ids[a], ids[b]).unwrap();
        let around = (a as i64 - b as i64).unsigned_abs() as usize;
        let expected = around.min(n - around) as f64;
        prop_assert!((length - expected).abs() < 1e-12,
            "ring({}) {}→{}: got {}, expected {}", n, a, b, length, expected);
    }
}
