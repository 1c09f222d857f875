// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Indexed Min-Heap
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Array-backed binary min-heap keyed by an `f64` priority, with a
//! side map from node identity to heap slot enabling O(log n)
//! decrease-key without a linear scan.
//!
//! Layout is the classic 0-indexed array heap: children of slot `i`
//! sit at `2i+1` and `2i+2`, the parent at `(i-1)/2`. The heap
//! invariant is `priority(parent(i)) <= priority(i)` for every
//! non-root slot.
//!
//! Insertion is implemented purely in terms of decrease-key: the new
//! entry is appended with an infinite sentinel priority, its slot is
//! recorded, and the sentinel is immediately decreased to the real
//! priority, sifting the entry up into place. Priorities must never
//! be increased through [`IndexedMinHeap::decrease_key`].

use std::collections::HashMap;

use lattice_types::error::{LatticeError, LatticeResult};

use crate::node::NodeId;

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    priority: f64,
    node: NodeId,
}

#[derive(Debug, Default)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    /// node identity → current slot in `entries`
    positions: HashMap<NodeId, usize>,
}

impl IndexedMinHeap {
    pub fn new() -> Self {
        IndexedMinHeap::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    /// Current priority of `node`, if present.
    pub fn priority_of(&self, node: NodeId) -> Option<f64> {
        self.positions.get(&node).map(|&pos| self.entries[pos].priority)
    }

    /// Append `node` with an infinite sentinel priority, then
    /// decrease-key down to `priority`. Fails if the node is already
    /// queued.
    pub fn insert(&mut self, node: NodeId, priority: f64) -> LatticeResult<()> {
        if self.contains(node) {
            return Err(LatticeError::InvalidArgument(format!(
                "node {node:?} is already queued"
            )));
        }
        self.entries.push(HeapEntry {
            priority: f64::INFINITY,
            node,
        });
        self.positions.insert(node, self.entries.len() - 1);
        self.decrease_key(node, priority)
    }

    /// Overwrite the node's priority and sift it up while its parent
    /// is greater, updating the position map on every swap.
    pub fn decrease_key(&mut self, node: NodeId, priority: f64) -> LatticeResult<()> {
        let Some(&pos) = self.positions.get(&node) else {
            return Err(LatticeError::InvalidArgument(format!(
                "decrease_key on node {node:?} which is not queued"
            )));
        };
        self.entries[pos].priority = priority;
        self.sift_up(pos);
        Ok(())
    }

    /// Remove and return the minimum entry: the root's node goes out,
    /// the last entry moves into the root slot and sifts down.
    pub fn extract_min(&mut self) -> Option<(NodeId, f64)> {
        let root = *self.entries.first()?;
        let last = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.entries[0] = last;
            self.positions.insert(last.node, 0);
            self.sift_down(0);
        }
        self.positions.remove(&root.node);
        Some((root.node, root.priority))
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].node, a);
        self.positions.insert(self.entries[b].node, b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[parent].priority <= self.entries[pos].priority {
                break;
            }
            self.swap_entries(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;
            if left < self.entries.len()
                && self.entries[left].priority < self.entries[smallest].priority
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].priority < self.entries[smallest].priority
            {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap_entries(pos, smallest);
            pos = smallest;
        }
    }

    /// Heap-order check, for tests.
    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.entries.len())
            .all(|i| self.entries[(i - 1) / 2].priority <= self.entries[i].priority)
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn ids(n: usize) -> Vec<NodeId> {
        (0..n).map(|i| Node::new(i.to_string()).id()).collect()
    }

    #[test]
    fn test_extracts_in_priority_order() {
        let nodes = ids(5);
        let mut heap = IndexedMinHeap::new();
        for (node, priority) in nodes.iter().zip([3.0, 1.0, 4.0, 1.5, 0.5]) {
            heap.insert(*node, priority).unwrap();
            assert!(heap.is_heap(), "heap order broken after insert");
        }

        let mut priorities = Vec::new();
        while let Some((_, p)) = heap.extract_min() {
            priorities.push(p);
            assert!(heap.is_heap(), "heap order broken after extract");
        }
        assert_eq!(priorities, vec![0.5, 1.0, 1.5, 3.0, 4.0]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_decrease_key_reorders() {
        let nodes = ids(4);
        let mut heap = IndexedMinHeap::new();
        for (node, priority) in nodes.iter().zip([10.0, 20.0, 30.0, 40.0]) {
            heap.insert(*node, priority).unwrap();
        }

        heap.decrease_key(nodes[3], 5.0).unwrap();
        assert!(heap.is_heap());
        assert_eq!(heap.priority_of(nodes[3]), Some(5.0));

        let (first, p) = heap.extract_min().unwrap();
        assert_eq!(first, nodes[3]);
        assert_eq!(p, 5.0);
    }

    #[test]
    fn test_position_map_tracks_extraction() {
        let nodes = ids(3);
        let mut heap = IndexedMinHeap::new();
        for (node, priority) in nodes.iter().zip([2.0, 1.0, 3.0]) {
            heap.insert(*node, priority).unwrap();
        }

        let (min, _) = heap.extract_min().unwrap();
        assert_eq!(min, nodes[1]);
        assert!(!heap.contains(nodes[1]), "extracted node must leave the map");
        assert!(heap.contains(nodes[0]));
        assert!(heap.contains(nodes[2]));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_empty_extract_is_none() {
        let mut heap = IndexedMinHeap::new();
        assert!(heap.is_empty());
        assert!(heap.extract_min().is_none());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let nodes = ids(1);
        let mut heap = IndexedMinHeap::new();
        heap.insert(nodes[0], 1.0).unwrap();
        assert!(matches!(
            heap.insert(nodes[0], 2.0),
            Err(LatticeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_decrease_key_unknown_node_rejected() {
        let nodes = ids(2);
        let mut heap = IndexedMinHeap::new();
        heap.insert(nodes[0], 1.0).unwrap();
        assert!(matches!(
            heap.decrease_key(nodes[1], 0.5),
            Err(LatticeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_element_roundtrip() {
        let nodes = ids(1);
        let mut heap = IndexedMinHeap::new();
        heap.insert(nodes[0], 7.0).unwrap();
        assert_eq!(heap.extract_min(), Some((nodes[0], 7.0)));
        assert!(heap.extract_min().is_none());
        assert!(!heap.contains(nodes[0]));
    }
}
