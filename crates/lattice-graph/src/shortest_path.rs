// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Shortest Path
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-source shortest path (Dijkstra) over the indexed min-heap.
//!
//! ```text
//! dist[*] = +inf, dist[source] = 0
//! heap ← (source, 0)
//! while heap not empty:
//!   u = extract_min
//!   for v in neighbors(u) with adjacency weight w > 0:
//!     if dist[u] + w < dist[v]:
//!       dist[v] = dist[u] + w;  pred[v] = u
//!       insert or decrease-key v
//! ```
//!
//! Edge weights are read from the adjacency matrix, so a directed
//! edge relaxes in its own direction only (the mirrored entry is
//! absent). Weights are assumed non-negative.
//!
//! The resulting predecessor tree is cached on the graph together
//! with its source; repeated queries from the same source reuse it,
//! and any structural mutation drops it.

use lattice_types::error::{LatticeError, LatticeResult};

use crate::graph::Graph;
use crate::heap::IndexedMinHeap;
use crate::node::NodeId;

/// Predecessor tree produced by one Dijkstra run. `predecessors[i]`
/// is the node-sequence index that relaxed node `i`, or `None` for
/// the source and unreached nodes.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub source: NodeId,
    pub predecessors: Vec<Option<usize>>,
    pub distances: Vec<f64>,
}

impl Graph {
    /// Run Dijkstra from the node at sequence index `source_idx`.
    fn dijkstra(&self, source_idx: usize) -> LatticeResult<ShortestPathTree> {
        let n = self.node_count();
        let source = self.nodes()[source_idx].id();

        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source_idx] = 0.0;

        let mut heap = IndexedMinHeap::new();
        heap.insert(source, 0.0)?;

        while let Some((node, _)) = heap.extract_min() {
            let u = self.index_of(node).ok_or_else(|| {
                LatticeError::InvalidArgument("heap returned a foreign node".to_string())
            })?;
            let neighbors: Vec<NodeId> = self.nodes()[u].neighbors().iter().copied().collect();
            for neighbor in neighbors {
                let Some(v) = self.index_of(neighbor) else {
                    continue;
                };
                let weight = self.adjacency().get(u, v).re;
                if weight == 0.0 {
                    continue; // no arc in this direction
                }
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    if heap.contains(neighbor) {
                        heap.decrease_key(neighbor, candidate)?;
                    } else {
                        heap.insert(neighbor, candidate)?;
                    }
                }
            }
        }

        Ok(ShortestPathTree {
            source,
            predecessors,
            distances,
        })
    }

    /// Shortest path from `source` to `target` as a node-id sequence
    /// (inclusive of both endpoints). Recomputes the predecessor tree
    /// only when `force_update` is set or the cached source differs;
    /// otherwise the cached tree answers. An unreachable target
    /// yields an empty path.
    pub fn shortest_path(
        &mut self,
        source: NodeId,
        target: NodeId,
        force_update: bool,
    ) -> LatticeResult<Vec<NodeId>> {
        let source_idx = self.index_of(source).ok_or_else(|| {
            LatticeError::InvalidArgument("shortest_path: source is not a node".to_string())
        })?;
        let target_idx = self.index_of(target).ok_or_else(|| {
            LatticeError::InvalidArgument("shortest_path: target is not a node".to_string())
        })?;

        let stale = force_update
            || !matches!(&self.path_cache, Some(tree) if tree.source == source);
        if stale {
            self.path_cache = Some(self.dijkstra(source_idx)?);
        }
        // Freshly assigned above when stale, so always present here
        let Some(tree) = self.path_cache.as_ref() else {
            return Ok(Vec::new());
        };

        if source == target {
            return Ok(vec![source]);
        }

        // Walk predecessors from the target back to the source
        let mut indices = vec![target_idx];
        let mut cursor = target_idx;
        while cursor != source_idx {
            match tree.predecessors[cursor] {
                Some(prev) => {
                    indices.push(prev);
                    cursor = prev;
                }
                None => return Ok(Vec::new()), // unreached
            }
        }
        indices.reverse();
        Ok(indices.into_iter().map(|i| self.nodes()[i].id()).collect())
    }

    /// Weighted length of the shortest path: the sum of edge weights
    /// along the reconstructed path, `0` for `source == target` and
    /// `+inf` when the target is unreachable.
    pub fn shortest_path_length(&mut self, source: NodeId, target: NodeId) -> LatticeResult<f64> {
        if source == target {
            return Ok(0.0);
        }
        let path = self.shortest_path(source, target, false)?;
        if path.is_empty() {
            return Ok(f64::INFINITY);
        }
        let mut total = 0.0;
        for pair in path.windows(2) {
            let (Some(i), Some(j)) = (self.index_of(pair[0]), self.index_of(pair[1])) else {
                return Ok(f64::INFINITY);
            };
            total += self.adjacency().get(i, j).re;
        }
        Ok(total)
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════
