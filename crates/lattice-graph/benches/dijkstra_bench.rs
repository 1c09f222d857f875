// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Dijkstra Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use lattice_graph::{Graph, Node, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Random connected graph: a ring backbone plus extra weighted chords.
fn random_graph(n: usize, extra_edges: usize, rng: &mut StdRng) -> (Graph, Vec<NodeId>) {
    let mut g = Graph::new();
    let ids: Vec<NodeId> = (0..n).map(|i| g.add_node(Node::new(i.to_string()))).collect();
    for i in 0..n {
        g.connect(ids[i], ids[(i + 1) % n], rng.gen_range(1.0..10.0), false)
            .unwrap();
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            g.connect(ids[a], ids[b], rng.gen_range(1.0..10.0), false)
                .unwrap();
        }
    }
    (g, ids)
}

fn bench_dijkstra_ring_100(c: &mut Criterion) {
    let mut g = Graph::ring(100).unwrap();
    let source = g.nodes()[0].id();
    let target = g.nodes()[50].id();

    c.bench_function("dijkstra_ring_100", |b| {
        b.iter(|| black_box(g.shortest_path(source, target, true).unwrap()))
    });
}

fn bench_dijkstra_random_100(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(99);
    let (mut g, ids) = random_graph(100, 300, &mut rng);
    let source = ids[0];
    let target = ids[73];

    c.bench_function("dijkstra_random_100", |b| {
        b.iter(|| black_box(g.shortest_path(source, target, true).unwrap()))
    });
}

fn bench_cached_query(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(99);
    let (mut g, ids) = random_graph(100, 300, &mut rng);
    let source = ids[0];
    let target = ids[73];
    // Prime the cache once; subsequent queries only walk predecessors
    g.shortest_path(source, target, true).unwrap();

    c.bench_function("shortest_path_cached_100", |b| {
        b.iter(|| black_box(g.shortest_path(source, target, false).unwrap()))
    });
}

fn bench_complete_rebuild_30(c: &mut Criterion) {
    c.bench_function("complete_graph_build_30", |b| {
        b.iter(|| black_box(Graph::complete(30).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_dijkstra_ring_100,
    bench_dijkstra_random_100,
    bench_cached_query,
    bench_complete_rebuild_30
);
criterion_main!(benches);
