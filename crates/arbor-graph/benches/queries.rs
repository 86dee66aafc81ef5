use arbor_core::DeterministicRng;
use arbor_graph::{canonical_hash, gen_connected};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn queries_bench(c: &mut Criterion) {
    let mut rng = DeterministicRng::from_seed(7);
    let graph = gen_connected(2_000, 4_000, &mut rng).unwrap();
    let nodes = graph.nodes();

    c.bench_function("degree_queries", |b| {
        b.iter(|| {
            for node in &nodes {
                black_box(graph.degree(*node).unwrap());
            }
        });
    });

    c.bench_function("neighbor_enumeration", |b| {
        b.iter(|| {
            for node in &nodes {
                black_box(graph.neighbors(*node).unwrap());
            }
        });
    });

    c.bench_function("min_degree_candidate", |b| {
        b.iter(|| black_box(graph.min_degree_node_above(3)));
    });

    c.bench_function("canonical_hash", |b| {
        b.iter(|| black_box(canonical_hash(&graph)));
    });
}

criterion_group!(benches, queries_bench);
criterion_main!(benches);
