//! Criterion benchmarks for wordgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use wordgraph::engine::{ShortestPath, TopologicalSort};
use wordgraph::graph::{Graph, GraphBuilder};

/// Random four-letter words over a small alphabet, so many are one letter apart.
fn make_word_graph(word_count: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let alphabet: Vec<char> = "abcdefgh".chars().collect();
    let mut builder = GraphBuilder::word_distance();
    for _ in 0..word_count {
        let word: String = (0..4)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();
        builder.add_node(word);
    }
    builder.build().unwrap()
}

/// Random layered DAG: edges only point to later nodes.
fn make_dag(node_count: usize, edges_per_node: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let names: Vec<String> = (0..node_count).map(|i| format!("task_{}", i)).collect();
    let mut builder = GraphBuilder::explicit_pair();
    builder.add_nodes(names.iter().cloned());
    for i in 0..node_count.saturating_sub(1) {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(i + 1..node_count);
            builder.link(names[i].clone(), names[target].clone());
        }
    }
    builder.build().unwrap()
}

fn bench_build_word_graph(c: &mut Criterion) {
    c.bench_function("build_word_graph_1k", |b| {
        b.iter(|| black_box(make_word_graph(1_000)))
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_word_graph(2_000);
    let source = graph.node_ids().next().unwrap();
    c.bench_function("bfs_word_graph_2k", |b| {
        b.iter(|| ShortestPath::run(black_box(&graph), source).unwrap())
    });
}

fn bench_topological_sort(c: &mut Criterion) {
    let graph = make_dag(10_000, 4);
    c.bench_function("topo_sort_10k", |b| {
        b.iter(|| TopologicalSort::run(black_box(&graph)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_build_word_graph,
    bench_shortest_path,
    bench_topological_sort
);
criterion_main!(benches);
