use criterion::{Criterion, criterion_group, criterion_main};
use kgraph_core::graph::DirectedGraph;
use kgraph_core::knowledge::KnowledgeGraph;
use std::hint::black_box;

/// Layered DAG: each vertex links to the next two in id order.
fn build_graph(vertex_count: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::new();
    for i in 0..vertex_count {
        graph.add(i);
    }
    for i in 0..vertex_count {
        for j in [i + 1, i + 2] {
            if j < vertex_count {
                graph.connect(&i, &j, 1.0).unwrap();
            }
        }
    }
    graph
}

/// Binary tree of entities named `n<i>`; parent of `i` is `(i - 1) / 2`.
fn build_tree(entity_count: usize) -> KnowledgeGraph {
    let mut kg = KnowledgeGraph::new();
    for i in 0..entity_count {
        kg.add_entity(format!("n{i}")).unwrap();
    }
    for i in 1..entity_count {
        kg.add_relation_default(&format!("n{}", (i - 1) / 2), &format!("n{i}"))
            .unwrap();
    }
    kg
}

fn bench_bfs_500(c: &mut Criterion) {
    let graph = build_graph(500);

    c.bench_function("bfs_500_vertices", |b| {
        b.iter(|| graph.bfs(black_box(&0)).unwrap())
    });
}

fn bench_dfs_500(c: &mut Criterion) {
    let graph = build_graph(500);

    c.bench_function("dfs_500_vertices", |b| {
        b.iter(|| graph.dfs(black_box(&0)).unwrap())
    });
}

fn bench_related_entities(c: &mut Criterion) {
    let kg = build_tree(255);

    c.bench_function("related_entities_depth_3_255", |b| {
        b.iter(|| kg.get_related_entities(black_box("n0"), 3).unwrap())
    });
}

fn bench_common_ancestor(c: &mut Criterion) {
    let kg = build_tree(127);

    c.bench_function("common_ancestor_127", |b| {
        b.iter(|| {
            kg.find_common_ancestors(black_box("n63"), black_box("n126"))
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_bfs_500,
    bench_dfs_500,
    bench_related_entities,
    bench_common_ancestor,
);
criterion_main!(benches);
