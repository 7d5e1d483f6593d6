//! Graph creation benchmarks

use criterion::Criterion;
use lazydag::TaskGraph;
use std::hint::black_box;

pub fn bench_graph_creation(c: &mut Criterion) {
    c.bench_function("create_empty_graph", |b| {
        b.iter(|| black_box(TaskGraph::new()));
    });

    c.bench_function("add_100_tasks", |b| {
        b.iter(|| {
            let mut graph = TaskGraph::new();
            for i in 0..100 {
                black_box(graph.add(move || i, ()).unwrap());
            }
            graph
        });
    });

    c.bench_function("add_100_dependent_tasks", |b| {
        b.iter(|| {
            let mut graph = TaskGraph::with_capacity(101);
            let mut last = graph.add(|| 0, ()).unwrap();
            for _ in 0..100 {
                last = graph
                    .add(|x: i32| x + 1, graph.future_result::<i32>(last).unwrap())
                    .unwrap();
            }
            black_box(last);
            graph
        });
    });
}
