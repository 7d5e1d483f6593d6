//! Deep chain benchmarks: demand-driven traversal depth

use criterion::{BatchSize, BenchmarkId, Criterion};
use lazydag::{TaskGraph, TaskHandle};

fn chain(len: usize) -> (TaskGraph<'static>, TaskHandle) {
    let mut graph = TaskGraph::with_capacity(len + 1);
    let mut last = graph.add(|| 0_u64, ()).unwrap();
    for _ in 0..len {
        last = graph
            .add(|x: u64| x + 1, graph.future_result::<u64>(last).unwrap())
            .unwrap();
    }
    (graph, last)
}

pub fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");

    for len in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("get_result", len), len, |b, &len| {
            b.iter_batched(
                || chain(len),
                |(mut graph, last)| graph.get_result::<u64>(last).unwrap(),
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("execute_all", len), len, |b, &len| {
            b.iter_batched(
                || chain(len),
                |(mut graph, _)| graph.execute_all().unwrap(),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}
