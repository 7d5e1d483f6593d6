//! Fan-out pattern benchmarks (1 → N dependencies)

use criterion::{BatchSize, Criterion};
use lazydag::TaskGraph;

pub fn bench_fanout(c: &mut Criterion) {
    // Fan-out pattern (1 → n) with simple i32
    c.bench_function("fanout_1_to_100_i32", |b| {
        b.iter_batched(
            || {
                let mut graph = TaskGraph::new();
                let source = graph.add(|| 42, ()).unwrap();
                for i in 0..100 {
                    let dep = graph.future_result::<i32>(source).unwrap();
                    graph.add(move |x: i32| x + i, dep).unwrap();
                }
                graph
            },
            |mut graph| graph.execute_all().unwrap(),
            BatchSize::SmallInput,
        );
    });

    // Fan-out pattern with Vec: every consumer receives its own clone
    c.bench_function("fanout_1_to_100_vec", |b| {
        b.iter_batched(
            || {
                let mut graph = TaskGraph::new();
                let source = graph
                    .add(
                        || (0..1000).map(|i| format!("Item {i}")).collect::<Vec<_>>(),
                        (),
                    )
                    .unwrap();
                for i in 0..100 {
                    let dep = graph.future_result::<Vec<String>>(source).unwrap();
                    graph
                        .add(move |data: Vec<String>| data.len() + i, dep)
                        .unwrap();
                }
                graph
            },
            |mut graph| graph.execute_all().unwrap(),
            BatchSize::SmallInput,
        );
    });
}
