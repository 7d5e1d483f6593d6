//! Diamond-shaped graphs: one source, two branches, one join

use crate::common::CallCounter;
use lazydag::{DagResult, TaskGraph};

#[test]
fn test_diamond_shares_source() -> DagResult<()> {
    let counter = CallCounter::new();
    let mut graph = TaskGraph::new();

    let c = counter.clone();
    let top = graph.add(
        move || {
            c.hit();
            10
        },
        (),
    )?;
    let left = graph.add(|x: i32| x + 1, graph.future_result::<i32>(top)?)?;
    let right = graph.add(|x: i32| x * 2, graph.future_result::<i32>(top)?)?;
    let bottom = graph.add(
        |l: i32, r: i32| l + r,
        (graph.future_result::<i32>(left)?, graph.future_result::<i32>(right)?),
    )?;

    assert_eq!(graph.get_result::<i32>(bottom)?, 31);
    assert_eq!(counter.get(), 1);
    Ok(())
}

#[test]
fn test_stacked_diamonds() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let mut top = graph.add(|| 1_u64, ())?;

    for _ in 0..20 {
        let left = graph.add(|x: u64| x, graph.future_result::<u64>(top)?)?;
        let right = graph.add(|x: u64| x, graph.future_result::<u64>(top)?)?;
        top = graph.add(
            |l: u64, r: u64| l + r,
            (graph.future_result::<u64>(left)?, graph.future_result::<u64>(right)?),
        )?;
    }

    assert_eq!(graph.get_result::<u64>(top)?, 1 << 20);
    Ok(())
}
