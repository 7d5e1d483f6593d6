//! Tests for runtime cycle detection

use test_case::test_case;

use crate::common::CallCounter;
use lazydag::{DagError, DagResult, TaskGraph, TaskHandle};

/// Build a ring of `len` counted tasks, closed with ordering edges, behind one healthy source.
fn ring(
    graph: &mut TaskGraph<'_>,
    counter: &CallCounter,
    len: usize,
) -> DagResult<(TaskHandle, Vec<TaskHandle>)> {
    let source = graph.add(|| 1, ())?;
    let mut members = Vec::with_capacity(len);
    for _ in 0..len {
        let counter = counter.clone();
        members.push(graph.add(
            move |x: i32| {
                counter.hit();
                x + 1
            },
            graph.future_result::<i32>(source)?,
        )?);
    }
    for i in 0..len {
        graph.add_dependency(members[i], members[(i + 1) % len])?;
    }
    Ok((source, members))
}

#[test_case(1 ; "self reference")]
#[test_case(2 ; "two tasks")]
#[test_case(5 ; "five tasks")]
fn test_cycle_never_executes_members(len: usize) {
    let counter = CallCounter::new();
    let mut graph = TaskGraph::new();
    let (source, members) = ring(&mut graph, &counter, len).unwrap();

    for member in &members {
        let err = graph.get_result::<i32>(member).unwrap_err();
        assert!(err.is_cycle(), "expected a cycle, got {err:?}");
    }

    assert_eq!(counter.get(), 0);
    for member in &members {
        assert!(!graph.is_executed(member).unwrap());
    }
    // The source is reachable from the ring without being part of it
    assert_eq!(graph.get_result::<i32>(source).unwrap(), 1);
}

#[test]
fn test_cycle_path_is_reported() {
    let mut graph = TaskGraph::new();
    let a = graph.add(|| 0, ()).unwrap();
    let b = graph.add(|x: i32| x, graph.future_result::<i32>(a).unwrap()).unwrap();
    let c = graph.add(|x: i32| x, graph.future_result::<i32>(b).unwrap()).unwrap();
    let d = graph.add(|x: i32| x, graph.future_result::<i32>(c).unwrap()).unwrap();
    graph.add_dependency(b, d).unwrap();

    let err = graph.get_result::<i32>(d).unwrap_err();
    assert_eq!(
        err,
        DagError::CycleDetected {
            task_id: 3,
            cycle: vec![3, 2, 1, 3],
        }
    );
    assert_eq!(err.task_id(), Some(3));
    assert!(err.to_string().contains("#3 -> #2 -> #1 -> #3"));
}

#[test]
fn test_task_outside_cycle_still_evaluates() -> DagResult<()> {
    let mut graph = TaskGraph::new();
    let a = graph.add(|| 2, ())?;
    let looped = graph.add(|x: i32| x, graph.future_result::<i32>(a)?)?;
    graph.add_dependency(looped, looped)?;
    let healthy = graph.add(|x: i32| x * 10, graph.future_result::<i32>(a)?)?;

    assert!(graph.get_result::<i32>(looped).is_err());
    assert_eq!(graph.get_result::<i32>(healthy)?, 20);
    Ok(())
}

#[test]
fn test_task_depending_on_cycle_fails() {
    let mut graph = TaskGraph::new();
    let a = graph.add(|| 1, ()).unwrap();
    let b = graph.add(|x: i32| x, graph.future_result::<i32>(a).unwrap()).unwrap();
    graph.add_dependency(a, b).unwrap();
    let downstream = graph
        .add(|x: i32| x + 1, graph.future_result::<i32>(b).unwrap())
        .unwrap();

    let err = graph.get_result::<i32>(downstream).unwrap_err();
    assert!(matches!(err, DagError::CycleDetected { .. }));
    assert!(!graph.is_executed(downstream).unwrap());
}

#[test]
fn test_cycle_error_is_repeatable() {
    let mut graph = TaskGraph::new();
    let a = graph.add(|| 1, ()).unwrap();
    graph.add_dependency(a, a).unwrap();

    let first = graph.get_result::<i32>(a).unwrap_err();
    let second = graph.get_result::<i32>(a).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_cycle_through_executed_task_detected() {
    let counter = CallCounter::new();
    let mut graph = TaskGraph::new();
    let a = graph.add(|| 1, ()).unwrap();
    let b_counter = counter.clone();
    let b = graph
        .add(
            move || {
                b_counter.hit();
                2
            },
            (),
        )
        .unwrap();

    graph.evaluate(a).unwrap();
    graph.add_dependency(a, b).unwrap();
    graph.add_dependency(b, a).unwrap();

    let err = graph.get_result::<i32>(b).unwrap_err();
    assert_eq!(
        err,
        DagError::CycleDetected {
            task_id: 1,
            cycle: vec![1, 0, 1],
        }
    );
    assert_eq!(counter.get(), 0);
    assert!(!graph.is_executed(b).unwrap());

    // The cached task itself is still readable
    assert_eq!(graph.get_result::<i32>(a).unwrap(), 1);
}
