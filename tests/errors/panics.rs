//! Tests for tasks whose callable panics

use crate::common::CallCounter;
use lazydag::{DagError, DagResult, TaskGraph};

#[test]
fn test_panicking_task_reports_error() {
    let mut graph = TaskGraph::new();
    let bad = graph.add(|| -> i32 { panic!("boom") }, ()).unwrap();

    let err = graph.get_result::<i32>(bad).unwrap_err();
    assert_eq!(
        err,
        DagError::TaskPanicked {
            task_id: 0,
            panic_message: "boom".to_string(),
        }
    );
    assert!(!graph.is_executed(bad).unwrap());

    // Reading again reports the same panic instead of a missing result
    assert_eq!(graph.get_result::<i32>(bad).unwrap_err(), err);
}

#[test]
fn test_execute_all_stops_at_panic() -> DagResult<()> {
    let counter = CallCounter::new();
    let mut graph = TaskGraph::new();

    let before_counter = counter.clone();
    let before = graph.add(
        move || {
            before_counter.hit();
            1
        },
        (),
    )?;
    let bad = graph.add(|| -> i32 { panic!("boom") }, ())?;
    let after_counter = counter.clone();
    let after = graph.add(
        move || {
            after_counter.hit();
            2
        },
        (),
    )?;

    let err = graph.execute_all().unwrap_err();
    assert!(matches!(err, DagError::TaskPanicked { task_id: 1, .. }));
    assert_eq!(counter.get(), 1);
    assert!(graph.is_executed(before)?);
    assert!(!graph.is_executed(after)?);

    // A second pass reports the panic again and never skips past it
    assert!(matches!(
        graph.execute_all(),
        Err(DagError::TaskPanicked { task_id: 1, .. })
    ));
    assert!(!graph.is_executed(bad)?);

    // Tasks that do not depend on the panicking one are still reachable on demand
    assert_eq!(graph.get_result::<i32>(after)?, 2);
    Ok(())
}

#[test]
fn test_dependent_of_panicking_task_fails() -> DagResult<()> {
    let counter = CallCounter::new();
    let mut graph = TaskGraph::new();

    let bad = graph.add(|| -> i32 { panic!("boom") }, ())?;
    let consumer_counter = counter.clone();
    let consumer = graph.add(
        move |x: i32| {
            consumer_counter.hit();
            x + 1
        },
        graph.future_result::<i32>(bad)?,
    )?;

    let err = graph.get_result::<i32>(consumer).unwrap_err();
    assert_eq!(err.task_id(), Some(0));
    assert!(matches!(err, DagError::TaskPanicked { .. }));
    assert_eq!(counter.get(), 0);
    assert!(!graph.is_executed(consumer)?);
    Ok(())
}
