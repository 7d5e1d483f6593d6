//! # Runtime Cycle Detection
//!
//! This module documents where cycles can and cannot appear in a [`crate::TaskGraph`], and how
//! they are reported.
//!
//! ## Placeholder Edges Cannot Form Cycles
//!
//! 1. [`crate::TaskGraph::future_result`] only accepts a [`crate::TaskHandle`] the graph has
//!    already issued
//! 2. A task's placeholders are passed to [`crate::TaskGraph::add`] *before* the task itself
//!    has a handle
//! 3. So every placeholder edge points from a task to one registered strictly earlier
//!
//! Handles cannot be forged: their constructor is private to the crate.
//!
//! ```compile_fail,E0451
//! use lazydag::TaskHandle;
//!
//! // ERROR: field `id` of `TaskHandle` is private
//! let forged = TaskHandle { id: Default::default() };
//! ```
//!
//! This is also why [`crate::TaskGraph::execute_all`] can simply run tasks in registration
//! order.
//!
//! ## Ordering Edges Can
//!
//! [`crate::TaskGraph::add_dependency`] adds an edge that carries no value and may point in
//! either direction, including from a task to itself. Cycles are not rejected when the edge is
//! added: they are found by demand-driven evaluation.
//!
//! ## Detection
//!
//! [`crate::TaskGraph::get_result`] walks the dependency closure of the requested task
//! depth-first, coloring tasks white (unvisited), gray (on the current path) or black (done).
//! Reaching a gray task means the path loops back onto itself:
//!
//! - The walk stops with [`crate::DagError::CycleDetected`], carrying the looping path
//! - No task on the loop has executed
//! - Tasks that finished before the loop was reached keep their cached results
//! - Colors are fresh for every call, so an earlier failure never affects a later one
//!
//! ```
//! use lazydag::{DagError, TaskGraph};
//!
//! let mut graph = TaskGraph::new();
//! let a = graph.add(|| 1, ())?;
//! let b = graph.add(|x: i32| x + 1, graph.future_result::<i32>(a)?)?;
//! let c = graph.add(|x: i32| x + 1, graph.future_result::<i32>(b)?)?;
//!
//! // b must now also wait for c, which already reads b
//! graph.add_dependency(b, c)?;
//!
//! match graph.get_result::<i32>(c) {
//!     Err(DagError::CycleDetected { task_id, cycle }) => {
//!         assert_eq!(task_id, 2);
//!         assert_eq!(cycle, vec![2, 1, 2]);
//!     }
//!     other => panic!("expected a cycle, got {other:?}"),
//! }
//!
//! // Nothing on the cycle ran; `a` finished before the cycle was reached
//! assert!(!graph.is_executed(b)?);
//! assert!(!graph.is_executed(c)?);
//! assert!(graph.is_executed(a)?);
//! # Ok::<(), DagError>(())
//! ```
//!
//! A self-dependency is the shortest cycle:
//!
//! ```
//! use lazydag::{DagError, TaskGraph};
//!
//! let mut graph = TaskGraph::new();
//! let a = graph.add(|| "never", ())?;
//! graph.add_dependency(a, a)?;
//!
//! let err = graph.get_result::<&str>(a).unwrap_err();
//! assert!(err.is_cycle());
//! assert!(err.to_string().starts_with("dependency cycle detected at task #0: #0 -> #0"));
//! # Ok::<(), DagError>(())
//! ```
//!
//! ## Implications
//!
//! - [`crate::TaskGraph::execute_all`] performs no cycle checking and ignores ordering edges
//! - Only [`crate::TaskGraph::get_result`] and its siblings report cycles
//! - A cycle reachable from a task makes that task unreadable until the graph is rebuilt
