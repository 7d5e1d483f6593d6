//! Lazy Dependency-Graph Task Scheduler
//!
//! A small, single-threaded scheduler for deferred computations. Register ordinary callables
//! together with their arguments; arguments may be plain values or placeholders for the results
//! of other tasks. Nothing runs at registration time. Results are computed on demand, each task
//! at most once, and cached for the lifetime of the graph.
//!
//! # Features
//!
//! - **Any callable**: closures, `fn` items, function pointers and method paths
//!   (`Type::method` with the receiver bound as the first argument)
//! - **Lazy, demand-driven evaluation**: [`TaskGraph::get_result`] executes exactly the tasks the
//!   requested result depends on, dependencies first
//! - **Run everything**: [`TaskGraph::execute_all`] executes every pending task in registration
//!   order
//! - **Cycle detection**: demand-driven evaluation reports [`DagError::CycleDetected`] with the
//!   offending path before any task on it executes. See [`cycle_detection`]
//! - **Runtime-checked result types**: results are stored type-erased in a [`ResultBox`]; reading
//!   one with the wrong type is a [`DagError::TypeMismatch`], never undefined behavior
//! - **Error handling**: Result-based error handling with [`DagResult<T>`] throughout
//! - **Optional tracing**: enable the `tracing` feature for structured logs of registration and
//!   evaluation
//!
//! # Quick Start
//!
//! ```
//! use lazydag::TaskGraph;
//!
//! fn sum(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let mut graph = TaskGraph::new();
//!
//! // Source tasks
//! let a = graph.add(|| 3, ())?;
//! let b = graph.add(|| 4, ())?;
//!
//! // Tasks reading earlier results through placeholders
//! let c = graph.add(sum, (graph.future_result::<i32>(a)?, graph.future_result::<i32>(b)?))?;
//! let d = graph.add(|x: i32| x * x, graph.future_result::<i32>(c)?)?;
//!
//! // Nothing has run yet; this executes a, b, c and d
//! assert_eq!(graph.get_result::<i32>(d)?, 49);
//!
//! // Cached results are returned as-is
//! assert_eq!(graph.get_result::<i32>(a)?, 3);
//! # Ok::<(), lazydag::DagError>(())
//! ```
//!
//! # Core Concepts
//!
//! ## TaskGraph
//!
//! The [`TaskGraph`] owns every registered task and its cached result. Register tasks with
//! [`TaskGraph::add`], then either run them all with [`TaskGraph::execute_all`] or request a
//! single result with [`TaskGraph::get_result`].
//!
//! ## TaskHandle
//!
//! A [`TaskHandle`] is the opaque, copyable identifier returned by [`TaskGraph::add`]. It can
//! only be obtained from a graph; its position is exposed read-only through
//! [`TaskHandle::index`].
//!
//! ## FutureResult
//!
//! A [`FutureResult<T>`] stands in for "the result of task X, read as `T`". Pass it as an
//! argument to a later task; each placeholder becomes a dependency edge. The type `T` is checked
//! when the consuming task executes.
//!
//! ## Arguments
//!
//! Arguments are bound as `()`, a single value, or a tuple of up to 8 values. Every element
//! implements [`BoundArg`]:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lazydag::{Bound, TaskGraph};
//!
//! #[derive(Clone)]
//! struct Scale(i32);
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let threshold = 10;
//!
//! let mut graph = TaskGraph::new();
//! let value = graph.add(|| 4, ())?;
//! let scaled = graph.add(
//!     |scale: Scale, limit: &i32, log: Rc<RefCell<Vec<i32>>>, v: i32| {
//!         let scaled = v * scale.0;
//!         log.borrow_mut().push(scaled);
//!         scaled.min(*limit)
//!     },
//!     (Bound(Scale(3)), &threshold, Rc::clone(&log), graph.future_result::<i32>(value)?),
//! )?;
//!
//! assert_eq!(graph.get_result::<i32>(scaled)?, 10);
//! assert_eq!(*log.borrow(), vec![12]);
//! # Ok::<(), lazydag::DagError>(())
//! ```
//!
//! # Examples
//!
//! ## Fan-out Pattern (1 → n)
//!
//! ```
//! use lazydag::TaskGraph;
//!
//! let mut graph = TaskGraph::new();
//!
//! let base = graph.add(|| 10, ())?;
//! let plus1 = graph.add(|x: i32| x + 1, graph.future_result::<i32>(base)?)?;
//! let times2 = graph.add(|x: i32| x * 2, graph.future_result::<i32>(base)?)?;
//!
//! graph.execute_all()?;
//!
//! assert_eq!(graph.get_result::<i32>(plus1)?, 11);
//! assert_eq!(graph.get_result::<i32>(times2)?, 20);
//! # Ok::<(), lazydag::DagError>(())
//! ```
//!
//! ## Fan-in Pattern (m → 1)
//!
//! ```
//! use lazydag::TaskGraph;
//!
//! let mut graph = TaskGraph::new();
//!
//! let name = graph.add(|| "Alice".to_string(), ())?;
//! let age = graph.add(|| 30, ())?;
//! let active = graph.add(|| true, ())?;
//! let user = graph.add(
//!     |n: String, a: i32, f: bool| format!("User: {n}, Age: {a}, Active: {f}"),
//!     (
//!         graph.future_result::<String>(name)?,
//!         graph.future_result::<i32>(age)?,
//!         graph.future_result::<bool>(active)?,
//!     ),
//! )?;
//!
//! assert_eq!(graph.get_result::<String>(user)?, "User: Alice, Age: 30, Active: true");
//! # Ok::<(), lazydag::DagError>(())
//! ```
//!
//! # Implementation Notes
//!
//! ## Type Checking
//!
//! Result types are checked at the moment a value is read, not at registration. A placeholder
//! declared with the wrong type makes its consumer fail with [`DagError::TypeMismatch`] when the
//! consumer executes. The failing task stays pending and nothing cached is modified.
//!
//! ## Argument Limits
//!
//! Up to 8 arguments per task are supported. Group related inputs into a struct (bound with
//! [`Bound`]) or add an intermediate task if you need more.
//!
//! ## Task Output Limitations
//!
//! Tasks must return a value: callables returning `()` are rejected by [`TaskGraph::add`] with
//! [`DagError::UnitOutput`].
//!
//! ## Panics
//!
//! A panic inside a task is caught and returned as [`DagError::TaskPanicked`]. The task never
//! produces a result, and every later evaluation that needs it reports the same error.
//!
//! ## Threading
//!
//! The graph is single-threaded. Evaluation takes `&mut self`, so a task can never re-enter the
//! graph that is running it.

pub mod cycle_detection;
mod deps;
mod error;
mod extract;
mod future_result;
mod node;
mod output;
mod runner;
mod task;
mod traversal;
mod types;

pub use deps::TaskArgs;
pub use error::{DagError, DagResult};
pub use extract::{Bound, BoundArg};
pub use future_result::{FutureResult, MapResult};
pub use output::{ResultBox, ResultView};
pub use runner::TaskGraph;
pub use task::TaskFn;
pub use types::TaskHandle;
