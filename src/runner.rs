//! Task graph registration and evaluation.
//!
//! Provides [`TaskGraph`] for registering tasks with bound arguments and computing their results
//! lazily. Two evaluation strategies are offered:
//!
//! - [`TaskGraph::execute_all`]: one pass over all tasks in registration order, no graph checks
//! - [`TaskGraph::get_result`]: demand-driven depth-first evaluation with cycle detection
//!   (see [`crate::cycle_detection`])

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, trace};

use crate::deps::TaskArgs;
use crate::error::{DagError, DagResult};
use crate::future_result::FutureResult;
use crate::node::{NodeState, TaskNode, TypedNode};
use crate::output::ResultView;
use crate::task::TaskFn;
use crate::types::{NodeId, TaskHandle};

/// Register tasks and compute their results on demand.
///
/// # Workflow
///
/// 1. Create a graph with [`TaskGraph::new`]
/// 2. Register tasks with [`TaskGraph::add`]; feed earlier results into later tasks with
///    [`TaskGraph::future_result`] placeholders
/// 3. Either run everything with [`TaskGraph::execute_all`], or
/// 4. Ask for one result with [`TaskGraph::get_result`], which executes exactly the tasks it needs
///
/// Nothing executes during registration. Every task executes at most once and its result is
/// cached for the lifetime of the graph.
///
/// # Examples
///
/// ```
/// use lazydag::TaskGraph;
///
/// fn sum(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// let mut graph = TaskGraph::new();
///
/// let a = graph.add(|| 3, ())?;
/// let b = graph.add(|| 4, ())?;
/// let c = graph.add(sum, (graph.future_result::<i32>(a)?, graph.future_result::<i32>(b)?))?;
/// let d = graph.add(|x: i32| x * x, graph.future_result::<i32>(c)?)?;
///
/// assert_eq!(graph.get_result::<i32>(d)?, 49);
/// assert_eq!(graph.get_result::<i32>(a)?, 3);
/// assert_eq!(graph.get_result::<i32>(b)?, 4);
/// # Ok::<(), lazydag::DagError>(())
/// ```
///
/// The graph borrows for `'g`: arguments may be references to data that outlives the graph.
/// Results must be `'static` because they are stored type-erased.
pub struct TaskGraph<'g> {
    pub(crate) nodes: Vec<TaskNode<'g>>,
    pub(crate) edges: Vec<Vec<NodeId>>, // node -> dependencies, in recorded order
}

impl Default for TaskGraph<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> TaskGraph<'g> {
    /// Create a new empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazydag::TaskGraph;
    ///
    /// let graph = TaskGraph::new();
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create an empty graph with room for `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no task has been registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Register a task: a callable plus its bound arguments.
    ///
    /// `args` is `()`, a single argument, or a tuple of up to 8 arguments. Arguments may be plain
    /// values, references, shared pointers, or [`FutureResult`] placeholders for the results of
    /// previously registered tasks. Each placeholder becomes a dependency edge of the new task.
    ///
    /// Registration never executes anything.
    ///
    /// # Errors
    ///
    /// - [`DagError::UnitOutput`] if the callable returns `()`
    /// - [`DagError::InvalidReference`] if a placeholder refers to a task this graph has not
    ///   issued (for example one taken from a different graph)
    ///
    /// Nothing is registered when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazydag::TaskGraph;
    ///
    /// struct ComplexFunctor;
    ///
    /// impl ComplexFunctor {
    ///     fn call(&self, a: i32, b: i32) -> i32 {
    ///         a * b + 1
    ///     }
    /// }
    ///
    /// let functor = ComplexFunctor;
    /// let mut graph = TaskGraph::new();
    ///
    /// let id1 = graph.add(ComplexFunctor::call, (&functor, 2, 5))?;
    /// let id2 = graph.add(|x: i32| x * 2, graph.future_result::<i32>(id1)?)?;
    /// let id3 = graph.add(
    ///     |x: i32, y: i32| x - y,
    ///     (graph.future_result::<i32>(id2)?, graph.future_result::<i32>(id1)?),
    /// )?;
    ///
    /// assert_eq!(graph.get_result::<i32>(id3)?, 11);
    /// # Ok::<(), lazydag::DagError>(())
    /// ```
    pub fn add<F, A>(&mut self, task: F, args: A) -> DagResult<TaskHandle>
    where
        A: TaskArgs + 'g,
        F: TaskFn<A::Resolved> + 'g,
        F::Output: 'static,
    {
        TypedNode::<F, A>::check_output()?;

        let id = NodeId(self.nodes.len());
        let dependencies = args
            .dependencies()
            .into_iter()
            .map(|handle| self.check_handle(handle))
            .collect::<DagResult<Vec<_>>>()?;

        #[cfg(feature = "tracing")]
        debug!(
            task_id = id.0,
            task_type = std::any::type_name::<F>(),
            output_type = std::any::type_name::<F::Output>(),
            dependency_ids = ?dependencies.iter().map(|dep| dep.0).collect::<Vec<_>>(),
            "adding task to graph"
        );

        self.nodes
            .push(TaskNode::new(Box::new(TypedNode::new(id, task, args))));
        self.edges.push(dependencies);

        Ok(TaskHandle::new(id))
    }

    /// Obtain a placeholder for the eventual result of `handle`, read as `T`.
    ///
    /// The placeholder is meant to be passed as an argument to a later [`TaskGraph::add`]. It
    /// does not execute anything and does not check `T`; the type is checked when the consuming
    /// task executes.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::InvalidReference`] if `handle` does not refer to a registered task.
    pub fn future_result<T>(&self, handle: impl Into<TaskHandle>) -> DagResult<FutureResult<T>> {
        let handle = handle.into();
        self.check_handle(handle)?;
        Ok(FutureResult::new(handle))
    }

    /// Require `task` to run after `on` during demand-driven evaluation.
    ///
    /// Unlike placeholder edges, ordering edges carry no value and may point forwards, so they
    /// can close a cycle (including `task == on`). Cycles are reported by
    /// [`TaskGraph::get_result`], not here. [`TaskGraph::execute_all`] ignores ordering edges.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::InvalidReference`] if either handle is not registered.
    pub fn add_dependency(
        &mut self,
        task: impl Into<TaskHandle>,
        on: impl Into<TaskHandle>,
    ) -> DagResult<()> {
        let task = self.check_handle(task.into())?;
        let on = self.check_handle(on.into())?;

        #[cfg(feature = "tracing")]
        debug!(task_id = task.0, dependency_id = on.0, "adding ordering edge");

        self.edges[task.0].push(on);
        Ok(())
    }

    /// Handles of the tasks `handle` depends on: placeholder edges in argument order, followed
    /// by ordering edges in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::InvalidReference`] if `handle` is not registered.
    pub fn dependencies(&self, handle: impl Into<TaskHandle>) -> DagResult<Vec<TaskHandle>> {
        let id = self.check_handle(handle.into())?;
        Ok(self.edges[id.0].iter().copied().map(TaskHandle::new).collect())
    }

    /// True once the task has executed and its result is cached.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::InvalidReference`] if `handle` is not registered.
    pub fn is_executed(&self, handle: impl Into<TaskHandle>) -> DagResult<bool> {
        let id = self.check_handle(handle.into())?;
        Ok(self.nodes[id.0].is_executed())
    }

    /// Execute every pending task once, in registration order.
    ///
    /// This pass performs no graph or cycle checking: it relies on producers being registered
    /// before their consumers, which always holds for placeholder dependencies. Ordering edges
    /// added with [`TaskGraph::add_dependency`] are ignored.
    ///
    /// # Errors
    ///
    /// Stops at the first task whose arguments cannot be resolved (typically
    /// [`DagError::TypeMismatch`] from a placeholder) and returns that error. Tasks executed
    /// before it stay cached; the failing task and the ones after it stay pending. A panicking
    /// callable stops the pass with [`DagError::TaskPanicked`].
    pub fn execute_all(&mut self) -> DagResult<()> {
        #[cfg(feature = "tracing")]
        info!(task_count = self.nodes.len(), "executing all pending tasks");

        for index in 0..self.nodes.len() {
            self.execute_node(NodeId(index))?;
        }

        #[cfg(feature = "tracing")]
        info!("all tasks executed");

        Ok(())
    }

    /// Execute `handle` and everything it depends on, without reading the result.
    ///
    /// # Errors
    ///
    /// - [`DagError::InvalidReference`] if `handle` is not registered
    /// - [`DagError::CycleDetected`] if the dependency closure contains a cycle
    /// - [`DagError::TypeMismatch`] if a placeholder along the way is read with the wrong type
    /// - [`DagError::TaskPanicked`] if a task along the way panics
    pub fn evaluate(&mut self, handle: impl Into<TaskHandle>) -> DagResult<()> {
        let id = self.check_handle(handle.into())?;
        self.demand(id)
    }

    /// Compute (if needed) and return the result of `handle` as a `T`.
    ///
    /// If the task already executed, its cached result is returned directly. Otherwise its
    /// dependency closure is evaluated depth-first: dependencies execute before dependents,
    /// each at most once. Repeated calls return clones of the same cached value.
    ///
    /// # Errors
    ///
    /// - [`DagError::InvalidReference`] if `handle` is not registered
    /// - [`DagError::CycleDetected`] if the dependency closure contains a cycle; no task on the
    ///   cycle is executed
    /// - [`DagError::TypeMismatch`] if the task produced a type other than `T`; the cached
    ///   result is untouched and can still be read with the right type
    /// - [`DagError::TaskPanicked`] if the task or one of its dependencies panicked
    ///
    /// # Examples
    ///
    /// ```
    /// use lazydag::{DagError, TaskGraph};
    ///
    /// let mut graph = TaskGraph::new();
    /// let id = graph.add(|a: f32, b: f32| a + b, (4.0_f32, 5.0_f32))?;
    ///
    /// assert!(matches!(
    ///     graph.get_result::<f64>(id),
    ///     Err(DagError::TypeMismatch { .. })
    /// ));
    /// assert_eq!(graph.get_result::<f32>(id)?, 9.0);
    /// # Ok::<(), DagError>(())
    /// ```
    pub fn get_result<T>(&mut self, handle: impl Into<TaskHandle>) -> DagResult<T>
    where
        T: Clone + 'static,
    {
        self.get_result_ref::<T>(handle).cloned()
    }

    /// Like [`TaskGraph::get_result`], but borrows the cached value instead of cloning it.
    ///
    /// Useful for results that are expensive to clone or not `Clone` at all.
    pub fn get_result_ref<T>(&mut self, handle: impl Into<TaskHandle>) -> DagResult<&T>
    where
        T: 'static,
    {
        let handle = handle.into();
        let id = self.check_handle(handle)?;
        self.demand(id)?;

        #[cfg(feature = "tracing")]
        trace!(
            task_id = id.0,
            expected_type = std::any::type_name::<T>(),
            "reading cached result"
        );

        ResultView::new(&self.nodes).get::<T>(handle)
    }

    pub(crate) fn check_handle(&self, handle: TaskHandle) -> DagResult<NodeId> {
        if handle.index() < self.nodes.len() {
            Ok(handle.id)
        } else {
            Err(DagError::InvalidReference {
                task_id: handle.index(),
                task_count: self.nodes.len(),
            })
        }
    }

    /// Execute one task if it is still pending.
    ///
    /// The pending work is moved out while it runs so the rest of the graph can be read through a
    /// [`ResultView`]. If argument resolution fails it is put back untouched. A panicking callable
    /// is caught and the task is marked as panicked; later attempts report the same panic.
    pub(crate) fn execute_node(&mut self, id: NodeId) -> DagResult<()> {
        let mut work = match std::mem::replace(&mut self.nodes[id.0].state, NodeState::Running) {
            NodeState::Pending(work) => work,
            NodeState::Panicked(panic_message) => {
                self.nodes[id.0].state = NodeState::Panicked(panic_message.clone());
                return Err(DagError::TaskPanicked {
                    task_id: id.0,
                    panic_message,
                });
            }
            NodeState::Running => return Err(DagError::ResultNotFound { task_id: id.0 }),
            executed @ NodeState::Executed(_) => {
                self.nodes[id.0].state = executed;
                return Ok(());
            }
        };

        #[cfg(feature = "tracing")]
        trace!(task_id = id.0, task_type = work.task_type(), "executing task");

        let view = ResultView::new(&self.nodes);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| work.execute(&view)));

        match outcome {
            Ok(Ok(result)) => {
                self.nodes[id.0].state = NodeState::Executed(result);
                Ok(())
            }
            Ok(Err(err)) => {
                #[cfg(feature = "tracing")]
                error!(task_id = id.0, %err, "failed to resolve task arguments");

                self.nodes[id.0].state = NodeState::Pending(work);
                Err(err)
            }
            Err(payload) => {
                let panic_message = if let Some(s) = payload.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };

                #[cfg(feature = "tracing")]
                error!(task_id = id.0, panic_message = %panic_message, "task panicked");

                self.nodes[id.0].state = NodeState::Panicked(panic_message.clone());
                Err(DagError::TaskPanicked {
                    task_id: id.0,
                    panic_message,
                })
            }
        }
    }
}

impl fmt::Debug for TaskGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let executed = self.nodes.iter().filter(|node| node.is_executed()).count();
        f.debug_struct("TaskGraph")
            .field("tasks", &self.nodes.len())
            .field("executed", &executed)
            .field(
                "edges",
                &self.edges.iter().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}
