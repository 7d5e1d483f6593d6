//! Internal node types for graph execution.
//!
//! Provides type erasure to store tasks with different callables and argument lists in a single
//! collection. The public API names result types at the point of use; erasure of the pending work
//! is purely an internal implementation detail.
//!
//! - **TypedNode\<F, A\>**: Stores a callable and its bound arguments with full type information
//! - **ExecutableNode**: Trait for executing type-erased pending work
//! - **TaskNode**: A slot in the graph, moving from pending to executed exactly once

use std::any::{type_name, TypeId};
use std::fmt;

use crate::deps::TaskArgs;
use crate::error::{DagError, DagResult};
use crate::output::{ResultBox, ResultView};
use crate::task::TaskFn;
use crate::types::NodeId;

/// Internal trait for executing heterogeneous tasks.
///
/// This is the ONLY place where the callable's type is erased: [`TypedNode`] knows the concrete
/// argument and output types, resolves the arguments and boxes the output.
pub(crate) trait ExecutableNode {
    /// Resolve the arguments and invoke the callable.
    ///
    /// If resolution fails the callable is not invoked and the node can be executed again later.
    fn execute(&mut self, results: &ResultView<'_, '_>) -> DagResult<ResultBox>;

    /// Name of the callable's type, for diagnostics.
    fn task_type(&self) -> &'static str;
}

/// Fully-typed storage for a single task.
///
/// # Ownership Model
///
/// The callable is held in an `Option` and taken on the one successful execution, so `FnOnce`
/// callables are supported. Arguments are resolved by reference before the callable is taken.
pub(crate) struct TypedNode<F, A> {
    pub(crate) id: NodeId,
    task: Option<F>,
    args: A,
}

impl<F, A> TypedNode<F, A>
where
    A: TaskArgs,
    F: TaskFn<A::Resolved>,
    F::Output: 'static,
{
    pub(crate) fn new(id: NodeId, task: F, args: A) -> Self {
        Self {
            id,
            task: Some(task),
            args,
        }
    }

    /// Tasks must produce a value; `()` would leave nothing to cache.
    pub(crate) fn check_output() -> DagResult<()> {
        if TypeId::of::<F::Output>() == TypeId::of::<()>() {
            return Err(DagError::UnitOutput {
                output: type_name::<F::Output>(),
            });
        }
        Ok(())
    }
}

impl<F, A> ExecutableNode for TypedNode<F, A>
where
    A: TaskArgs,
    F: TaskFn<A::Resolved>,
    F::Output: 'static,
{
    fn execute(&mut self, results: &ResultView<'_, '_>) -> DagResult<ResultBox> {
        let input = self.args.resolve(results)?;
        let task = self
            .task
            .take()
            .ok_or(DagError::ResultNotFound { task_id: self.id.0 })?;

        Ok(ResultBox::new(task.call(input)))
    }

    fn task_type(&self) -> &'static str {
        type_name::<F>()
    }
}

/// Execution state of one task.
pub(crate) enum NodeState<'g> {
    /// Registered, not executed
    Pending(Box<dyn ExecutableNode + 'g>),
    /// Arguments are being resolved or the callable is running
    Running,
    /// Executed; the result is cached forever
    Executed(ResultBox),
    /// The callable panicked with this message and was consumed
    Panicked(String),
}

/// A task slot in the graph, exclusively owned by the graph's task list.
pub(crate) struct TaskNode<'g> {
    pub(crate) state: NodeState<'g>,
}

impl<'g> TaskNode<'g> {
    pub(crate) fn new(work: Box<dyn ExecutableNode + 'g>) -> Self {
        Self {
            state: NodeState::Pending(work),
        }
    }

    pub(crate) fn is_executed(&self) -> bool {
        matches!(self.state, NodeState::Executed(_))
    }

    pub(crate) fn result(&self) -> Option<&ResultBox> {
        match &self.state {
            NodeState::Executed(result) => Some(result),
            _ => None,
        }
    }
}

impl fmt::Debug for TaskNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            NodeState::Pending(work) => f.debug_tuple("Pending").field(&work.task_type()).finish(),
            NodeState::Running => f.write_str("Running"),
            NodeState::Executed(result) => f.debug_tuple("Executed").field(result).finish(),
            NodeState::Panicked(message) => f.debug_tuple("Panicked").field(message).finish(),
        }
    }
}
