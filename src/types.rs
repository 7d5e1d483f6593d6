//! Core type definitions for task identity.
//!
//! This module defines the fundamental identifiers used throughout the graph:
//! the crate-private dense index and the opaque handle given to callers.

use std::fmt;

/// Dense, zero-based position of a task in registration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(crate) usize);

/// Opaque reference to a registered task.
///
/// A `TaskHandle` is minted only by [`crate::TaskGraph::add`]; there is no public constructor.
/// You can:
/// 1. Pass it to [`crate::TaskGraph::future_result`] to feed the task's result into a later task
/// 2. Use it with [`crate::TaskGraph::get_result`] to compute (if needed) and read the result
/// 3. Order tasks explicitly with [`crate::TaskGraph::add_dependency`]
///
/// Handles carry no type information: the expected result type is named at the point of use and
/// checked at runtime. Handles are cheap to copy and compare by index.
///
/// # Examples
///
/// ```
/// use lazydag::TaskGraph;
///
/// let mut graph = TaskGraph::new();
/// let answer = graph.add(|| 42, ()).unwrap();
///
/// assert_eq!(answer.index(), 0);
/// assert_eq!(graph.get_result::<i32>(answer).unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle {
    pub(crate) id: NodeId,
}

impl TaskHandle {
    pub(crate) fn new(id: NodeId) -> Self {
        Self { id }
    }

    /// Registration index of the task this handle refers to.
    pub fn index(&self) -> usize {
        self.id.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task #{}", self.id.0)
    }
}

// TaskHandle can be converted from &TaskHandle so lookups accept either form
impl From<&TaskHandle> for TaskHandle {
    fn from(handle: &TaskHandle) -> Self {
        *handle
    }
}
