//! Type-erased result storage.
//!
//! Tasks produce values of arbitrary types. Each value is stored in a [`ResultBox`] next to the
//! name of its concrete type, and every read names the type it expects. A mismatch is reported as
//! [`DagError::TypeMismatch`]; there is no unchecked reinterpretation anywhere.

use std::any::{type_name, Any};
use std::fmt;

use crate::error::{DagError, DagResult};
use crate::node::TaskNode;
use crate::types::TaskHandle;

/// Write-once container for a single value of erased type.
///
/// A box is filled exactly once, when its task executes, and is never replaced afterwards.
/// Reads hand out references (or clones, through [`crate::TaskGraph::get_result`]) of the
/// stored value.
///
/// # Examples
///
/// ```
/// use lazydag::ResultBox;
///
/// let boxed = ResultBox::new(49_i32);
///
/// assert!(boxed.is::<i32>());
/// assert_eq!(boxed.get::<i32>(), Some(&49));
/// assert_eq!(boxed.get::<f32>(), None);
/// assert_eq!(boxed.type_name(), "i32");
/// ```
pub struct ResultBox {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl ResultBox {
    /// Box a value, remembering its concrete type.
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the stored type, as reported by [`std::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True if the stored value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the stored value as a `T`, or `None` if it has a different type.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for ResultBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultBox")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Read-only view of every cached result in a graph.
///
/// A view is handed to [`crate::BoundArg::resolve`] while a task's arguments are being resolved,
/// so placeholders can read the results of the tasks they depend on.
pub struct ResultView<'a, 'g> {
    nodes: &'a [TaskNode<'g>],
}

impl<'a, 'g> ResultView<'a, 'g> {
    pub(crate) fn new(nodes: &'a [TaskNode<'g>]) -> Self {
        Self { nodes }
    }

    /// Borrow the cached result of `handle` as a `T`.
    ///
    /// # Errors
    ///
    /// - [`DagError::InvalidReference`] if the handle's index is out of range
    /// - [`DagError::ResultNotFound`] if the task has not executed yet
    /// - [`DagError::TypeMismatch`] if the task produced a different type
    pub fn get<T: 'static>(&self, handle: TaskHandle) -> DagResult<&'a T> {
        let task_id = handle.index();
        let node = self.nodes.get(task_id).ok_or(DagError::InvalidReference {
            task_id,
            task_count: self.nodes.len(),
        })?;
        let boxed = node
            .result()
            .ok_or(DagError::ResultNotFound { task_id })?;

        boxed.get::<T>().ok_or_else(|| DagError::TypeMismatch {
            task_id,
            expected: type_name::<T>(),
            found: boxed.type_name(),
        })
    }

    /// Clone the cached result of `handle` out as a `T`.
    ///
    /// Fails exactly like [`ResultView::get`].
    pub fn read<T: Clone + 'static>(&self, handle: TaskHandle) -> DagResult<T> {
        self.get::<T>(handle).cloned()
    }
}
