//! Error types for graph operations.
//!
//! Failures fall into two classes: cycle-class failures (a dependency loop, or a reference to a
//! task that does not exist) and type mismatches when a cached result is read with the wrong
//! type. A task whose callable panics is reported as well. Every failure aborts the operation that
//! triggered it and leaves every cached result intact.

use thiserror::Error;

/// Errors that can occur while building or evaluating a [`crate::TaskGraph`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DagError {
    /// Demand-driven evaluation reached a task that is already on the current traversal path.
    #[error(
        "dependency cycle detected at task #{task_id}: {}\n\
         \n\
         No task on the cycle was executed.",
        format_cycle(.cycle)
    )]
    CycleDetected {
        task_id: usize,
        /// Task indices along the cycle; the first and last entries are the same task.
        cycle: Vec<usize>,
    },

    /// A handle or placeholder refers to a task index the graph has not issued.
    #[error("task #{task_id} does not exist (only {task_count} tasks are registered)")]
    InvalidReference { task_id: usize, task_count: usize },

    /// A cached result was read with a type other than the one the task produced.
    #[error("task #{task_id} produced `{found}`, but it was read as `{expected}`")]
    TypeMismatch {
        task_id: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// The task's callable panicked. The callable is consumed, so the task can never produce a
    /// result.
    #[error(
        "task #{task_id} panicked during execution: {panic_message}\n\
         \n\
         Tasks that depend on it cannot be evaluated."
    )]
    TaskPanicked {
        task_id: usize,
        panic_message: String,
    },

    /// A result was read before its task executed.
    #[error("task #{task_id} has not produced a result yet")]
    ResultNotFound { task_id: usize },

    /// The callable returns `()`, so there would be nothing to cache.
    #[error("tasks must produce a value, but the callable returns `{output}`")]
    UnitOutput { output: &'static str },
}

impl DagError {
    /// True for cycle-class failures: a detected cycle or a reference to a missing task.
    pub fn is_cycle(&self) -> bool {
        matches!(
            self,
            DagError::CycleDetected { .. } | DagError::InvalidReference { .. }
        )
    }

    /// Index of the task the failure is attributed to, if any.
    pub fn task_id(&self) -> Option<usize> {
        match self {
            DagError::CycleDetected { task_id, .. }
            | DagError::InvalidReference { task_id, .. }
            | DagError::TypeMismatch { task_id, .. }
            | DagError::TaskPanicked { task_id, .. }
            | DagError::ResultNotFound { task_id } => Some(*task_id),
            DagError::UnitOutput { .. } => None,
        }
    }
}

fn format_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type for graph operations
pub type DagResult<T> = Result<T, DagError>;
