//! Argument list trait and implementations.
//!
//! This module defines the TaskArgs trait that allows binding a task's arguments in various
//! forms (nothing, a single argument, or a tuple). It uses macro-generated implementations for
//! different tuple sizes.
//!
//! Besides resolving values, an argument list reports the placeholders it carries; those become
//! the dependency edges of the task being registered.

use crate::error::DagResult;
use crate::extract::BoundArg;
use crate::output::ResultView;
use crate::types::TaskHandle;

/// Positional argument list of a task.
///
/// Implemented for:
/// - `()`: the callable takes no arguments
/// - any single [`BoundArg`]: the callable takes one argument
/// - tuples of 1 to 8 [`BoundArg`]s: the callable takes one argument per element, in order
pub trait TaskArgs {
    /// Tuple of resolved values handed to the callable.
    type Resolved;

    /// Tasks whose results these arguments read, in argument order.
    fn dependencies(&self) -> Vec<TaskHandle>;

    /// Resolve every argument, failing on the first one that cannot be resolved.
    fn resolve(&self, results: &ResultView<'_, '_>) -> DagResult<Self::Resolved>;
}

// Implementation for unit (no arguments)
impl TaskArgs for () {
    type Resolved = ();

    fn dependencies(&self) -> Vec<TaskHandle> {
        Vec::new()
    }

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<()> {
        Ok(())
    }
}

// Implementation for a single bare argument
impl<T> TaskArgs for T
where
    T: BoundArg,
{
    type Resolved = (T::Value,);

    fn dependencies(&self) -> Vec<TaskHandle> {
        self.dependency().into_iter().collect()
    }

    fn resolve(&self, results: &ResultView<'_, '_>) -> DagResult<Self::Resolved> {
        Ok((BoundArg::resolve(self, results)?,))
    }
}

/// Macro to implement TaskArgs for different tuple sizes.
///
/// This macro exists because Rust lacks variadic generics - we need separate implementations
/// for each tuple size.
///
/// This allows mixing plain values and placeholders freely:
/// ```ignore
/// graph.add(|a: i32, b: i32, c: i32| a * b + c, (10, graph.future_result::<i32>(x)?, 1))
/// ```
macro_rules! impl_task_args {
    ($($T:ident),+) => {
        impl<$($T: BoundArg),+> TaskArgs for ($($T,)+) {
            type Resolved = ($($T::Value,)+);

            #[allow(non_snake_case)]
            fn dependencies(&self) -> Vec<TaskHandle> {
                let ($($T,)+) = self;
                [$($T.dependency(),)+].into_iter().flatten().collect()
            }

            #[allow(non_snake_case)]
            fn resolve(&self, results: &ResultView<'_, '_>) -> DagResult<Self::Resolved> {
                let ($($T,)+) = self;
                Ok(($(BoundArg::resolve($T, results)?,)+))
            }
        }
    };
}

// Generate TaskArgs implementations for tuples of size 1-8.
// Supporting up to 8 elements covers the vast majority of use cases.
impl_task_args!(T1);
impl_task_args!(T1, T2);
impl_task_args!(T1, T2, T3);
impl_task_args!(T1, T2, T3, T4);
impl_task_args!(T1, T2, T3, T4, T5);
impl_task_args!(T1, T2, T3, T4, T5, T6);
impl_task_args!(T1, T2, T3, T4, T5, T6, T7);
impl_task_args!(T1, T2, T3, T4, T5, T6, T7, T8);
