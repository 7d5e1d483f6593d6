//! Placeholders for results that have not been computed yet.
//!
//! A [`FutureResult<T>`] stands in for "the result of task X, read as `T`". It is obtained from
//! [`crate::TaskGraph::future_result`] and passed as an argument to a later task. Creating one
//! does not touch the graph: the dependency edge is recorded by [`crate::TaskGraph::add`] once the
//! consuming task has an index. The value is read only when the consuming task executes, and the
//! type is checked at that moment.

use std::fmt;
use std::marker::PhantomData;

use crate::error::DagResult;
use crate::extract::BoundArg;
use crate::output::ResultView;
use crate::types::TaskHandle;

/// Placeholder for the eventual result of another task.
///
/// # Examples
///
/// ```
/// use lazydag::TaskGraph;
///
/// let mut graph = TaskGraph::new();
/// let a = graph.add(|| 3, ()).unwrap();
/// let b = graph.add(|| 4, ()).unwrap();
/// let sum = graph
///     .add(
///         |x: i32, y: i32| x + y,
///         (graph.future_result::<i32>(a).unwrap(), graph.future_result::<i32>(b).unwrap()),
///     )
///     .unwrap();
///
/// assert_eq!(graph.get_result::<i32>(sum).unwrap(), 7);
/// ```
pub struct FutureResult<T> {
    handle: TaskHandle,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> FutureResult<T> {
    pub(crate) fn new(handle: TaskHandle) -> Self {
        Self {
            handle,
            _phantom: PhantomData,
        }
    }

    /// The task this placeholder reads from.
    pub fn handle(&self) -> TaskHandle {
        self.handle
    }

    /// Convert the value on its way into the consuming task.
    ///
    /// The conversion runs after the stored value has been read as `T`, so the type check still
    /// applies to `T`.
    ///
    /// ```
    /// use lazydag::TaskGraph;
    ///
    /// fn square(x: f32) -> f32 {
    ///     x * x
    /// }
    ///
    /// let mut graph = TaskGraph::new();
    /// let seven = graph.add(|| 7, ()).unwrap();
    /// let squared = graph
    ///     .add(square, graph.future_result::<i32>(seven).unwrap().map(|v| v as f32))
    ///     .unwrap();
    ///
    /// assert_eq!(graph.get_result::<f32>(squared).unwrap(), 49.0);
    /// ```
    pub fn map<U, F>(self, convert: F) -> MapResult<T, F>
    where
        F: Fn(T) -> U,
    {
        MapResult {
            source: self,
            convert,
        }
    }
}

impl<T> Clone for FutureResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FutureResult<T> {}

impl<T> fmt::Debug for FutureResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureResult")
            .field("handle", &self.handle)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Clone + 'static> BoundArg for FutureResult<T> {
    type Value = T;

    fn dependency(&self) -> Option<TaskHandle> {
        Some(self.handle)
    }

    fn resolve(&self, results: &ResultView<'_, '_>) -> DagResult<T> {
        results.read::<T>(self.handle)
    }
}

/// A [`FutureResult`] followed by a conversion, built with [`FutureResult::map`].
pub struct MapResult<T, F> {
    source: FutureResult<T>,
    convert: F,
}

impl<T, U, F> BoundArg for MapResult<T, F>
where
    T: Clone + 'static,
    F: Fn(T) -> U,
{
    type Value = U;

    fn dependency(&self) -> Option<TaskHandle> {
        self.source.dependency()
    }

    fn resolve(&self, results: &ResultView<'_, '_>) -> DagResult<U> {
        self.source.resolve(results).map(&self.convert)
    }
}
