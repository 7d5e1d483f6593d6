//! Argument resolution for bound task arguments.
//!
//! Every positional argument handed to [`crate::TaskGraph::add`] implements [`BoundArg`]. At
//! execution time each argument is resolved into the value the callable receives:
//!
//! - Plain values (primitives, `String`, collections) resolve to a clone of themselves
//! - Shared references `&T` resolve to the same reference, so tasks can read external state
//! - `Rc<T>` and `Arc<T>` resolve to a new pointer to the same allocation; wrap state in
//!   `Rc<RefCell<T>>` when a task must mutate something the caller observes afterwards
//! - [`Bound<T>`] resolves any other `Clone` type
//! - [`crate::FutureResult<T>`] reads the cached result of another task
//!
//! Resolution borrows the argument, so a failed resolution (for example a type mismatch on a
//! placeholder) leaves the task intact and retryable.
//!
//! # Why macros?
//!
//! There is no blanket implementation over all `T: Clone`: it would collide with the placeholder
//! implementation. Instead the common standard types are listed explicitly, one impl per type,
//! and [`Bound<T>`] covers everything else.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::error::DagResult;
use crate::output::ResultView;
use crate::types::TaskHandle;

/// One positional argument of a task.
///
/// # Examples
///
/// ```
/// use lazydag::{Bound, TaskGraph};
///
/// #[derive(Clone)]
/// struct Config {
///     scale: i32,
/// }
///
/// let mut graph = TaskGraph::new();
/// let base = graph.add(|| 7, ()).unwrap();
/// let scaled = graph
///     .add(
///         |config: Config, label: String, value: i32| format!("{label}: {}", value * config.scale),
///         (
///             Bound(Config { scale: 6 }),
///             "answer".to_string(),
///             graph.future_result::<i32>(base).unwrap(),
///         ),
///     )
///     .unwrap();
///
/// assert_eq!(graph.get_result::<String>(scaled).unwrap(), "answer: 42");
/// ```
pub trait BoundArg {
    /// The value the callable receives for this argument.
    type Value;

    /// The task whose result this argument reads, if any.
    fn dependency(&self) -> Option<TaskHandle> {
        None
    }

    /// Produce the argument value, reading cached results through `results` when needed.
    fn resolve(&self, results: &ResultView<'_, '_>) -> DagResult<Self::Value>;
}

/// Wrapper that binds any `Clone` value as a task argument.
///
/// Use it for your own types; the callable receives a clone of the wrapped value each time the
/// task executes (which is at most once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bound<T>(pub T);

impl<T: Clone> BoundArg for Bound<T> {
    type Value = T;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<T> {
        Ok(self.0.clone())
    }
}

// Implementations for common primitive and standard library types.
// These allow values to be passed directly without wrapping in Bound.
macro_rules! impl_bound_by_value {
    ($($t:ty),+) => {
        $(
            impl BoundArg for $t {
                type Value = $t;

                fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<$t> {
                    Ok(self.clone())
                }
            }
        )+
    };
}

impl_bound_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String
);

// Shared references alias the caller's data for the lifetime of the graph
impl<'r, T: ?Sized> BoundArg for &'r T {
    type Value = &'r T;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<&'r T> {
        Ok(*self)
    }
}

// Pointer types clone the pointer, never the pointee
impl<T: ?Sized> BoundArg for Rc<T> {
    type Value = Rc<T>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<Rc<T>> {
        Ok(Rc::clone(self))
    }
}

impl<T: ?Sized> BoundArg for Arc<T> {
    type Value = Arc<T>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<Arc<T>> {
        Ok(Arc::clone(self))
    }
}

impl<T: Clone> BoundArg for Option<T> {
    type Value = Option<T>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<Option<T>> {
        Ok(self.clone())
    }
}

impl<T: Clone, E: Clone> BoundArg for Result<T, E> {
    type Value = Result<T, E>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<Result<T, E>> {
        Ok(self.clone())
    }
}

impl<T: Clone> BoundArg for Vec<T> {
    type Value = Vec<T>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<Vec<T>> {
        Ok(self.clone())
    }
}

impl<K: Clone, V: Clone, S: Clone> BoundArg for HashMap<K, V, S> {
    type Value = HashMap<K, V, S>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<HashMap<K, V, S>> {
        Ok(self.clone())
    }
}

impl<K: Clone, V: Clone> BoundArg for BTreeMap<K, V> {
    type Value = BTreeMap<K, V>;

    fn resolve(&self, _results: &ResultView<'_, '_>) -> DagResult<BTreeMap<K, V>> {
        Ok(self.clone())
    }
}
