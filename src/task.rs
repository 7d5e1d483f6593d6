//! Callable abstraction for task bodies.
//!
//! [`TaskFn`] is implemented for every `FnOnce` of up to 8 parameters, so anything callable can be
//! registered as a task: closures, fn items, fn pointers, and method paths whose receiver is
//! passed as the first argument.

/// A callable that can be invoked once with a tuple of already-resolved arguments.
///
/// You never implement this trait yourself; the blanket implementations cover every `FnOnce`.
/// The `Args` tuple is produced by [`crate::TaskArgs::resolve`] at execution time.
///
/// # Callable Forms
///
/// ```
/// use lazydag::TaskGraph;
///
/// struct Counter {
///     x: i32,
///     y: i32,
/// }
///
/// impl Counter {
///     fn sum(&self) -> i32 {
///         self.x + self.y
///     }
///
///     fn mul(&self, factor: i32) -> i32 {
///         (self.x + self.y) * factor
///     }
/// }
///
/// fn multiply(a: i32, b: i32) -> i32 {
///     a * b
/// }
///
/// let counter = Counter { x: 3, y: 7 };
/// let mut graph = TaskGraph::new();
///
/// // Closure
/// let closure = graph.add(|x: i32| x + 1, 10).unwrap();
/// // Fn item and fn pointer
/// let item = graph.add(multiply, (6, 7)).unwrap();
/// let ptr: fn(i32, i32) -> i32 = multiply;
/// let pointer = graph.add(ptr, (2, 3)).unwrap();
/// // Method paths, receiver first
/// let method = graph.add(Counter::sum, &counter).unwrap();
/// let method_args = graph.add(Counter::mul, (&counter, 2)).unwrap();
/// // Field access
/// let field = graph.add(|c: &Counter| c.x, &counter).unwrap();
///
/// assert_eq!(graph.get_result::<i32>(closure).unwrap(), 11);
/// assert_eq!(graph.get_result::<i32>(item).unwrap(), 42);
/// assert_eq!(graph.get_result::<i32>(pointer).unwrap(), 6);
/// assert_eq!(graph.get_result::<i32>(method).unwrap(), 10);
/// assert_eq!(graph.get_result::<i32>(method_args).unwrap(), 20);
/// assert_eq!(graph.get_result::<i32>(field).unwrap(), 3);
/// ```
pub trait TaskFn<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

impl<Func, R> TaskFn<()> for Func
where
    Func: FnOnce() -> R,
{
    type Output = R;

    fn call(self, _args: ()) -> R {
        self()
    }
}

/// Macro to implement TaskFn for callables of different arities.
///
/// Rust lacks variadic generics, so each arity needs its own implementation. The argument tuple
/// is destructured positionally and splatted into the call.
macro_rules! impl_task_fn {
    ($($T:ident),+) => {
        impl<Func, R, $($T),+> TaskFn<($($T,)+)> for Func
        where
            Func: FnOnce($($T),+) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn call(self, ($($T,)+): ($($T,)+)) -> R {
                self($($T),+)
            }
        }
    };
}

impl_task_fn!(A);
impl_task_fn!(A, B);
impl_task_fn!(A, B, C);
impl_task_fn!(A, B, C, D);
impl_task_fn!(A, B, C, D, E);
impl_task_fn!(A, B, C, D, E, F);
impl_task_fn!(A, B, C, D, E, F, G);
impl_task_fn!(A, B, C, D, E, F, G, H);
