//! # Shared State
//!
//! Tasks can read data that outlives the graph through plain references, and share mutable
//! state through `Rc<RefCell<T>>`. A result that is itself a shared pointer aliases the
//! original value: mutating through it is visible everywhere.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example shared_state
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use lazydag::{DagError, DagResult, TaskGraph};

struct Counter {
    x: i32,
    y: i32,
}

impl Counter {
    fn sum(&self) -> i32 {
        self.x + self.y
    }
}

fn main() -> DagResult<()> {
    let counter = Counter { x: 3, y: 7 };
    let readings = Rc::new(RefCell::new(vec![1, 2, 3]));

    let mut graph = TaskGraph::new();

    // Method path with a borrowed receiver
    let sum = graph.add(Counter::sum, &counter)?;

    // A task returning an alias to external state
    let alias = graph.add(|v: Rc<RefCell<Vec<i32>>>| v, Rc::clone(&readings))?;

    println!("sum = {}", graph.get_result::<i32>(sum)?);

    graph.get_result::<Rc<RefCell<Vec<i32>>>>(alias)?.borrow_mut()[1] = 99;
    println!("readings after mutation through the result: {:?}", readings.borrow());

    // Reading with the wrong type is an error, and the cached value survives it
    match graph.get_result::<i64>(sum) {
        Err(err @ DagError::TypeMismatch { .. }) => println!("expected failure: {err}"),
        other => println!("unexpected: {other:?}"),
    }
    println!("sum is still {}", graph.get_result::<i32>(sum)?);

    Ok(())
}
