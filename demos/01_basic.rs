//! # Getting Started: Your First Task Graph
//!
//! This example introduces the fundamentals of building and evaluating a task graph with
//! lazydag.
//!
//! ## What You'll Learn
//! - How to register tasks with their arguments
//! - How to feed one task's result into another with placeholders
//! - How results are computed lazily, on demand
//!
//! ## Key Concepts
//! - **Task**: A callable plus its bound arguments
//! - **TaskHandle**: An opaque reference to a registered task
//! - **FutureResult**: A placeholder for a result that has not been computed yet
//!
//! ## Running This Example
//! ```bash
//! cargo run --example 01_basic
//! ```
//!
//! ## Expected Output
//! ```text
//! Registered 4 tasks, nothing has run yet
//!
//! Computing value: 3
//! Computing value: 4
//! Sum: Computing 3 + 4
//! Square: Computing 7 * 7
//!
//! Result: 49
//! ```

use lazydag::{DagResult, TaskGraph};

// A source task: a plain function with no dependencies
fn value(v: i32) -> i32 {
    println!("Computing value: {v}");
    v
}

// A task with two inputs. Arguments arrive in the order they are bound.
fn add(label: &str, a: i32, b: i32) -> i32 {
    println!("{label}: Computing {a} + {b}");
    a + b
}

fn main() -> DagResult<()> {
    // Step 1: Create a new graph
    let mut graph = TaskGraph::new();

    // Step 2: Register source tasks
    //
    // add() returns a TaskHandle. Nothing executes yet.
    let x = graph.add(value, 3)?;
    let y = graph.add(value, 4)?;

    // Step 3: Register tasks that read earlier results
    //
    // future_result::<T>() creates a placeholder for another task's result, read as T.
    // Plain values and placeholders can be mixed freely in the argument tuple.
    let sum = graph.add(
        add,
        ("Sum", graph.future_result::<i32>(x)?, graph.future_result::<i32>(y)?),
    )?;
    let square = graph.add(
        |v: i32| {
            println!("Square: Computing {v} * {v}");
            v * v
        },
        graph.future_result::<i32>(sum)?,
    )?;

    println!("Registered {} tasks, nothing has run yet\n", graph.len());

    // Step 4: Ask for a result
    //
    // get_result() executes exactly the tasks `square` depends on, dependencies first.
    let result = graph.get_result::<i32>(square)?;
    println!("\nResult: {result}");

    // Intermediate results are cached and can be read again without re-running anything
    assert_eq!(graph.get_result::<i32>(x)?, 3);
    assert_eq!(graph.get_result::<i32>(y)?, 4);
    assert_eq!(graph.get_result::<i32>(sum)?, 7);

    Ok(())
}
