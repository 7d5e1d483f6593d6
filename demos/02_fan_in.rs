//! # Fan-in Pattern (m → 1)
//!
//! Multiple tasks produce values consumed by a single downstream task, and one task's result
//! is shared by several consumers.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example 02_fan_in
//! ```

use lazydag::{DagResult, TaskGraph};

#[derive(Debug, Clone)]
struct User {
    name: String,
    age: u32,
    active: bool,
}

fn main() -> DagResult<()> {
    let mut graph = TaskGraph::new();

    // Three independent sources of different types
    let name = graph.add(|| "Alice".to_string(), ())?;
    let age = graph.add(|| 30_u32, ())?;
    let active = graph.add(|| true, ())?;

    // Fan-in: one task reads all three
    let user = graph.add(
        |name: String, age: u32, active: bool| User { name, age, active },
        (
            graph.future_result::<String>(name)?,
            graph.future_result::<u32>(age)?,
            graph.future_result::<bool>(active)?,
        ),
    )?;

    // Fan-out: several consumers read the same user
    let greeting = graph.add(
        |u: User| format!("Hello, {}!", u.name),
        graph.future_result::<User>(user)?,
    )?;
    let status = graph.add(
        |u: User| {
            if u.active {
                format!("{} is active", u.name)
            } else {
                format!("{} is inactive", u.name)
            }
        },
        graph.future_result::<User>(user)?,
    )?;
    let next_birthday = graph.add(
        |u: User| u.age + 1,
        graph.future_result::<User>(user)?,
    )?;

    // Run everything in registration order
    graph.execute_all()?;

    println!("{}", graph.get_result::<String>(greeting)?);
    println!("{}", graph.get_result::<String>(status)?);
    println!("Next birthday: {}", graph.get_result::<u32>(next_birthday)?);
    println!("{:?}", graph.get_result_ref::<User>(user)?);

    Ok(())
}
