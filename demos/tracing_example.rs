//! # Tracing Example
//!
//! This example demonstrates how to use the optional tracing feature to gain visibility into
//! graph registration and evaluation.
//!
//! ## Running This Example
//!
//! ```bash
//! # With default log level (info)
//! cargo run --example tracing_example --features tracing
//!
//! # With debug level (shows more details)
//! RUST_LOG=lazydag=debug cargo run --example tracing_example --features tracing
//!
//! # With trace level (shows all execution details)
//! RUST_LOG=lazydag=trace cargo run --example tracing_example --features tracing
//! ```
//!
//! ## Log Levels
//!
//! - **INFO**: Run-all start/completion
//! - **DEBUG**: Task additions, ordering edges, demand-driven evaluation
//! - **TRACE**: Individual task execution and traversal steps
//! - **ERROR**: Failed argument resolution, cycle detection
//!

use lazydag::TaskGraph;

use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // Initialize tracing subscriber with environment filter
    // Use RUST_LOG environment variable to control log level
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lazydag=info")),
        )
        .init();

    println!("=== Task Graph Evaluation with Tracing ===\n");
    println!("Run with RUST_LOG=lazydag=debug or RUST_LOG=lazydag=trace for more details\n");

    // Example 1: Diamond pattern, run everything
    println!("Example 1: Diamond Pattern");
    println!("---------------------------");
    {
        let mut graph = TaskGraph::new();

        let source = graph.add(|| 10, ()).unwrap();
        let dep = graph.future_result::<i32>(source).unwrap();
        let left = graph.add(|a: i32, b: i32| a + b, (dep, dep)).unwrap();
        let right = graph.add(|a: i32, b: i32| a * b, (dep, dep)).unwrap();
        let result = graph
            .add(
                |a: i32, b: i32| a + b,
                (
                    graph.future_result::<i32>(left).unwrap(),
                    graph.future_result::<i32>(right).unwrap(),
                ),
            )
            .unwrap();

        graph.execute_all().unwrap();

        println!("\nResult: {}", graph.get_result::<i32>(result).unwrap());
        println!("(Expected: 10+10 = 20, 10*10 = 100, 20+100 = 120)\n");
    }

    // Example 2: Linear chain, on demand
    println!("\nExample 2: Linear Chain (On Demand)");
    println!("------------------------------------");
    {
        let mut graph = TaskGraph::new();

        let a = graph.add(|| 1, ()).unwrap();
        let b = graph
            .add(|x: i32| x + x, graph.future_result::<i32>(a).unwrap())
            .unwrap();
        let c = graph
            .add(|x: i32| x * x, graph.future_result::<i32>(b).unwrap())
            .unwrap();
        let d = graph
            .add(|x: i32| x + x, graph.future_result::<i32>(c).unwrap())
            .unwrap();

        println!("\nResult: {}", graph.get_result::<i32>(d).unwrap());
        println!("(Expected: 1+1 = 2, 2*2 = 4, 4+4 = 8)\n");
    }

    // Example 3: A cycle closed with an ordering edge
    println!("\nExample 3: Cycle Detection");
    println!("---------------------------");
    {
        let mut graph = TaskGraph::new();

        let a = graph.add(|| 1, ()).unwrap();
        let b = graph
            .add(|x: i32| x + 1, graph.future_result::<i32>(a).unwrap())
            .unwrap();
        graph.add_dependency(a, b).unwrap();

        match graph.get_result::<i32>(b) {
            Ok(value) => println!("\nUnexpected result: {value}"),
            Err(err) => println!("\nError: {err}"),
        }
    }

    println!("\n=== Tracing Example Complete ===");
    println!("\nTry running with different log levels:");
    println!("  RUST_LOG=lazydag=info  - Run-all start and completion");
    println!("  RUST_LOG=lazydag=debug - Task additions and on-demand evaluation");
    println!("  RUST_LOG=lazydag=trace - All execution details");
}
