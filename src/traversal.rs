//! Demand-driven evaluation.
//!
//! [`TaskGraph::get_result`] executes only the dependency closure of the requested task. The
//! closure is walked depth-first with three colors:
//!
//! - **White**: not visited yet
//! - **Gray**: on the current traversal path
//! - **Black**: finished; the task and everything it depends on have executed
//!
//! Dependencies are visited in recorded order and a task executes when it turns black
//! (post-order), so every dependency has executed before its dependents. Reaching a gray task
//! means the path loops back onto itself: the walk aborts with [`DagError::CycleDetected`]
//! before any task on the loop has executed. Tasks that turned black before the cycle was found
//! keep their cached results.
//!
//! Executed tasks are walked like any other and only their execution is skipped, so an ordering
//! edge added after a task ran still closes a cycle through it.
//!
//! The walk uses an explicit stack, so arbitrarily deep chains do not exhaust the call stack.
//! Colors are allocated fresh for every call.

#[cfg(feature = "tracing")]
use tracing::{debug, error, trace};

use crate::error::{DagError, DagResult};
use crate::runner::TaskGraph;
use crate::types::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// One entry of the explicit DFS stack: a gray task and the next dependency to look at.
struct Frame {
    id: NodeId,
    next_dependency: usize,
}

impl<'g> TaskGraph<'g> {
    /// Execute `target` after its whole dependency closure.
    pub(crate) fn demand(&mut self, target: NodeId) -> DagResult<()> {
        if self.nodes[target.0].is_executed() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        debug!(task_id = target.0, "evaluating task on demand");

        let mut colors = vec![Color::White; self.nodes.len()];
        let mut stack = vec![Frame {
            id: target,
            next_dependency: 0,
        }];
        colors[target.0] = Color::Gray;

        while let Some(frame) = stack.last_mut() {
            let id = frame.id;

            let Some(&dependency) = self.edges[id.0].get(frame.next_dependency) else {
                // All dependencies are black: run the task itself unless it is cached.
                stack.pop();
                self.execute_node(id)?;
                colors[id.0] = Color::Black;
                continue;
            };
            frame.next_dependency += 1;

            match colors[dependency.0] {
                Color::White => {
                    #[cfg(feature = "tracing")]
                    trace!(task_id = id.0, dependency_id = dependency.0, "descending");

                    colors[dependency.0] = Color::Gray;
                    stack.push(Frame {
                        id: dependency,
                        next_dependency: 0,
                    });
                }
                Color::Gray => {
                    let cycle = cycle_path(&stack, dependency);

                    #[cfg(feature = "tracing")]
                    error!(task_id = dependency.0, ?cycle, "dependency cycle detected");

                    return Err(DagError::CycleDetected {
                        task_id: dependency.0,
                        cycle,
                    });
                }
                Color::Black => {}
            }
        }

        Ok(())
    }
}

/// Indices from the first occurrence of `repeated` on the stack to the top, closed by `repeated`.
fn cycle_path(stack: &[Frame], repeated: NodeId) -> Vec<usize> {
    stack
        .iter()
        .skip_while(|frame| frame.id != repeated)
        .map(|frame| frame.id.0)
        .chain(std::iter::once(repeated.0))
        .collect()
}
