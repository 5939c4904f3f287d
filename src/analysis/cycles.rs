//! Cycle detection
//!
//! Depth-first search over the forward adjacency with an explicit frame
//! stack, so deep dependency chains cannot overflow the call stack. A
//! cycle is recorded when traversal reaches a node already on the current
//! path: the reported sequence is the path suffix from that node, closed
//! by re-appending it.
//!
//! Known limitation: cycles sharing nodes can be reported more than once
//! under different starting points; reports are raw, not canonicalized.
//! Cycles are informational data and never abort the analysis.

use std::collections::HashSet;

use crate::domain::{TaskGraph, TaskId};

struct Frame {
    id: TaskId,
    neighbors: Vec<TaskId>,
    next: usize,
}

/// Finds cycles in the forward adjacency. O(V+E).
pub fn detect_cycles(graph: &TaskGraph) -> Vec<Vec<TaskId>> {
    let mut visited: HashSet<TaskId> = HashSet::new();
    let mut cycles: Vec<Vec<TaskId>> = Vec::new();

    for root in graph.task_ids() {
        if visited.contains(root) {
            continue;
        }

        let mut on_stack: HashSet<TaskId> = HashSet::new();
        let mut path: Vec<TaskId> = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();

        visited.insert(root.clone());
        on_stack.insert(root.clone());
        path.push(root.clone());
        frames.push(Frame {
            id: root.clone(),
            neighbors: graph.dependents(root),
            next: 0,
        });

        while let Some(frame) = frames.last_mut() {
            if frame.next < frame.neighbors.len() {
                let neighbor = frame.neighbors[frame.next].clone();
                frame.next += 1;

                if on_stack.contains(&neighbor) {
                    if let Some(start) = path.iter().position(|id| *id == neighbor) {
                        let mut cycle = path[start..].to_vec();
                        cycle.push(neighbor);
                        cycles.push(cycle);
                    }
                } else if !visited.contains(&neighbor) {
                    visited.insert(neighbor.clone());
                    on_stack.insert(neighbor.clone());
                    path.push(neighbor.clone());
                    frames.push(Frame {
                        neighbors: graph.dependents(&neighbor),
                        id: neighbor,
                        next: 0,
                    });
                }
            } else {
                on_stack.remove(&frame.id);
                path.pop();
                frames.pop();
            }
        }
    }

    if !cycles.is_empty() {
        tracing::debug!(cycles = cycles.len(), "dependency cycles detected");
    }

    cycles
}
