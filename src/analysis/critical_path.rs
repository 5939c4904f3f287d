//! Weighted critical path
//!
//! Longest path over the acyclic portion of the graph, Kahn style:
//! remaining in-degrees are tracked per node, the worklist is seeded with
//! in-degree-zero nodes in canonical order, and popping a node relaxes
//! its forward neighbors with `distance[node] + weight(node)`. Nodes on a
//! cycle never reach in-degree zero, are never popped, and therefore
//! never enter the distance map; the pass still terminates in O(V+E).
//!
//! `distance[n]` excludes `n`'s own weight: it is the heaviest chain of
//! prerequisites strictly before `n`. The path's `total_weight` includes
//! every node on it, so on an acyclic graph it equals the maximal
//! distance plus the terminus weight.
//!
//! Reconstruction walks backward from the maximal-distance node, at each
//! step taking the first predecessor `p` (in canonical task-list order)
//! with an edge `p -> current` and `distance[p] + weight(p)` within
//! [`WEIGHT_TOLERANCE`] of `distance[current]`. Both that scan and the
//! terminus selection break ties by canonical order, which makes the
//! whole calculation deterministic for a given snapshot.

use std::collections::{HashMap, VecDeque};

use super::config::WEIGHT_TOLERANCE;
use crate::domain::{TaskGraph, TaskId};

/// The heaviest prerequisite chain through the acyclic subgraph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriticalPath {
    /// Path node ids, prerequisite first
    pub nodes: Vec<TaskId>,

    /// Sum of effective weights of every node on the path
    pub total_weight: f64,

    /// Longest-path distance per acyclic node, excluding the node's own
    /// weight
    distances: HashMap<TaskId, f64>,
}

impl CriticalPath {
    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no path was found
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if the task lies on the path
    pub fn contains(&self, id: &TaskId) -> bool {
        self.nodes.contains(id)
    }

    /// Longest-path distance for an acyclic node; `None` for cyclic or
    /// unknown nodes
    pub fn distance(&self, id: &TaskId) -> Option<f64> {
        self.distances.get(id).copied()
    }

    /// The full distance map (cyclic nodes absent)
    pub fn distances(&self) -> &HashMap<TaskId, f64> {
        &self.distances
    }
}

fn weight(graph: &TaskGraph, id: &TaskId, default_weight: f64) -> f64 {
    graph
        .task(id)
        .map(|t| t.effective_weight(default_weight))
        .unwrap_or(default_weight)
}

/// Computes longest-path distances and reconstructs the critical path
pub(crate) fn longest_paths(graph: &TaskGraph, default_weight: f64) -> CriticalPath {
    let mut in_degree: HashMap<TaskId, usize> = graph
        .task_ids()
        .map(|id| (id.clone(), graph.prerequisites(id).len()))
        .collect();

    let mut worklist: VecDeque<TaskId> = graph
        .task_ids()
        .filter(|id| in_degree.get(*id) == Some(&0))
        .cloned()
        .collect();

    // Relaxed-but-not-yet-popped values; only popped nodes graduate into
    // the public distance map, which is what keeps cyclic nodes out.
    let mut pending: HashMap<TaskId, f64> = HashMap::new();
    let mut distances: HashMap<TaskId, f64> = HashMap::new();

    while let Some(current) = worklist.pop_front() {
        let current_distance = pending.get(&current).copied().unwrap_or(0.0);
        distances.insert(current.clone(), current_distance);

        let current_weight = weight(graph, &current, default_weight);
        for neighbor in graph.dependents(&current) {
            let candidate = current_distance + current_weight;
            let slot = pending.entry(neighbor.clone()).or_insert(0.0);
            if candidate > *slot {
                *slot = candidate;
            }

            if let Some(degree) = in_degree.get_mut(&neighbor) {
                *degree -= 1;
                if *degree == 0 {
                    worklist.push_back(neighbor);
                }
            }
        }
    }

    let Some(terminus) = max_distance_node(graph, &distances) else {
        return CriticalPath::default();
    };

    let nodes = backtrack(graph, &distances, terminus, default_weight);
    let total_weight = nodes
        .iter()
        .map(|id| weight(graph, id, default_weight))
        .sum();

    CriticalPath {
        nodes,
        total_weight,
        distances,
    }
}

/// Picks the node with maximal distance; ties go to the earliest node in
/// canonical order.
fn max_distance_node(graph: &TaskGraph, distances: &HashMap<TaskId, f64>) -> Option<TaskId> {
    let mut best: Option<(TaskId, f64)> = None;
    for id in graph.task_ids() {
        let Some(&distance) = distances.get(id) else {
            continue;
        };
        match &best {
            Some((_, best_distance)) if distance <= *best_distance => {}
            _ => best = Some((id.clone(), distance)),
        }
    }
    best.map(|(id, _)| id)
}

fn backtrack(
    graph: &TaskGraph,
    distances: &HashMap<TaskId, f64>,
    terminus: TaskId,
    default_weight: f64,
) -> Vec<TaskId> {
    let mut current_distance = distances.get(&terminus).copied().unwrap_or(0.0);
    let mut current = terminus;
    let mut reversed = vec![current.clone()];

    while current_distance > 0.0 {
        let predecessor = graph.task_ids().find(|p| {
            *p != &current
                && graph.has_edge(p, &current)
                && distances.get(*p).is_some_and(|&d| {
                    (d + weight(graph, p, default_weight) - current_distance).abs()
                        < WEIGHT_TOLERANCE
                })
        });

        match predecessor {
            Some(p) => {
                current = p.clone();
                current_distance = distances.get(p).copied().unwrap_or(0.0);
                reversed.push(current.clone());
            }
            None => break,
        }
    }

    reversed.reverse();
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyEdge, TaskRecord};

    fn id(label: u32) -> TaskId {
        TaskId::new(format!("#{label}"))
    }

    fn task(label: u32, weight: f64) -> TaskRecord {
        TaskRecord::new(format!("#{label}"), format!("Task {label}")).with_weight(weight)
    }

    fn edges(pairs: &[(u32, u32)]) -> Vec<DependencyEdge> {
        pairs
            .iter()
            .map(|(from, to)| DependencyEdge::new(format!("#{from}"), format!("#{to}")))
            .collect()
    }

    #[test]
    fn fork_picks_heavier_branch_terminus() {
        // #1(5) -> #2(3), #1(5) -> #3(2): both termini sit at distance 5;
        // the tie goes to #2, the earlier task in canonical order.
        let tasks = vec![task(1, 5.0), task(2, 3.0), task(3, 2.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (1, 3)]));
        let path = longest_paths(&graph, 0.0);

        assert_eq!(path.nodes, vec![id(1), id(2)]);
        assert_eq!(path.total_weight, 8.0);
        assert_eq!(path.distance(&id(1)), Some(0.0));
        assert_eq!(path.distance(&id(2)), Some(5.0));
        assert_eq!(path.distance(&id(3)), Some(5.0));
    }

    #[test]
    fn chain_accumulates_weights() {
        let tasks = vec![task(1, 2.0), task(2, 4.0), task(3, 1.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (2, 3)]));
        let path = longest_paths(&graph, 0.0);

        assert_eq!(path.nodes, vec![id(1), id(2), id(3)]);
        assert_eq!(path.total_weight, 7.0);
        assert_eq!(path.distance(&id(3)), Some(6.0));
    }

    #[test]
    fn diamond_follows_the_heavier_side() {
        // #1 -> {#2(10), #3(1)} -> #4
        let tasks = vec![task(1, 1.0), task(2, 10.0), task(3, 1.0), task(4, 1.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]));
        let path = longest_paths(&graph, 0.0);

        assert_eq!(path.nodes, vec![id(1), id(2), id(4)]);
        assert_eq!(path.total_weight, 12.0);
    }

    #[test]
    fn path_weight_equals_max_distance_plus_terminus_weight() {
        let tasks = vec![task(1, 3.0), task(2, 2.0), task(3, 5.0), task(4, 1.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (2, 3), (1, 4)]));
        let path = longest_paths(&graph, 0.0);

        let max_distance = path
            .distances()
            .values()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let terminus = path.nodes.last().unwrap();
        let terminus_weight = graph.task(terminus).unwrap().effective_weight(0.0);

        assert!((path.total_weight - (max_distance + terminus_weight)).abs() < 1e-9);
    }

    #[test]
    fn cyclic_nodes_are_excluded_and_computation_terminates() {
        // #1 <-> #2 cycle, #3 independent
        let tasks = vec![task(1, 2.0), task(2, 2.0), task(3, 1.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (2, 1)]));
        let path = longest_paths(&graph, 0.0);

        assert_eq!(path.distance(&id(1)), None);
        assert_eq!(path.distance(&id(2)), None);
        assert!(path.distance(&id(3)).is_some());
        assert!(!path.contains(&id(1)));
        assert!(!path.contains(&id(2)));
    }

    #[test]
    fn fully_cyclic_graph_yields_empty_path() {
        let tasks = vec![task(1, 2.0), task(2, 2.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (2, 1)]));
        let path = longest_paths(&graph, 0.0);

        assert!(path.is_empty());
        assert!(path.distances().is_empty());
        assert_eq!(path.total_weight, 0.0);
    }

    #[test]
    fn empty_graph_yields_empty_path() {
        let graph = TaskGraph::from_parts(&[], &[]);
        let path = longest_paths(&graph, 0.0);
        assert!(path.is_empty());
        assert_eq!(path.total_weight, 0.0);
    }

    #[test]
    fn edgeless_graph_yields_first_task_as_path() {
        // All distances are zero; the canonical-order tie-break selects
        // the first task and backtracking stops immediately.
        let tasks = vec![task(7, 2.0), task(3, 9.0)];
        let graph = TaskGraph::from_parts(&tasks, &[]);
        let path = longest_paths(&graph, 0.0);

        assert_eq!(path.nodes, vec![id(7)]);
        assert_eq!(path.total_weight, 2.0);
    }

    #[test]
    fn missing_weights_use_the_default() {
        let tasks = vec![
            TaskRecord::new("#1", "Task 1"),
            TaskRecord::new("#2", "Task 2"),
        ];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2)]));

        let zero_default = longest_paths(&graph, 0.0);
        assert_eq!(zero_default.distance(&id(2)), Some(0.0));

        let one_default = longest_paths(&graph, 1.0);
        assert_eq!(one_default.distance(&id(2)), Some(1.0));
        assert_eq!(one_default.nodes, vec![id(1), id(2)]);
    }

    #[test]
    fn equal_predecessors_tie_break_on_task_list_order() {
        // #2 and #3 both reach #4 with identical accumulated weight;
        // backtracking must pick #2, the earlier task in snapshot order.
        let tasks = vec![task(1, 1.0), task(2, 3.0), task(3, 3.0), task(4, 1.0)];
        let graph = TaskGraph::from_parts(
            &tasks,
            &edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]),
        );
        let path = longest_paths(&graph, 0.0);

        assert_eq!(path.nodes, vec![id(1), id(2), id(4)]);
    }

    #[test]
    fn tie_break_is_stable_across_runs() {
        let tasks = vec![task(1, 1.0), task(2, 3.0), task(3, 3.0), task(4, 1.0)];
        let graph_edges = edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let graph = TaskGraph::from_parts(&tasks, &graph_edges);

        let first = longest_paths(&graph, 0.0);
        for _ in 0..10 {
            assert_eq!(longest_paths(&graph, 0.0).nodes, first.nodes);
        }
    }

    #[test]
    fn acyclic_path_never_exceeds_task_count() {
        let tasks = vec![task(1, 1.0), task(2, 1.0), task(3, 1.0)];
        let graph = TaskGraph::from_parts(&tasks, &edges(&[(1, 2), (2, 3), (1, 3)]));
        let path = longest_paths(&graph, 0.0);
        assert!(path.len() <= graph.len());
    }
}
