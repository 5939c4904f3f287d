//! Dependency graph for tasks
//!
//! A closed, deduplicated adjacency structure over a task snapshot.
//! Uses petgraph for the underlying directed graph, plus an
//! insertion-order id list so every public iteration order is the
//! canonical task-list order.
//!
//! Building is total: edges whose endpoints are unknown, self-edges and
//! duplicate edges are silently dropped rather than reported. Cycles are
//! allowed here; they are detected downstream and reported as data.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use super::id::TaskId;
use super::task::{DependencyEdge, TaskRecord};

/// A dependency graph over a task snapshot
///
/// Edge direction is prerequisite -> dependent: an edge `a -> b` means
/// `a` must complete before `b` is unblocked.
#[derive(Debug, Default, Clone)]
pub struct TaskGraph {
    /// The underlying directed graph
    graph: DiGraph<TaskId, ()>,

    /// Map from TaskId to node index
    node_map: HashMap<TaskId, NodeIndex>,

    /// Task payload per node
    tasks: HashMap<TaskId, TaskRecord>,

    /// Canonical iteration order: first-seen order of the task list
    order: Vec<TaskId>,
}

impl TaskGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a task snapshot and a flat edge list.
    ///
    /// Pure with respect to its inputs: the same snapshot and edges
    /// always produce a structurally identical graph. If the snapshot
    /// repeats an id, the last record wins but the id keeps its first
    /// position in the canonical order.
    pub fn from_parts(tasks: &[TaskRecord], edges: &[DependencyEdge]) -> Self {
        let mut graph = Self::new();

        // First pass: add all nodes
        for task in tasks {
            graph.add_task(task.clone());
        }

        // Second pass: add all edges
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to);
        }

        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "built dependency graph"
        );

        graph
    }

    fn add_task(&mut self, task: TaskRecord) {
        let id = task.id.clone();
        if !self.node_map.contains_key(&id) {
            let idx = self.graph.add_node(id.clone());
            self.node_map.insert(id.clone(), idx);
            self.order.push(id.clone());
        }
        self.tasks.insert(id, task);
    }

    /// Adds a prerequisite edge, dropping it silently when either
    /// endpoint is unknown, when it is a self-edge, or when it already
    /// exists.
    fn add_edge(&mut self, from: &TaskId, to: &TaskId) {
        if from == to {
            return;
        }

        let (Some(&from_idx), Some(&to_idx)) = (self.node_map.get(from), self.node_map.get(to))
        else {
            return;
        };

        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Returns the task record for an id
    pub fn task(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.tasks.get(id)
    }

    /// Returns all task IDs in canonical (task-list) order
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.order.iter()
    }

    /// Returns true if the graph contains the task
    pub fn contains(&self, id: &TaskId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Returns the number of tasks in the graph
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the edge `from -> to` exists
    pub fn has_edge(&self, from: &TaskId, to: &TaskId) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => {
                self.graph.find_edge(from_idx, to_idx).is_some()
            }
            _ => false,
        }
    }

    /// Returns the tasks this id blocks (forward edges), in edge
    /// insertion order
    pub fn dependents(&self, id: &TaskId) -> Vec<TaskId> {
        self.neighbors(id, petgraph::Direction::Outgoing)
    }

    /// Returns the prerequisites of this id (reverse edges), in edge
    /// insertion order
    pub fn prerequisites(&self, id: &TaskId) -> Vec<TaskId> {
        self.neighbors(id, petgraph::Direction::Incoming)
    }

    fn neighbors(&self, id: &TaskId, direction: petgraph::Direction) -> Vec<TaskId> {
        let idx = match self.node_map.get(id) {
            Some(idx) => *idx,
            None => return vec![],
        };

        // petgraph iterates newest edge first; reverse for insertion order
        let mut ids: Vec<TaskId> = self
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect();
        ids.reverse();
        ids
    }
}
