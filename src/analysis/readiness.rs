//! Blocked/ready classification
//!
//! Partitions every non-completed task by its prerequisites: ready when
//! all prerequisites (possibly none) are completed, blocked otherwise.
//! Completed tasks appear in neither set. A source-supplied `Blocked`
//! status is ignored here; only the graph decides.

use crate::domain::{TaskGraph, TaskId};

/// Disjoint blocked/ready partition of the non-completed tasks, each in
/// canonical order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readiness {
    /// Tasks with at least one incomplete prerequisite
    pub blocked: Vec<TaskId>,

    /// Tasks whose prerequisites are all completed
    pub ready: Vec<TaskId>,
}

/// Classifies every non-completed task in the graph
pub(crate) fn classify(graph: &TaskGraph) -> Readiness {
    let mut readiness = Readiness::default();

    for id in graph.task_ids() {
        let Some(task) = graph.task(id) else {
            continue;
        };
        if task.status.is_complete() {
            continue;
        }

        let all_prereqs_complete = graph.prerequisites(id).iter().all(|prereq| {
            graph
                .task(prereq)
                .map(|t| t.status.is_complete())
                .unwrap_or(false)
        });

        if all_prereqs_complete {
            readiness.ready.push(id.clone());
        } else {
            readiness.blocked.push(id.clone());
        }
    }

    readiness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyEdge, TaskRecord, TaskStatus};

    fn id(label: u32) -> TaskId {
        TaskId::new(format!("#{label}"))
    }

    #[test]
    fn task_without_prerequisites_is_ready() {
        let tasks = vec![TaskRecord::new("#1", "Task 1")];
        let graph = TaskGraph::from_parts(&tasks, &[]);
        let readiness = classify(&graph);

        assert_eq!(readiness.ready, vec![id(1)]);
        assert!(readiness.blocked.is_empty());
    }

    #[test]
    fn incomplete_prerequisite_blocks_dependent() {
        let tasks = vec![
            TaskRecord::new("#1", "Task 1"),
            TaskRecord::new("#2", "Task 2"),
        ];
        let edges = vec![DependencyEdge::new("#1", "#2")];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &edges));

        assert_eq!(readiness.ready, vec![id(1)]);
        assert_eq!(readiness.blocked, vec![id(2)]);
    }

    #[test]
    fn completed_prerequisite_unblocks_dependent() {
        let tasks = vec![
            TaskRecord::new("#1", "Task 1").with_status(TaskStatus::Completed),
            TaskRecord::new("#2", "Task 2"),
        ];
        let edges = vec![DependencyEdge::new("#1", "#2")];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &edges));

        assert_eq!(readiness.ready, vec![id(2)]);
        assert!(readiness.blocked.is_empty());
    }

    #[test]
    fn one_incomplete_prerequisite_among_many_still_blocks() {
        let tasks = vec![
            TaskRecord::new("#1", "Task 1").with_status(TaskStatus::Completed),
            TaskRecord::new("#2", "Task 2").with_status(TaskStatus::InProgress),
            TaskRecord::new("#3", "Task 3"),
        ];
        let edges = vec![
            DependencyEdge::new("#1", "#3"),
            DependencyEdge::new("#2", "#3"),
        ];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &edges));

        assert_eq!(readiness.blocked, vec![id(3)]);
        assert_eq!(readiness.ready, vec![id(2)]);
    }

    #[test]
    fn completed_tasks_appear_in_neither_set() {
        let tasks = vec![
            TaskRecord::new("#1", "Task 1").with_status(TaskStatus::Completed),
            TaskRecord::new("#2", "Task 2").with_status(TaskStatus::Completed),
        ];
        let edges = vec![DependencyEdge::new("#1", "#2")];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &edges));

        assert!(readiness.ready.is_empty());
        assert!(readiness.blocked.is_empty());
    }

    #[test]
    fn source_blocked_status_is_derived_not_copied() {
        // A task marked Blocked upstream but with no prerequisites is
        // ready by this crate's definition.
        let tasks = vec![TaskRecord::new("#1", "Task 1").with_status(TaskStatus::Blocked)];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &[]));

        assert_eq!(readiness.ready, vec![id(1)]);
    }

    #[test]
    fn sets_are_disjoint_and_in_canonical_order() {
        let tasks = vec![
            TaskRecord::new("#3", "Task 3"),
            TaskRecord::new("#1", "Task 1"),
            TaskRecord::new("#2", "Task 2"),
        ];
        let edges = vec![
            DependencyEdge::new("#1", "#2"),
            DependencyEdge::new("#1", "#3"),
        ];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &edges));

        assert_eq!(readiness.blocked, vec![id(3), id(2)]);
        assert_eq!(readiness.ready, vec![id(1)]);
        for blocked in &readiness.blocked {
            assert!(!readiness.ready.contains(blocked));
        }
    }

    #[test]
    fn cyclic_tasks_block_each_other() {
        let tasks = vec![
            TaskRecord::new("#1", "Task 1"),
            TaskRecord::new("#2", "Task 2"),
        ];
        let edges = vec![
            DependencyEdge::new("#1", "#2"),
            DependencyEdge::new("#2", "#1"),
        ];
        let readiness = classify(&TaskGraph::from_parts(&tasks, &edges));

        assert_eq!(readiness.blocked, vec![id(1), id(2)]);
        assert!(readiness.ready.is_empty());
    }
}
