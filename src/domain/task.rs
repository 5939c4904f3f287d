//! Task snapshot model
//!
//! A [`TaskRecord`] is one task as reported by the external task source
//! (markdown/JSON parsers). The analysis never mutates a record; every
//! run rebuilds its outputs from the snapshot it is handed.

use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    /// Marked blocked by the task source. Readiness classification ignores
    /// this marker and derives blocked/ready from prerequisites alone.
    Blocked,
}

impl TaskStatus {
    /// Returns true if this status represents completion
    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    /// Returns true if this task is not yet started
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskStatus::Pending)
    }

    /// Returns true if this task is currently being worked on
    pub fn is_active(&self) -> bool {
        matches!(self, TaskStatus::InProgress)
    }
}

/// One task from the external snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique identifier
    pub id: TaskId,

    /// Human-readable title
    pub title: String,

    /// Current status
    pub status: TaskStatus,

    /// Estimated duration in abstract time units (hours in practice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_weight: Option<f64>,

    /// Free-text dependency references, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_references: Vec<String>,
}

impl TaskRecord {
    /// Creates a pending task with no weight and no references
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::Pending,
            estimated_weight: None,
            dependency_references: Vec::new(),
        }
    }

    /// Sets the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the estimated weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.estimated_weight = Some(weight);
        self
    }

    /// Appends a free-text dependency reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.dependency_references.push(reference.into());
        self
    }

    /// Returns the weight used for critical-path calculation.
    ///
    /// Missing or negative weights fall back to `default_weight` so
    /// longest-path arithmetic stays deterministic.
    pub fn effective_weight(&self, default_weight: f64) -> f64 {
        match self.estimated_weight {
            Some(weight) if weight >= 0.0 => weight,
            _ => default_weight,
        }
    }
}

/// A prerequisite edge: `from` must complete before `to` is unblocked
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The prerequisite task
    pub from: TaskId,
    /// The dependent task
    pub to: TaskId,
}

impl DependencyEdge {
    /// Creates an edge from a prerequisite to its dependent
    pub fn new(from: impl Into<TaskId>, to: impl Into<TaskId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
