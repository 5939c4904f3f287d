//! Domain models for dependency analysis
//!
//! Contains the task snapshot types and the dependency graph without any
//! I/O concerns.

mod graph;
mod id;
mod task;

pub use graph::TaskGraph;
pub use id::TaskId;
pub use task::{DependencyEdge, TaskRecord, TaskStatus};
