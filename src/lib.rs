//! Taskdag - dependency-graph analysis for task snapshots
//!
//! Given a snapshot of tasks carrying free-text dependency references,
//! taskdag infers concrete prerequisite edges, detects cycles, computes a
//! weighted critical path, and partitions the remaining work into blocked
//! and ready sets. Parsing task files and rendering reports are the
//! caller's concern; this crate only consumes [`TaskRecord`] values and
//! produces an [`Analysis`].

pub mod analysis;
pub mod domain;

pub use analysis::{
    Analysis, AnalysisSummary, AnalyzerConfig, ConfigError, CriticalPath, DependencyAnalyzer,
    InferDependencies, KeywordRule, Readiness, ReferenceInferencer,
};
pub use domain::{DependencyEdge, TaskGraph, TaskId, TaskRecord, TaskStatus};
