//! Dependency analysis over a task snapshot
//!
//! The pipeline: free-text references are turned into edges, the edges
//! into a [`crate::domain::TaskGraph`], and the graph into cycles, a
//! weighted critical path, a blocked/ready partition and a reportable
//! [`AnalysisSummary`].

mod analyzer;
mod config;
mod critical_path;
mod cycles;
mod infer;
mod readiness;
mod summary;

pub use analyzer::{Analysis, DependencyAnalyzer};
pub use config::{AnalyzerConfig, ConfigError, KeywordRule, DEFAULT_WEIGHT, WEIGHT_TOLERANCE};
pub use critical_path::CriticalPath;
pub use infer::{InferDependencies, ReferenceInferencer};
pub use readiness::Readiness;
pub use summary::AnalysisSummary;
