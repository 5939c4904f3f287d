//! Analysis front door
//!
//! [`DependencyAnalyzer`] wires the pieces together: infer edges, build
//! the graph, then derive cycles, critical path and readiness in one
//! synchronous pass. Every call recomputes from the snapshot it is
//! given; an analyzer holds no graph state, so independent analyses can
//! run concurrently without coordination.

use super::config::{AnalyzerConfig, ConfigError};
use super::critical_path::{longest_paths, CriticalPath};
use super::cycles::detect_cycles;
use super::infer::{InferDependencies, ReferenceInferencer};
use super::readiness::{classify, Readiness};
use super::summary::AnalysisSummary;
use crate::domain::{DependencyEdge, TaskGraph, TaskId, TaskRecord};

/// Complete result of one dependency analysis
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The closed dependency graph the derivations ran on
    pub graph: TaskGraph,

    /// Raw cycle reports from the forward adjacency
    pub cycles: Vec<Vec<TaskId>>,

    /// Weighted longest path over the acyclic subgraph
    pub critical_path: CriticalPath,

    /// Blocked/ready partition of the non-completed tasks
    pub readiness: Readiness,
}

impl Analysis {
    /// Runs the graph derivations on a snapshot plus a pre-built edge
    /// list, bypassing inference.
    ///
    /// This is the seam that keeps the graph algorithms testable with
    /// synthetic edges, independent of the free-text heuristics.
    pub fn from_edges(
        tasks: &[TaskRecord],
        edges: &[DependencyEdge],
        default_weight: f64,
    ) -> Self {
        let graph = TaskGraph::from_parts(tasks, edges);
        let cycles = detect_cycles(&graph);
        let critical_path = longest_paths(&graph, default_weight);
        let readiness = classify(&graph);

        tracing::debug!(
            tasks = graph.len(),
            cycles = cycles.len(),
            critical_path = critical_path.len(),
            ready = readiness.ready.len(),
            blocked = readiness.blocked.len(),
            "dependency analysis complete"
        );

        Self {
            graph,
            cycles,
            critical_path,
            readiness,
        }
    }

    /// Returns true if the task lies on the critical path.
    ///
    /// Membership probes back the external priority scorer, which uses
    /// them as one signal among several.
    pub fn is_on_critical_path(&self, id: &TaskId) -> bool {
        self.critical_path.contains(id)
    }

    /// Returns true if the task is blocked by incomplete prerequisites
    pub fn is_blocked(&self, id: &TaskId) -> bool {
        self.readiness.blocked.contains(id)
    }

    /// Returns true if the task is ready to be worked on
    pub fn is_ready(&self, id: &TaskId) -> bool {
        self.readiness.ready.contains(id)
    }

    /// Aggregates the analysis into a reportable summary
    pub fn summary(&self) -> AnalysisSummary {
        let completed = self
            .graph
            .task_ids()
            .filter(|id| {
                self.graph
                    .task(id)
                    .map(|t| t.status.is_complete())
                    .unwrap_or(false)
            })
            .count();

        AnalysisSummary::build(
            self.graph.len(),
            completed,
            &self.readiness.blocked,
            &self.readiness.ready,
            self.cycles.len(),
            self.critical_path.nodes.clone(),
        )
    }
}

/// Dependency analyzer over task snapshots
///
/// Generic over the edge-inference strategy; defaults to the free-text
/// [`ReferenceInferencer`].
#[derive(Debug, Clone)]
pub struct DependencyAnalyzer<I = ReferenceInferencer> {
    inferencer: I,
    default_weight: f64,
}

impl DependencyAnalyzer<ReferenceInferencer> {
    /// Creates an analyzer with reference-based inference.
    ///
    /// Fails only on an invalid configuration; analysis itself never
    /// fails.
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let default_weight = config.default_weight;
        Ok(Self {
            inferencer: ReferenceInferencer::new(config),
            default_weight,
        })
    }
}

impl<I: InferDependencies> DependencyAnalyzer<I> {
    /// Creates an analyzer with a custom inference strategy.
    ///
    /// The default weight is held to the same rule as
    /// [`DependencyAnalyzer::new`]: finite and non-negative.
    pub fn with_inferencer(inferencer: I, default_weight: f64) -> Result<Self, ConfigError> {
        if !default_weight.is_finite() || default_weight < 0.0 {
            return Err(ConfigError::InvalidDefaultWeight(default_weight));
        }
        Ok(Self {
            inferencer,
            default_weight,
        })
    }

    /// Analyzes a task snapshot
    pub fn analyze(&self, tasks: &[TaskRecord]) -> Analysis {
        let edges = self.inferencer.infer_edges(tasks);
        Analysis::from_edges(tasks, &edges, self.default_weight)
    }
}
