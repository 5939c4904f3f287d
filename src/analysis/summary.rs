//! Reportable analysis summary
//!
//! Flat counts and derived metrics for the reporting/CLI layers that sit
//! outside this crate. Percentages follow the reporting convention of one
//! decimal place.

use serde::{Deserialize, Serialize};

use crate::domain::TaskId;

/// How many ready tasks `next_recommended_tasks` suggests
const RECOMMENDATION_LIMIT: usize = 3;

/// Aggregated outcome of one dependency analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of tasks in the snapshot
    pub total_tasks: usize,

    /// Number of completed tasks
    pub completed_tasks: usize,

    /// Number of blocked tasks
    pub blocked_count: usize,

    /// Number of ready tasks
    pub ready_count: usize,

    /// Number of raw cycle reports (overlapping cycles may repeat)
    pub cycles_detected: usize,

    /// Node count of the critical path
    pub critical_path_length: usize,

    /// `completed / total * 100`, one decimal, 0 for an empty snapshot
    pub completion_percentage: f64,

    /// `(ready - blocked) / total * 100`, one decimal, may be negative,
    /// 0 for an empty snapshot
    pub efficiency_score: f64,

    /// The critical path ids, prerequisite first
    pub critical_path: Vec<TaskId>,

    /// First ready tasks in canonical order, at most three
    pub next_recommended_tasks: Vec<TaskId>,

    /// One human-readable message per blocked task
    pub blocking_issues: Vec<String>,
}

impl AnalysisSummary {
    /// Builds a summary from the analysis pieces
    pub(crate) fn build(
        total_tasks: usize,
        completed_tasks: usize,
        blocked: &[TaskId],
        ready: &[TaskId],
        cycles_detected: usize,
        critical_path: Vec<TaskId>,
    ) -> Self {
        let completion_percentage = if total_tasks > 0 {
            round_percentage(completed_tasks as f64 / total_tasks as f64 * 100.0)
        } else {
            0.0
        };

        let efficiency_score = if total_tasks > 0 {
            round_percentage(
                (ready.len() as f64 - blocked.len() as f64) / total_tasks as f64 * 100.0,
            )
        } else {
            0.0
        };

        Self {
            total_tasks,
            completed_tasks,
            blocked_count: blocked.len(),
            ready_count: ready.len(),
            cycles_detected,
            critical_path_length: critical_path.len(),
            completion_percentage,
            efficiency_score,
            critical_path,
            next_recommended_tasks: ready.iter().take(RECOMMENDATION_LIMIT).cloned().collect(),
            blocking_issues: blocked
                .iter()
                .map(|id| format!("Task {id} blocked by incomplete prerequisites"))
                .collect(),
        }
    }
}

/// Rounds to one decimal place
fn round_percentage(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
