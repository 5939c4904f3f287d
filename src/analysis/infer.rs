//! Edge inference from free-text dependency references
//!
//! Fuzzy business logic kept behind the [`InferDependencies`] seam so the
//! graph algorithms stay testable against synthetic edge lists.
//!
//! Two rules, per reference string:
//!
//! 1. Explicit numeric references (`"Task #3"`, `"task 3"`) become edges
//!    from the referenced task; one string may name several tasks.
//! 2. Only when rule 1 yields nothing: the first keyword rule whose
//!    keyword occurs in the text emits an edge from its anchor task.
//!
//! Self-references and references to unknown ids are dropped silently.
//! The output may contain duplicates; the graph builder deduplicates.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::config::AnalyzerConfig;
use crate::domain::{DependencyEdge, TaskId, TaskRecord};

static TASK_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)task\s*#?(\d+)").expect("static pattern compiles"));

/// Turns a task snapshot into candidate prerequisite edges
pub trait InferDependencies {
    /// Produces edges terminating at the tasks whose references matched
    fn infer_edges(&self, tasks: &[TaskRecord]) -> Vec<DependencyEdge>;
}

/// Reference-based inferencer: numeric task references with a
/// keyword/anchor fallback
#[derive(Debug, Clone)]
pub struct ReferenceInferencer {
    config: AnalyzerConfig,
}

impl ReferenceInferencer {
    /// Creates an inferencer from a validated configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    fn edges_for_reference(
        &self,
        reference: &str,
        current: &TaskId,
        known: &HashSet<TaskId>,
    ) -> Vec<DependencyEdge> {
        let text = reference.trim().to_lowercase();

        let explicit: Vec<DependencyEdge> = TASK_REF
            .captures_iter(&text)
            .map(|cap| TaskId::new(&cap[1]))
            .filter(|prereq| known.contains(prereq) && prereq != current)
            .map(|prereq| DependencyEdge::new(prereq, current.clone()))
            .collect();

        if !explicit.is_empty() {
            return explicit;
        }

        // Keyword fallback, first matching rule wins
        for rule in &self.config.keyword_rules {
            let matched = rule.keywords.iter().any(|kw| text.contains(kw.as_str()));
            if matched && known.contains(&rule.anchor) && &rule.anchor != current {
                return vec![DependencyEdge::new(rule.anchor.clone(), current.clone())];
            }
        }

        vec![]
    }
}

impl InferDependencies for ReferenceInferencer {
    fn infer_edges(&self, tasks: &[TaskRecord]) -> Vec<DependencyEdge> {
        let known: HashSet<TaskId> = tasks.iter().map(|t| t.id.clone()).collect();

        let mut edges = Vec::new();
        for task in tasks {
            for reference in &task.dependency_references {
                edges.extend(self.edges_for_reference(reference, &task.id, &known));
            }
        }

        tracing::debug!(tasks = tasks.len(), edges = edges.len(), "inferred dependency edges");
        edges
    }
}
