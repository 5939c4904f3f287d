//! Analyzer configuration
//!
//! Keyword-to-anchor rules for fallback edge inference and the default
//! task weight. Configuration is an explicit value handed to
//! [`crate::analysis::DependencyAnalyzer::new`]; there is no process-wide
//! config state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TaskId;

/// Weight applied when a task has no usable estimate.
///
/// The `0.0` default means unestimated tasks contribute nothing to path
/// weight; it is applied uniformly across every calculation.
pub const DEFAULT_WEIGHT: f64 = 0.0;

/// Tolerance when matching predecessor distances during critical-path
/// backtracking, in the same time units as task weights
pub const WEIGHT_TOLERANCE: f64 = 0.1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("keyword rule for anchor {0} has no keywords")]
    EmptyKeywords(TaskId),

    #[error("default weight must be finite and non-negative, got {0}")]
    InvalidDefaultWeight(f64),
}

/// Maps a keyword set to an anchor task.
///
/// A dependency reference containing any of the keywords (and no explicit
/// numeric task reference) is treated as depending on the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// The implicit prerequisite for matching references
    pub anchor: TaskId,

    /// Matched case-insensitively as substrings
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Creates a rule, lowercasing keywords for case-insensitive matching
    pub fn new<I, S>(anchor: impl Into<TaskId>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchor: anchor.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }
}

/// Configuration for [`crate::analysis::DependencyAnalyzer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Fallback rules, scanned in order; the first match per reference
    /// wins
    pub keyword_rules: Vec<KeywordRule>,

    /// Weight for tasks with a missing or negative estimate
    pub default_weight: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keyword_rules: vec![
                KeywordRule::new("#1", ["testing", "pipeline", "completion"]),
                KeywordRule::new("#4", ["automation", "tracking"]),
            ],
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl AnalyzerConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.keyword_rules {
            if rule.keywords.is_empty() {
                return Err(ConfigError::EmptyKeywords(rule.anchor.clone()));
            }
        }

        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(ConfigError::InvalidDefaultWeight(self.default_weight));
        }

        Ok(())
    }
}
