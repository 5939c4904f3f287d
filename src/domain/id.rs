//! Task identifiers
//!
//! ID Format: `#{label}` (e.g., `#7`). Task sources are inconsistent about
//! the leading `#`, so construction normalizes: surrounding whitespace and
//! any existing `#` prefix are stripped and a single `#` is prepended.
//! `"7"`, `"#7"` and `" #7 "` all denote the same task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized task ID in the format `#{label}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task ID, normalizing to the `#`-prefixed form
    pub fn new(raw: impl AsRef<str>) -> Self {
        let label = raw.as_ref().trim().trim_start_matches('#');
        Self(format!("#{label}"))
    }

    /// Returns the ID as a string slice, including the `#` prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for TaskId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.0
    }
}
