//! Validation error type.
//!
//! Carries the full ordered list of field-level issues so callers can report
//! every violation at once instead of failing on the first.

use miette::Diagnostic;
use thiserror::Error;

/// A single constraint violation: the offending field path and what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Input failed schema constraints before reaching the store.
///
/// Issues appear in field declaration order; the same invalid input always
/// produces the same issue list.
#[derive(Error, Diagnostic, Debug, Clone)]
#[error("validation failed: {summary}")]
#[diagnostic(code(todo_mcp::validate::invalid_input))]
pub struct ValidationError {
    summary: String,
    issues: Vec<Issue>,
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        let summary = issues
            .iter()
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .collect::<Vec<_>>()
            .join(", ");
        Self { summary, issues }
    }

    /// Shorthand for a single-issue error.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![Issue::new(path, message)])
    }

    /// The per-field issues, in the order they were detected.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}
