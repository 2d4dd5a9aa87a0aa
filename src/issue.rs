//! Validation issues and the collector that accumulates them

use serde::Serialize;
use std::fmt;

use crate::value::Document;

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Field the issue belongs to; list elements use `name[index]`
    pub field: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Copy of the rule that was applied, if any
    pub rule: Option<Document>,
}

impl ValidationIssue {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: Option<Document>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered sink for issues found during one validation pass.
///
/// Checkers only ever append; nothing here aborts the pass.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<ValidationIssue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue raised while applying `rule`
    pub fn report(&mut self, field: &str, message: impl Into<String>, rule: &Document) {
        self.issues
            .push(ValidationIssue::new(field, message, Some(rule.clone())));
    }

    /// Record an issue with no rule attached
    pub fn report_unruled(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, message, None));
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}
