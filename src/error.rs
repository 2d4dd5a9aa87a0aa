//! Error types for the validator

use std::path::PathBuf;
use thiserror::Error;

use crate::issue::ValidationIssue;
use crate::value::UnsupportedKey;

/// Result type for loading and validation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aggregate failure raised when a configuration has one or more issues.
///
/// Displays as the newline-joined issues, in discovery order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", join_issues(.issues))]
pub struct SchemaValidationError {
    issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl SchemaValidationError {
    pub fn new(issues: impl IntoIterator<Item = ValidationIssue>) -> Self {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

/// Validator errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{origin}: {source}")]
    Yaml {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("{origin}: top-level document must be a mapping, got {found}")]
    NotAMapping { origin: String, found: &'static str },

    #[error("{origin}: {source}")]
    InvalidKey {
        origin: String,
        source: UnsupportedKey,
    },

    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config_crate::ConfigError),
}

impl Error {
    /// Whether the error comes from malformed document text rather than
    /// from IO or validation
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Yaml { .. } | Error::NotAMapping { .. } | Error::InvalidKey { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_display_joins_issues() {
        let err = SchemaValidationError::new(vec![
            ValidationIssue::new("a", "Missing required field.", None),
            ValidationIssue::new("b", "Expected int, got string.", None),
        ]);
        assert_eq!(
            err.to_string(),
            "a: Missing required field.\nb: Expected int, got string."
        );
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_parse_error_classification() {
        let err = Error::NotAMapping {
            origin: "config.yaml".to_string(),
            found: "list",
        };
        assert!(err.is_parse_error());

        let err = Error::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!err.is_parse_error());
    }
}
