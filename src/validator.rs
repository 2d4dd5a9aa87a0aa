//! Rule dispatcher and top-level validation API
//!
//! Walks the schema in order, applies the presence rules for each field and
//! hands present values to the type checkers. An optional second pass flags
//! configuration keys the schema does not define.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::checks::check_present;
use crate::error::SchemaValidationError;
use crate::issue::{IssueCollector, ValidationIssue};
use crate::rule::Rule;
use crate::value::{Document, Value};

/// Schema field names starting with this prefix are metadata, never fields
pub const RESERVED_PREFIX: &str = "_";

/// Whether a schema field name is reserved
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Validates configuration documents against a schema document.
///
/// Holds no state between calls; a `Validator` can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    allow_extra_keys: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a validator that allows configuration keys missing from the schema
    pub fn new() -> Self {
        Self {
            allow_extra_keys: true,
        }
    }

    /// Set whether configuration keys not defined in the schema are allowed
    pub fn allow_extra_keys(mut self, allow: bool) -> Self {
        self.allow_extra_keys = allow;
        self
    }

    pub fn allows_extra_keys(&self) -> bool {
        self.allow_extra_keys
    }

    /// Collect every issue in `config` with respect to `schema`.
    ///
    /// Never fails; an empty vector means the configuration is valid.
    pub fn validate(&self, schema: &Document, config: &Document) -> Vec<ValidationIssue> {
        let mut issues = IssueCollector::new();

        for (name, rule) in schema.iter() {
            if is_reserved(name) {
                trace!(field = name, "skipping reserved field");
                continue;
            }
            validate_field(name, rule, config, &mut issues);
        }

        if !self.allow_extra_keys {
            scan_extra_keys(schema, config, &mut issues);
        }

        debug!(
            fields = schema.len(),
            issues = issues.len(),
            "validation finished"
        );
        issues.into_issues()
    }

    /// Validate and fail with the aggregated issues if there are any
    pub fn assert_valid(
        &self,
        schema: &Document,
        config: &Document,
    ) -> Result<(), SchemaValidationError> {
        let issues = self.validate(schema, config);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::new(issues))
        }
    }
}

fn validate_field(name: &str, rule: &Value, config: &Document, issues: &mut IssueCollector) {
    let empty = Document::new();
    let options = match rule {
        Value::Mapping(options) => options,
        // null, false, 0, "" and [] all read as "no options"
        other if !other.is_truthy() => &empty,
        other => {
            debug!(field = name, found = other.type_name(), "rule is not a mapping");
            issues.report_unruled(name, "Schema error: rule must be a mapping.");
            return;
        }
    };
    let rule = Rule::new(options);

    match config.get(name) {
        Some(value) => check_present(name, value, rule, issues),
        None => {
            if rule.is_required() {
                issues.report(name, "Missing required field.", options);
            }
        }
    }
}

/// Flag configuration keys that are not schema field names.
///
/// Reserved schema names count as defined.
fn scan_extra_keys(schema: &Document, config: &Document, issues: &mut IssueCollector) {
    let known: HashSet<&str> = schema.keys().collect();
    for key in config.keys().filter(|key| !known.contains(key)) {
        issues.report_unruled(key, "Unexpected configuration key (not defined in schema).");
    }
}

/// Validate `config` against `schema` and return every issue found
pub fn validate_config_against_schema(
    schema: &Document,
    config: &Document,
    allow_extra_keys: bool,
) -> Vec<ValidationIssue> {
    Validator::new()
        .allow_extra_keys(allow_extra_keys)
        .validate(schema, config)
}

/// Validate `config` against `schema`, failing if any issue is found
pub fn assert_valid_config(
    schema: &Document,
    config: &Document,
    allow_extra_keys: bool,
) -> Result<(), SchemaValidationError> {
    Validator::new()
        .allow_extra_keys(allow_extra_keys)
        .assert_valid(schema, config)
}
