//! Scalar checkers: string, int, float, bool and enum

use regex::Regex;
use regex_syntax::hir::{Hir, Look};

use super::schema_error;
use crate::issue::IssueCollector;
use crate::rule::{Bound, Rule};
use crate::value::{format_float, Value};

pub(super) fn check_string(
    field: &str,
    value: &Value,
    rule: Rule<'_>,
    issues: &mut IssueCollector,
) {
    let Some(s) = value.as_str() else {
        issues.report(
            field,
            format!("Expected string, got {}.", value.type_name()),
            rule.options(),
        );
        return;
    };

    let length = s.chars().count() as i64;

    if let Some(min_length) = rule.count("min_length") {
        if length < min_length {
            issues.report(
                field,
                format!("String shorter than minimum length {}.", min_length),
                rule.options(),
            );
        }
    }

    if let Some(max_length) = rule.count("max_length") {
        if length > max_length {
            issues.report(
                field,
                format!("String longer than maximum length {}.", max_length),
                rule.options(),
            );
        }
    }

    let Some(pattern) = rule.get("regex").filter(|p| p.is_truthy()) else {
        return;
    };
    let pattern = pattern.to_text();

    match full_match_regex(&pattern) {
        Ok(regex) => {
            if !regex.is_match(s) {
                issues.report(
                    field,
                    format!("Value does not match regex pattern '{}'.", pattern),
                    rule.options(),
                );
            }
        }
        Err(err) => {
            issues.report(
                field,
                format!("Invalid regex in schema: {}.", err),
                rule.options(),
            );
        }
    }
}

/// Compile `pattern` so that it must match the whole input.
///
/// The raw pattern is compiled first so syntax errors point at the text the
/// schema author wrote. Anchors are added to the parsed expression rather
/// than the text, so inline flags and trailing `(?x)` comments keep working.
fn full_match_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    let parsed =
        regex_syntax::parse(pattern).map_err(|err| regex::Error::Syntax(err.to_string()))?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), parsed, Hir::look(Look::End)]);
    Regex::new(&anchored.to_string())
}

/// Read a `min`/`max` bound, reporting non-numeric values as schema errors
fn read_bound(
    field: &str,
    key: &str,
    rule: Rule<'_>,
    issues: &mut IssueCollector,
) -> Option<Bound> {
    match rule.bound(key)? {
        Ok(bound) => Some(bound),
        Err(_) => {
            schema_error(field, &format!("'{}' must be numeric.", key), rule, issues);
            None
        }
    }
}

pub(super) fn check_int(field: &str, value: &Value, rule: Rule<'_>, issues: &mut IssueCollector) {
    let Some(n) = value.as_i64() else {
        issues.report(
            field,
            format!("Expected int, got {}.", value.type_name()),
            rule.options(),
        );
        return;
    };

    if let Some(min) = read_bound(field, "min", rule, issues) {
        let below = match min {
            Bound::Int(m) => n < m,
            Bound::Float(m) => (n as f64) < m,
        };
        if below {
            issues.report(
                field,
                format!("Value {} is less than minimum {}.", n, min),
                rule.options(),
            );
        }
    }

    if let Some(max) = read_bound(field, "max", rule, issues) {
        let above = match max {
            Bound::Int(m) => n > m,
            Bound::Float(m) => (n as f64) > m,
        };
        if above {
            issues.report(
                field,
                format!("Value {} is greater than maximum {}.", n, max),
                rule.options(),
            );
        }
    }
}

pub(super) fn check_float(field: &str, value: &Value, rule: Rule<'_>, issues: &mut IssueCollector) {
    let Some(n) = value.as_f64() else {
        issues.report(
            field,
            format!("Expected float, got {}.", value.type_name()),
            rule.options(),
        );
        return;
    };

    if let Some((min, shown)) = read_float_bound(field, "min", rule, issues) {
        if n < min {
            issues.report(
                field,
                format!("Value {} is less than minimum {}.", format_float(n), shown),
                rule.options(),
            );
        }
    }

    if let Some((max, shown)) = read_float_bound(field, "max", rule, issues) {
        if n > max {
            issues.report(
                field,
                format!("Value {} is greater than maximum {}.", format_float(n), shown),
                rule.options(),
            );
        }
    }
}

/// Float rules also accept bounds written as numeric strings (`min: '0.5'`).
///
/// Returns the bound and its text as written in the schema.
fn read_float_bound(
    field: &str,
    key: &str,
    rule: Rule<'_>,
    issues: &mut IssueCollector,
) -> Option<(f64, String)> {
    if let Some(Value::String(text)) = rule.get(key) {
        return match text.trim().parse::<f64>() {
            Ok(bound) => Some((bound, text.clone())),
            Err(_) => {
                schema_error(field, &format!("'{}' must be numeric.", key), rule, issues);
                None
            }
        };
    }
    read_bound(field, key, rule, issues).map(|bound| (bound.as_f64(), bound.to_string()))
}

pub(super) fn check_bool(field: &str, value: &Value, rule: Rule<'_>, issues: &mut IssueCollector) {
    if value.as_bool().is_none() {
        issues.report(
            field,
            format!("Expected bool, got {}.", value.type_name()),
            rule.options(),
        );
    }
}

pub(super) fn check_enum(field: &str, value: &Value, rule: Rule<'_>, issues: &mut IssueCollector) {
    // A bare string is not an allowed set, even though it is a sequence of characters.
    let allowed: Vec<Value> = match rule.get("allowed") {
        Some(Value::Sequence(items)) => items.clone(),
        Some(Value::Mapping(map)) => map.keys().map(Value::from).collect(),
        _ => {
            schema_error(
                field,
                "'allowed' must be a list/sequence for enum type.",
                rule,
                issues,
            );
            return;
        }
    };

    if !allowed.iter().any(|candidate| candidate.loosely_equals(value)) {
        issues.report(
            field,
            format!("Value {} not in allowed set {}.", value, Value::Sequence(allowed)),
            rule.options(),
        );
    }
}
