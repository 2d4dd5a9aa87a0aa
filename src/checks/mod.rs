//! Type checkers
//!
//! One checker per [`RuleKind`]. Every checker receives the field name, the
//! concrete (non-null) value and the rule, and appends to the collector.
//! Checkers never fail; a malformed rule becomes an issue on the field it
//! belongs to.

mod filesystem;
mod list;
mod primitives;

use tracing::{debug, warn};

use crate::issue::IssueCollector;
use crate::rule::{Rule, RuleKind};
use crate::value::Value;

/// Signature shared by all type checkers
type Checker = fn(&str, &Value, Rule<'_>, &mut IssueCollector);

impl RuleKind {
    fn checker(self) -> Checker {
        match self {
            RuleKind::String => primitives::check_string,
            RuleKind::Int => primitives::check_int,
            RuleKind::Float => primitives::check_float,
            RuleKind::Bool => primitives::check_bool,
            RuleKind::Enum => primitives::check_enum,
            RuleKind::File => filesystem::check_file,
            RuleKind::Directory => filesystem::check_directory,
            RuleKind::List => list::check_list,
        }
    }
}

/// Check a value that is present under `field`.
///
/// Null values only matter for required fields; anything else is routed to
/// the checker for the rule's declared type.
pub(crate) fn check_present(
    field: &str,
    value: &Value,
    rule: Rule<'_>,
    issues: &mut IssueCollector,
) {
    if value.is_null() {
        if rule.is_required() {
            issues.report(field, "Required field is null.", rule.options());
        }
        return;
    }

    match rule.kind() {
        Some(kind) => {
            debug!(field, kind = %kind, "checking field");
            (kind.checker())(field, value, rule, issues);
        }
        None => {
            let type_name = rule.type_name();
            warn!(field, %type_name, "unsupported type in schema");
            issues.report(
                field,
                format!("Unsupported type in schema: '{}'.", type_name),
                rule.options(),
            );
        }
    }
}

/// Report a schema-authoring problem on the field that carries it
fn schema_error(field: &str, message: &str, rule: Rule<'_>, issues: &mut IssueCollector) {
    warn!(field, message, "schema error");
    issues.report(field, format!("Schema error: {}", message), rule.options());
}


#[cfg(test)]
mod tests {
    use super::test_support::check;

    #[test]
    fn test_null_is_only_reported_when_required() {
        assert!(check("{type: int}", "null").is_empty());
        assert_eq!(
            check("{type: int, required: true}", "null"),
            vec!["x: Required field is null."]
        );
    }

    #[test]
    fn test_unsupported_type() {
        assert_eq!(
            check("{type: unknown}", "value"),
            vec!["x: Unsupported type in schema: 'unknown'."]
        );
    }

    #[test]
    fn test_default_type_is_string() {
        assert!(check("{}", "hello").is_empty());
        assert_eq!(check("{}", "12"), vec!["x: Expected string, got int."]);
    }

    #[test]
    fn test_dir_alias() {
        assert_eq!(check("{type: dir}", "7"), vec!["x: Expected directory path string, got int."]);
    }
}
