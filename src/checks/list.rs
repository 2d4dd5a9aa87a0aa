//! List checker with per-element re-validation

use super::check_present;
use crate::issue::IssueCollector;
use crate::rule::Rule;
use crate::value::{Document, Value};

pub(super) fn check_list(field: &str, value: &Value, rule: Rule<'_>, issues: &mut IssueCollector) {
    let Some(items) = value.as_sequence() else {
        issues.report(
            field,
            format!("Expected list, got {}.", value.type_name()),
            rule.options(),
        );
        return;
    };
    let count = items.len() as i64;

    if let Some(min_items) = rule.count("min_items") {
        if count < min_items {
            issues.report(
                field,
                format!("List has fewer than minimum {} items.", min_items),
                rule.options(),
            );
        }
    }

    if let Some(max_items) = rule.count("max_items") {
        if count > max_items {
            issues.report(
                field,
                format!("List has more than maximum {} items.", max_items),
                rule.options(),
            );
        }
    }

    let Some(element_type) = rule.get("element_type").filter(|t| t.is_truthy()) else {
        return;
    };

    let element_rule = element_rule(rule.options(), element_type);
    for (idx, item) in items.iter().enumerate() {
        let element_field = format!("{}[{}]", field, idx);
        check_present(&element_field, item, Rule::new(&element_rule), issues);
    }
}

/// Rule applied to each element: the list rule retyped to `element_type`,
/// without the list-level item counts
fn element_rule(list_rule: &Document, element_type: &Value) -> Document {
    let mut rule = list_rule.clone();
    rule.insert("type", element_type.clone());
    rule.remove("min_items");
    rule.remove("max_items");
    rule
}
