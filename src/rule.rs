//! Rule types: declared field kinds and typed access to rule options

use std::fmt;

use crate::value::{format_float, Document, Value};

/// Kind of value a schema field declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    String,
    Int,
    Float,
    Bool,
    Enum,
    File,
    Directory,
    List,
}

/// Type names accepted in the `type` and `element_type` options
const KIND_NAMES: &[(&str, RuleKind)] = &[
    ("string", RuleKind::String),
    ("int", RuleKind::Int),
    ("float", RuleKind::Float),
    ("bool", RuleKind::Bool),
    ("enum", RuleKind::Enum),
    ("file", RuleKind::File),
    ("dir", RuleKind::Directory),
    ("directory", RuleKind::Directory),
    ("list", RuleKind::List),
];

impl RuleKind {
    /// Look up a kind by its schema name
    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    /// Canonical schema name
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::String => "string",
            RuleKind::Int => "int",
            RuleKind::Float => "float",
            RuleKind::Bool => "bool",
            RuleKind::Enum => "enum",
            RuleKind::File => "file",
            RuleKind::Directory => "directory",
            RuleKind::List => "list",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric `min`/`max` bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i64),
    Float(f64),
}

impl Bound {
    pub fn as_f64(&self) -> f64 {
        match self {
            Bound::Int(i) => *i as f64,
            Bound::Float(f) => *f,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(i) => write!(f, "{}", i),
            Bound::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Borrowed view over one field's rule mapping.
///
/// Unrecognized options are ignored. An option set to null reads as absent.
#[derive(Debug, Clone, Copy)]
pub struct Rule<'a> {
    options: &'a Document,
}

impl<'a> Rule<'a> {
    pub fn new(options: &'a Document) -> Self {
        Self { options }
    }

    /// The raw rule mapping
    pub fn options(&self) -> &'a Document {
        self.options
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.options.get(key).filter(|v| !v.is_null())
    }

    /// Declared type name; `"string"` when absent
    pub fn type_name(&self) -> String {
        match self.options.get("type") {
            Some(value) => value.to_text(),
            None => RuleKind::String.as_str().to_string(),
        }
    }

    /// Declared kind, or `None` for an unknown type name
    pub fn kind(&self) -> Option<RuleKind> {
        RuleKind::from_name(&self.type_name())
    }

    /// Truthiness of a flag option; absent means false
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_truthy)
    }

    pub fn is_required(&self) -> bool {
        self.flag("required")
    }

    /// Integer-valued option such as `min_length`; other values are ignored
    pub fn count(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Numeric bound option.
    ///
    /// `None` when unset, `Some(Err(value))` when set to a non-number.
    pub fn bound(&self, key: &str) -> Option<Result<Bound, &'a Value>> {
        self.get(key).map(|value| match value {
            Value::Int(i) => Ok(Bound::Int(*i)),
            Value::Float(f) => Ok(Bound::Float(*f)),
            other => Err(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_doc(pairs: &[(&str, Value)]) -> Document {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(RuleKind::from_name("dir"), Some(RuleKind::Directory));
        assert_eq!(RuleKind::from_name("directory"), Some(RuleKind::Directory));
        assert_eq!(RuleKind::from_name("String"), None);
        assert_eq!(RuleKind::from_name("unknown"), None);
    }

    #[test]
    fn test_type_defaults_to_string() {
        let doc = Document::new();
        let rule = Rule::new(&doc);
        assert_eq!(rule.kind(), Some(RuleKind::String));
        assert!(!rule.is_required());
    }

    #[test]
    fn test_non_string_type_is_rendered() {
        let doc = rule_doc(&[("type", Value::Int(5))]);
        assert_eq!(Rule::new(&doc).type_name(), "5");
        let doc = rule_doc(&[("type", Value::Null)]);
        assert_eq!(Rule::new(&doc).type_name(), "null");
        assert_eq!(Rule::new(&doc).kind(), None);
    }

    #[test]
    fn test_option_accessors() {
        let doc = rule_doc(&[
            ("required", Value::from("yes")),
            ("min_length", Value::from("3")),
            ("max_length", Value::Int(8)),
            ("min", Value::Float(0.5)),
            ("max", Value::from("ten")),
            ("regex", Value::Null),
        ]);
        let rule = Rule::new(&doc);
        assert!(rule.is_required());
        assert_eq!(rule.count("min_length"), None);
        assert_eq!(rule.count("max_length"), Some(8));
        assert_eq!(rule.bound("min"), Some(Ok(Bound::Float(0.5))));
        assert!(matches!(rule.bound("max"), Some(Err(_))));
        assert_eq!(rule.get("regex"), None);
    }

    #[test]
    fn test_bound_display() {
        assert_eq!(Bound::Float(1.0).to_string(), "1.0");
        assert_eq!(Bound::Int(5).to_string(), "5");
    }
}
