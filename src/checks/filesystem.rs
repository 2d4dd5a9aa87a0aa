//! Filesystem-aware checkers for `file` and `directory` fields

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use super::schema_error;
use crate::issue::IssueCollector;
use crate::rule::Rule;
use crate::value::Value;

pub(super) fn check_file(field: &str, value: &Value, rule: Rule<'_>, issues: &mut IssueCollector) {
    let Some(raw) = value.as_str() else {
        issues.report(
            field,
            format!("Expected file path string, got {}.", value.type_name()),
            rule.options(),
        );
        return;
    };
    let path = Path::new(raw);

    if rule.flag("must_be_absolute") && !path.is_absolute() {
        issues.report(field, "File path must be absolute.", rule.options());
    }

    if rule.flag("must_exist") && !path.exists() {
        issues.report(field, format!("File does not exist: {}.", raw), rule.options());
        return;
    }

    if rule.flag("must_be_readable") && !is_readable(path) {
        issues.report(field, format!("File is not readable: {}.", raw), rule.options());
    }

    if rule.flag("non_empty") {
        match fs::metadata(path) {
            Ok(meta) if meta.len() == 0 => {
                issues.report(field, format!("File is empty: {}.", raw), rule.options());
            }
            Ok(_) => {}
            // A missing file is not checked for size.
            Err(err) if is_missing(&err) => {}
            Err(_) => {
                issues.report(field, format!("Unable to stat file: {}.", raw), rule.options());
            }
        }
    }

    check_extensions(field, raw, rule, issues);
}

/// Literal, case-sensitive suffix match against the `extensions` option
fn check_extensions(field: &str, raw: &str, rule: Rule<'_>, issues: &mut IssueCollector) {
    let Some(extensions) = rule.get("extensions").filter(|e| e.is_truthy()) else {
        return;
    };
    let Some(extensions) = extensions.as_sequence() else {
        schema_error(
            field,
            "'extensions' must be a list/sequence for file type.",
            rule,
            issues,
        );
        return;
    };

    let valid: Vec<String> = extensions.iter().map(Value::to_text).collect();
    if !valid.iter().any(|ext| raw.ends_with(ext.as_str())) {
        let listed = Value::Sequence(valid.into_iter().map(Value::String).collect());
        issues.report(
            field,
            format!("File extension not in allowed set {}.", listed),
            rule.options(),
        );
    }
}

/// Errors that mean the path does not exist, including a path nested under
/// a regular file
fn is_missing(err: &io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

pub(super) fn check_directory(
    field: &str,
    value: &Value,
    rule: Rule<'_>,
    issues: &mut IssueCollector,
) {
    let Some(raw) = value.as_str() else {
        issues.report(
            field,
            format!("Expected directory path string, got {}.", value.type_name()),
            rule.options(),
        );
        return;
    };
    let path = Path::new(raw);

    if rule.flag("must_be_absolute") && !path.is_absolute() {
        issues.report(field, "Directory path must be absolute.", rule.options());
    }

    if rule.flag("must_exist") && !path.is_dir() {
        issues.report(
            field,
            format!("Directory does not exist or is not a directory: {}.", raw),
            rule.options(),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::checks::test_support::issues;
    use crate::value::Value;
    use std::fs;
    use tempfile::TempDir;

    fn messages(rule: &str, path: &std::path::Path) -> Vec<String> {
        issues(rule, Value::from(path.to_string_lossy().into_owned()))
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn test_existing_file_passes_all_checks() {
        let dir = TempDir::new().unwrap();
        let fasta = dir.path().join("hg38.fa");
        fs::write(&fasta, ">chr1\nACGT\n").unwrap();

        let rule = "{type: file, must_exist: true, must_be_readable: true, non_empty: true, \
                    must_be_absolute: true, extensions: ['.fa', '.fasta']}";
        assert!(messages(rule, &fasta).is_empty());
    }

    #[test]
    fn test_missing_file_short_circuits() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let rule = "{type: file, must_exist: true, must_be_readable: true, extensions: ['.fa']}";
        let found = messages(rule, &missing);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("File does not exist: "));
    }

    #[test]
    fn test_optional_existence_still_checks_readability_and_extension() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let rule = "{type: file, must_be_readable: true, non_empty: true, extensions: ['.fa']}";
        let found = messages(rule, &missing);
        assert_eq!(found.len(), 2);
        assert!(found[0].starts_with("File is not readable: "));
        assert_eq!(found[1], "File extension not in allowed set ['.fa'].");
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.fa");
        fs::write(&empty, "").unwrap();
        let found = messages("{type: file, must_exist: true, non_empty: true}", &empty);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("File is empty: "));
    }

    #[test]
    fn test_non_empty_skips_path_under_a_file() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("a.fa");
        fs::write(&parent, "x").unwrap();
        let nested = parent.join("child.fa");
        assert!(messages("{type: file, non_empty: true}", &nested).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_empty_reports_stat_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        let inner = locked.join("ref.fa");
        fs::write(&inner, "x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores directory permissions
        let readable = fs::metadata(&inner).is_ok();
        let found = messages("{type: file, non_empty: true}", &inner);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        assert_eq!(found, vec![format!("Unable to stat file: {}.", inner.display())]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let found = issues("{type: file, extensions: ['.fa']}", Value::from("foo.FA"));
        assert_eq!(found.len(), 1);
        assert!(issues("{type: file, extensions: ['.fa']}", Value::from("foo.fa")).is_empty());
        // literal suffix, not dotted components
        assert!(issues("{type: file, extensions: ['a']}", Value::from("foo.fa")).is_empty());
    }

    #[test]
    fn test_extensions_must_be_sequence() {
        let found = issues("{type: file, extensions: '.fa'}", Value::from("foo.fa"));
        assert_eq!(
            found[0].message,
            "Schema error: 'extensions' must be a list/sequence for file type."
        );
    }

    #[test]
    fn test_relative_file_path() {
        let found = issues("{type: file, must_be_absolute: true}", Value::from("data/ref.fa"));
        assert_eq!(found[0].message, "File path must be absolute.");
    }

    #[test]
    fn test_file_wrong_type() {
        let found = issues("{type: file, required: true}", Value::Int(123));
        assert_eq!(found[0].message, "Expected file path string, got int.");
    }

    #[test]
    fn test_directory_checks() {
        let dir = TempDir::new().unwrap();
        let rule = "{type: directory, must_exist: true, must_be_absolute: true}";
        assert!(messages(rule, dir.path()).is_empty());

        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let found = messages(rule, &file);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("Directory does not exist or is not a directory: "));
    }

    #[test]
    fn test_relative_directory() {
        let found = issues("{type: directory, must_be_absolute: true}", Value::from("mydir"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "Directory path must be absolute.");
    }

    #[test]
    fn test_directory_wrong_type() {
        let found = issues("{type: directory}", Value::Int(123));
        assert_eq!(found[0].message, "Expected directory path string, got int.");
    }
}
