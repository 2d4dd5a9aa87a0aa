//! YAML Schema Validator
//!
//! Validates a user-supplied configuration document against a declarative
//! schema (rules) document. Every violation is collected instead of
//! stopping at the first one.
//!
//! ## Features
//!
//! - **Required/optional fields**: missing and null values handled per field
//! - **Primitive types**: `string`, `int`, `float`, `bool`
//! - **Filesystem types**: `file` and `directory` existence and properties
//! - **Enumerations and patterns**: `enum` with `allowed`, anchored `regex`
//! - **Ranges and lists**: `min`/`max`, item counts, per-element `element_type`
//!
//! ## Schema example
//!
//! ```yaml
//! _about: reserved keys start with an underscore and are ignored
//! reference_genome:
//!   type: file
//!   required: true
//!   must_exist: true
//!   must_be_readable: true
//!   non_empty: true
//!   extensions: [".fa", ".fasta"]
//! depth_metric:
//!   type: enum
//!   required: true
//!   allowed: ["median", "trimmed_mean", "MAD"]
//! ```
//!
//! ## Usage
//!
//! ```
//! use yaml_schema_validator::{parse_document, Validator};
//!
//! let schema = parse_document("name: {type: string, required: true}").unwrap();
//! let config = parse_document("{}").unwrap();
//!
//! let issues = Validator::new().validate(&schema, &config);
//! assert_eq!(issues[0].to_string(), "name: Missing required field.");
//! ```

mod checks;
pub mod error;
pub mod issue;
pub mod loader;
pub mod rule;
pub mod settings;
pub mod validator;
pub mod value;

pub use error::{Error, Result, SchemaValidationError};
pub use issue::{IssueCollector, ValidationIssue};
pub use loader::{load_document, parse_document};
pub use rule::{Rule, RuleKind};
pub use settings::{OutputFormat, ValidatorSettings};
pub use validator::{assert_valid_config, validate_config_against_schema, Validator};
pub use value::{Document, Value};
