//! Boolean annotations stored as the strings `"true"` / `"false"`.

use super::{CONTAINS_SECURITY_UPDATES, OPERATOR, PRERELEASE};
use crate::document::Node;
use crate::validation::ValidationIssue;

pub fn validate_contains_security_updates(value: &Node) -> Vec<ValidationIssue> {
    validate_bool_string(CONTAINS_SECURITY_UPDATES, value)
}

pub fn validate_operator(value: &Node) -> Vec<ValidationIssue> {
    validate_bool_string(OPERATOR, value)
}

pub fn validate_prerelease(value: &Node) -> Vec<ValidationIssue> {
    validate_bool_string(PRERELEASE, value)
}

/// Case-insensitive `true`/`false`. Unquoted YAML booleans render the same way
/// and pass.
fn validate_bool_string(key: &str, value: &Node) -> Vec<ValidationIssue> {
    let literal = value.to_string();
    match literal.to_lowercase().as_str() {
        "true" | "false" => Vec::new(),
        _ => vec![ValidationIssue::error(
            key,
            format!("Must be 'true' or 'false', got '{}'", literal),
        )],
    }
}
