//! Validators for `artifacthub.io/*` chart annotations.
//!
//! Each recognized annotation key maps to one [`ValidatorFn`]. The table in
//! [`VALIDATORS`] fixes both the set of checked keys and the order their issues
//! are reported in. Keys outside the table are ignored.

use std::collections::BTreeMap;

use crate::document::{parse_document, Node};
use crate::validation::ValidationIssue;

pub mod category;
pub mod changes;
pub mod entries;
pub mod flags;

pub const CHANGES: &str = "artifacthub.io/changes";
pub const IMAGES: &str = "artifacthub.io/images";
pub const LINKS: &str = "artifacthub.io/links";
pub const MAINTAINERS: &str = "artifacthub.io/maintainers";
pub const CATEGORY: &str = "artifacthub.io/category";
pub const CONTAINS_SECURITY_UPDATES: &str = "artifacthub.io/containsSecurityUpdates";
pub const OPERATOR: &str = "artifacthub.io/operator";
pub const PRERELEASE: &str = "artifacthub.io/prerelease";

/// Checks one annotation value and returns every issue found.
pub type ValidatorFn = fn(&Node) -> Vec<ValidationIssue>;

/// Recognized annotation keys with their validators, in reporting order.
pub const VALIDATORS: &[(&str, ValidatorFn)] = &[
    (CHANGES, changes::validate_changes),
    (IMAGES, entries::validate_images),
    (LINKS, entries::validate_links),
    (MAINTAINERS, entries::validate_maintainers),
    (CATEGORY, category::validate_category),
    (CONTAINS_SECURITY_UPDATES, flags::validate_contains_security_updates),
    (OPERATOR, flags::validate_operator),
    (PRERELEASE, flags::validate_prerelease),
];

/// Run every registered validator whose key is present in `annotations`.
pub fn validate_annotations(annotations: &BTreeMap<String, Node>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (key, validator) in VALIDATORS {
        if let Some(value) = annotations.get(*key) {
            issues.extend(validator(value));
        }
    }
    issues
}

/// Resolve an annotation that holds a nested list document.
///
/// String values are parsed as their own YAML document; values already
/// written as structured YAML are used as-is. Null resolves to an empty list.
pub(crate) fn nested_list(key: &str, value: &Node) -> Result<Vec<Node>, ValidationIssue> {
    let document = match value {
        Node::String(text) => parse_document(text)
            .map_err(|e| ValidationIssue::error(key, format!("Invalid YAML syntax - {}", e)))?,
        other => other.clone(),
    };

    match document {
        Node::Null => Ok(Vec::new()),
        Node::List(items) => Ok(items),
        other => Err(ValidationIssue::error(
            key,
            format!("Must be a list, got {}", other.type_name()),
        )),
    }
}

/// Path of the `index`-th element under `parent`, e.g. `artifacthub.io/links[2]`.
pub(crate) fn element_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
