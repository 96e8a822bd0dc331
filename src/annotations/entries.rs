//! List-of-object annotations: `images`, `links` and `maintainers`.

use super::{element_path, nested_list, IMAGES, LINKS, MAINTAINERS};
use crate::document::Node;
use crate::validation::ValidationIssue;

pub fn validate_images(value: &Node) -> Vec<ValidationIssue> {
    validate_entries(IMAGES, value, &["image"])
}

pub fn validate_links(value: &Node) -> Vec<ValidationIssue> {
    validate_entries(LINKS, value, &["name", "url"])
}

pub fn validate_maintainers(value: &Node) -> Vec<ValidationIssue> {
    validate_entries(MAINTAINERS, value, &["name", "email"])
}

/// Every element must be an object carrying all of `required`. Each missing
/// field is reported on its own.
fn validate_entries(key: &str, value: &Node, required: &[&str]) -> Vec<ValidationIssue> {
    let entries = match nested_list(key, value) {
        Ok(items) => items,
        Err(issue) => return vec![issue],
    };

    let mut issues = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let path = element_path(key, i);
        if entry.as_mapping().is_none() {
            issues.push(ValidationIssue::error(path, "Must be an object"));
            continue;
        }
        for field in required {
            if !entry.has(field) {
                issues.push(ValidationIssue::error(
                    path.clone(),
                    format!("Missing required field '{}'", field),
                ));
            }
        }
    }
    issues
}
