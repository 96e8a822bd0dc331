//! `artifacthub.io/changes`: the chart changelog.
//!
//! Entries are either a bare string or an object with a `kind`, a
//! `description` and optional `links`.

use super::{element_path, nested_list, CHANGES};
use crate::document::Node;
use crate::validation::ValidationIssue;

/// Valid kinds for a change entry, sorted.
pub const VALID_CHANGE_KINDS: [&str; 6] =
    ["added", "changed", "deprecated", "fixed", "removed", "security"];

pub fn validate_changes(value: &Node) -> Vec<ValidationIssue> {
    let changes = match nested_list(CHANGES, value) {
        Ok(items) => items,
        Err(issue) => return vec![issue],
    };

    let mut issues = Vec::new();
    for (i, change) in changes.iter().enumerate() {
        let path = element_path(CHANGES, i);
        match change {
            // Simple string format is allowed
            Node::String(_) => {}
            Node::Mapping(_) => check_change_entry(&path, change, &mut issues),
            other => issues.push(ValidationIssue::error(
                path,
                format!("Must be a string or object, got {}", other.type_name()),
            )),
        }
    }
    issues
}

fn check_change_entry(path: &str, change: &Node, issues: &mut Vec<ValidationIssue>) {
    match change.get("kind") {
        None => issues.push(ValidationIssue::error(
            path,
            "Missing required field 'kind'",
        )),
        Some(kind) if !is_valid_kind(kind) => issues.push(ValidationIssue::error(
            path,
            format!(
                "Invalid kind '{}'. Must be one of: {}",
                kind,
                VALID_CHANGE_KINDS.join(", ")
            ),
        )),
        Some(_) => {}
    }

    match change.get("description") {
        None => issues.push(ValidationIssue::error(
            path,
            "Missing required field 'description'",
        )),
        Some(Node::String(description)) => {
            if description.trim().is_empty() {
                issues.push(ValidationIssue::error(
                    path,
                    "'description' cannot be empty",
                ));
            }
        }
        Some(_) => issues.push(ValidationIssue::error(
            path,
            "'description' must be a string",
        )),
    }

    match change.get("links") {
        None => {}
        Some(Node::List(links)) => {
            for (j, link) in links.iter().enumerate() {
                let link_path = format!("{}.links[{}]", path, j);
                match link {
                    Node::Mapping(_) => {
                        if !link.has("name") || !link.has("url") {
                            issues.push(ValidationIssue::error(
                                link_path,
                                "Must have 'name' and 'url'",
                            ));
                        }
                    }
                    _ => issues.push(ValidationIssue::error(link_path, "Must be an object")),
                }
            }
        }
        Some(_) => issues.push(ValidationIssue::error(path, "'links' must be a list")),
    }
}

fn is_valid_kind(kind: &Node) -> bool {
    kind.as_str()
        .is_some_and(|k| VALID_CHANGE_KINDS.contains(&k))
}
