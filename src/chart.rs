//! Validation of a whole `Chart.yaml` manifest.
//!
//! Read failures, unparsable YAML, empty documents and non-mapping documents
//! end the check for that file. Everything else is collected so one run
//! reports every defect.

use std::fs;
use std::path::Path;

use crate::annotations;
use crate::document::{parse_document, Node};
use crate::validation::{ValidationIssue, ValidationResult};

/// Key of the annotations sub-mapping in a chart manifest
pub const ANNOTATIONS_KEY: &str = "annotations";

/// Read and validate the manifest at `path`.
pub fn validate_chart_file(path: &Path) -> ValidationResult {
    match fs::read_to_string(path) {
        Ok(content) => validate_chart_content(&content),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.add_issue(ValidationIssue::file_error(format!(
                "Error reading file: {}",
                e
            )));
            result
        }
    }
}

/// Validate manifest text.
pub fn validate_chart_content(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Applies to the whole file, not only the annotations block
    if content.contains('\t') {
        result.add_issue(ValidationIssue::file_warning(
            "File contains tabs - use spaces for indentation",
        ));
    }

    let chart = match parse_document(content) {
        Ok(node) => node,
        Err(e) => {
            result.add_issue(ValidationIssue::file_error(format!(
                "Invalid YAML syntax: {}",
                e
            )));
            return result;
        }
    };

    let annotations = match &chart {
        Node::Null => {
            result.add_issue(ValidationIssue::file_error("Empty Chart.yaml file"));
            return result;
        }
        Node::Mapping(_) => chart.get(ANNOTATIONS_KEY),
        other => {
            result.add_issue(ValidationIssue::file_error(format!(
                "Chart.yaml must be a mapping, got {}",
                other.type_name()
            )));
            return result;
        }
    };

    match annotations {
        None => {}
        Some(node) if node.is_falsy() => {}
        Some(Node::Mapping(map)) => result.extend(annotations::validate_annotations(map)),
        Some(other) => result.add_issue(ValidationIssue::error(
            ANNOTATIONS_KEY,
            format!("Must be a mapping, got {}", other.type_name()),
        )),
    }

    result
}
