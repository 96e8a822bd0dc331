//! `artifacthub.io/category`: a single slug from a fixed set.

use super::CATEGORY;
use crate::document::Node;
use crate::validation::ValidationIssue;

/// Category slugs accepted by Artifact Hub, sorted.
pub const VALID_CATEGORIES: [&str; 9] = [
    "ai-machine-learning",
    "database",
    "integration-delivery",
    "monitoring-logging",
    "networking",
    "security",
    "skip-prediction",
    "storage",
    "streaming-messaging",
];

pub fn validate_category(value: &Node) -> Vec<ValidationIssue> {
    // An unset category is not checked
    if value.is_falsy() {
        return Vec::new();
    }
    let category = value.to_string();

    if VALID_CATEGORIES.contains(&category.as_str()) {
        return Vec::new();
    }

    vec![ValidationIssue::error(
        CATEGORY,
        format!(
            "Invalid category '{}'. Must be one of: {}",
            category,
            VALID_CATEGORIES.join(", ")
        ),
    )]
}
