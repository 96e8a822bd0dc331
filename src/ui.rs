//! Centralized UI formatting and color utilities
//!
//! Markers and colors for the per-file report lines. `colored` already
//! honors `NO_COLOR` and `CLICOLOR`.

use colored::{ColoredString, Colorize};

/// Marker printed before a file that passed
pub fn pass_marker() -> ColoredString {
    "✓".green()
}

/// Marker printed before a file that failed or was not found
pub fn fail_marker() -> ColoredString {
    "✗".red()
}

/// Color scheme for report text
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Cyan for file paths
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }
}

/// Report line formats
pub mod format {
    use super::{colors, fail_marker, pass_marker};
    use crate::validation::{Severity, ValidationIssue};

    /// `✓ <path>: Valid`
    pub fn valid_line(path: &str) -> String {
        format!(
            "{} {}: {}",
            pass_marker(),
            colors::identifier(path),
            colors::success("Valid")
        )
    }

    /// `✗ <path>:` header above the issue lines
    pub fn invalid_header(path: &str) -> String {
        format!("{} {}:", fail_marker(), colors::identifier(path))
    }

    /// `✗ <path>: File not found`
    pub fn not_found_line(path: &str) -> String {
        format!(
            "{} {}: {}",
            fail_marker(),
            colors::identifier(path),
            colors::error("File not found")
        )
    }

    /// Indented issue line; warnings are highlighted
    pub fn issue_line(issue: &ValidationIssue) -> String {
        let text = issue.to_string();
        match issue.severity {
            Severity::Warning => format!("  {}", colors::warning(&text)),
            Severity::Error => format!("  {}", text),
        }
    }
}
