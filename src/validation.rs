//! Issue and result types shared by the annotation checks.
//!
//! Rule violations are plain data. Nothing here returns `Err`; a file is
//! valid exactly when its [`ValidationResult`] holds no issues.

use std::fmt;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Style problem that still fails the file
    Warning,
    /// Schema violation
    Error,
}

/// A single validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Severity of the issue
    pub severity: Severity,
    /// Annotation path the issue points at, e.g. `artifacthub.io/changes[0].links[1]`
    pub location: Option<String>,
    /// Message describing the issue
    pub message: String,
}

impl ValidationIssue {
    /// Create an error-level issue attached to `location`
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: Some(location.into()),
            message: message.into(),
        }
    }

    /// Create an error-level issue about the file as a whole
    pub fn file_error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: None,
            message: message.into(),
        }
    }

    /// Create a warning-level issue about the file as a whole
    pub fn file_warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Result of validating one manifest
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationResult {
    /// Issues in the order they were found
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file passes only with zero issues; warnings fail it too.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Add an issue to the result
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    /// Rendered issue lines, without indentation
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}
