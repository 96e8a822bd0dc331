//! # chartlint - Artifact Hub annotation validator
//!
//! Checks the `artifacthub.io/*` annotations of Helm `Chart.yaml` manifests:
//! list-vs-object shape, required fields, enumerated values and boolean
//! strings.
//!
//! ## Modules
//!
//! - [`document`] - YAML document tree shared by all checks
//! - [`annotations`] - Per-annotation validators and the key registry
//! - [`chart`] - Whole-manifest validation
//! - [`validation`] - Issue and result types
//! - [`config`] - Environment-driven settings
//! - [`ui`] - Report markers and colors
//!
//! ## Example
//!
//! ```
//! use chartlint::chart::validate_chart_content;
//!
//! let manifest = r#"
//! apiVersion: v2
//! name: demo
//! version: 0.1.0
//! annotations:
//!   artifacthub.io/category: bogus
//! "#;
//!
//! let result = validate_chart_content(manifest);
//! assert!(!result.is_valid());
//! assert_eq!(result.issues.len(), 1);
//! ```

pub mod annotations;
pub mod chart;
pub mod config;
pub mod document;
pub mod ui;
pub mod validation;
