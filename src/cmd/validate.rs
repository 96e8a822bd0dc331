//! `validate <path>...`: check each named Chart.yaml and report per file.

use anyhow::Result;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use chartlint::chart::validate_chart_file;
use chartlint::config::Config;
use chartlint::ui;
use chartlint::validation::ValidationResult;

/// What happened to one command-line path
#[derive(Debug)]
pub enum FileOutcome {
    /// Path does not exist
    NotFound,
    /// Exists but is not named like a manifest; produces no output
    Skipped,
    /// Manifest was validated
    Checked(ValidationResult),
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        match self {
            FileOutcome::NotFound => true,
            FileOutcome::Skipped => false,
            FileOutcome::Checked(result) => !result.is_valid(),
        }
    }
}

/// Classify and, when it is a manifest, validate a single path.
pub fn check_path(path: &Path, config: &Config) -> FileOutcome {
    if !path.exists() {
        return FileOutcome::NotFound;
    }
    if path.file_name() != Some(OsStr::new(&config.manifest_name)) {
        return FileOutcome::Skipped;
    }
    FileOutcome::Checked(validate_chart_file(path))
}

/// Validate `files` in order, writing the report to `out`.
///
/// Returns `true` when every named manifest exists and is valid.
pub fn cmd_validate(files: &[PathBuf], config: &Config, out: &mut impl Write) -> Result<bool> {
    let mut all_valid = true;

    for path in files {
        let name = path.display().to_string();
        let outcome = check_path(path, config);
        if outcome.is_failure() {
            all_valid = false;
        }

        match outcome {
            FileOutcome::NotFound => writeln!(out, "{}", ui::format::not_found_line(&name))?,
            FileOutcome::Skipped => {}
            FileOutcome::Checked(result) if result.is_valid() => {
                if !config.quiet {
                    writeln!(out, "{}", ui::format::valid_line(&name))?;
                }
            }
            FileOutcome::Checked(result) => {
                writeln!(out, "{}", ui::format::invalid_header(&name))?;
                for issue in &result.issues {
                    writeln!(out, "{}", ui::format::issue_line(issue))?;
                }
            }
        }
    }

    Ok(all_valid)
}
