use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Minimal chart metadata without annotations
pub const BASE_CHART: &str = "apiVersion: v2\nname: demo\nversion: 1.0.0\n";

/// TestHarness provides an isolated charts directory and runs the
/// `validate` binary against files inside it.
pub struct TestHarness {
    pub dir: TempDir,
    pub validate_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            validate_binary: PathBuf::from(env!("CARGO_BIN_EXE_validate")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `charts/<chart>/Chart.yaml` and returns its path relative to
    /// the harness directory.
    pub fn write_chart(&self, chart: &str, content: &str) -> String {
        self.write_file(&format!("charts/{}/Chart.yaml", chart), content)
    }

    /// Chart manifest made of the base metadata plus an `annotations` block.
    /// Each entry is written as `  key: value` verbatim.
    pub fn write_annotated_chart(&self, chart: &str, annotations: &[(&str, &str)]) -> String {
        let mut content = format!("{}annotations:\n", BASE_CHART);
        for (key, value) in annotations {
            content.push_str(&format!("  {}: {}\n", key, value));
        }
        self.write_chart(chart, &content)
    }

    /// Writes an arbitrary file and returns its path relative to the harness directory.
    pub fn write_file(&self, relative: &str, content: &str) -> String {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        relative.to_string()
    }

    /// Executes the validate binary with the given arguments in the harness
    /// directory, with colors disabled.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        Command::new(&self.validate_binary)
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("CHARTLINT_QUIET")
            .env_remove("CHARTLINT_MANIFEST_NAME")
            .envs(envs.iter().copied())
            .output()
            .expect("Failed to run validate binary")
    }
}

/// Stdout of a finished run as text
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
