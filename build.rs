use std::process::Command;

/// Embeds the commit and build date shown by `validate --version`.
/// CI can pin both through `GIT_SHA` / `BUILD_DATE`.
fn main() {
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");

    let git_sha = env_or_command("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    let build_date = env_or_command("BUILD_DATE", "date", &["+%Y-%m-%d"]);

    println!("cargo:rustc-env=GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}

fn env_or_command(var: &str, program: &str, args: &[&str]) -> String {
    if let Ok(value) = std::env::var(var) {
        return value;
    }
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
