//! CLI entry point for the Chart.yaml annotation validator.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use std::io;

use chartlint::config::Config;
use cli::Cli;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures; usage errors exit 1
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            std::process::exit(code);
        }
    };

    let config = Config::from_env();
    let stdout = io::stdout();
    let all_valid = cmd::validate::cmd_validate(&cli.files, &config, &mut stdout.lock())?;

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}
