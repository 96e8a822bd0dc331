use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

#[derive(Parser, Debug)]
#[command(name = "validate")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Validate artifacthub.io annotations in Chart.yaml files", long_about = None)]
#[command(
    after_help = "Paths whose file name is not Chart.yaml are skipped.\nExit status is 1 if any file is missing or fails validation."
)]
pub struct Cli {
    /// Chart.yaml files to validate
    #[arg(required = true, value_name = "PATH")]
    pub files: Vec<PathBuf>,
}
