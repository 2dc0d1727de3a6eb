use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Progress README generator CLI.
/// Reads ./tasks.json and writes ./README.md unless overridden.
#[derive(Parser)]
#[command(name = "pt", version, about = "Markdown progress report generator")]
pub struct Cli {
    /// Path to the JSON task list.
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Path the rendered README is written to.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Defaults to `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}
