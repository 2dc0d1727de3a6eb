//! # PT - Progress Tracker CLI
//!
//! A command-line generator that turns a JSON task list into a markdown
//! progress README with progress-bar images and per-category completion
//! percentages.
//!
//! ## Key Features
//!
//! - **Emoji Status Tracking**: ✅ completed, 🟡 in progress, 🔲 not started
//! - **Weighted Percentages**: completed tasks count 100%, in-progress 50%
//! - **Category Breakdown**: core content, foundational elements, and
//!   additional materials, matched from task names
//! - **Recent Updates**: the three most recently completed tasks plus
//!   everything currently in progress
//! - **Local File Storage**: a flat `tasks.json` in, a `README.md` out
//!
//! ## Quick Start
//!
//! ```bash
//! # Regenerate README.md from tasks.json in the current directory
//! pt
//!
//! # Explicit paths
//! pt --input docs/tasks.json --output docs/README.md generate
//!
//! # Inspect the task list without writing anything
//! pt list --status in-progress
//! pt summary
//! ```
//!
//! ## Installation
//!
//! ```bash
//! git clone <repository-url>
//! cd progress_tracker
//! cargo install --path .
//! ```
//!
//! Running `pt` with no arguments reads `./tasks.json` and overwrites
//! `./README.md`, printing the output path on success.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod report;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    let input = cli
        .input
        .unwrap_or_else(|| PathBuf::from(store::DEFAULT_INPUT));
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(store::DEFAULT_OUTPUT));

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => cmd_generate(&input, &output),
        Commands::List { status, category } => cmd_list(&input, status, category),
        Commands::Summary => cmd_summary(&input),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
