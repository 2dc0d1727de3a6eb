//! Command implementations for the CLI interface.
//!
//! This module contains the subcommand definitions and their handlers: the
//! default report generation plus the read-only list, summary, and shell
//! completion commands. Handlers print a one-line confirmation on success
//! and exit non-zero with the error on failure.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use std::path::Path;

use crate::fields::*;
use crate::report::{self, ProgressStats};
use crate::store::*;
use crate::task::TaskRecord;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the progress README from the task list (the default).
    Generate,

    /// List tasks with their classified status and categories.
    List {
        /// Filter by classified status.
        #[arg(long, value_enum)]
        status: Option<TaskStatus>,
        /// Filter by category membership.
        #[arg(long, value_enum)]
        category: Option<Category>,
    },

    /// Print overall and per-category progress without writing a file.
    Summary,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_or_exit(input: &Path) -> Vec<TaskRecord> {
    match load_tasks(input) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Error loading tasks: {e}");
            std::process::exit(1);
        }
    }
}

/// Generate the report from the input file and write it to the output path.
pub fn cmd_generate(input: &Path, output: &Path) {
    let tasks = load_or_exit(input);
    let content = match report::generate(&tasks) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error generating report: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = write_report(&content, output) {
        eprintln!("Error writing report: {e}");
        std::process::exit(1);
    }
    println!("Progress README updated at {}", output.display());
}

/// List tasks in input order with optional status and category filters.
pub fn cmd_list(input: &Path, status: Option<TaskStatus>, category: Option<Category>) {
    let tasks = load_or_exit(input);
    let rows: Vec<(usize, &TaskRecord)> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (i + 1, t))
        .filter(|(_, t)| {
            if let Some(s) = status {
                if TaskStatus::classify(&t.status) != s {
                    return false;
                }
            }
            if let Some(c) = category {
                if !c.matches(&t.name) {
                    return false;
                }
            }
            true
        })
        .collect();
    print_table(&rows);
}

/// Print overall and per-category percentages and counts.
pub fn cmd_summary(input: &Path) {
    let tasks = load_or_exit(input);
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    let overall = ProgressStats::count(&tasks);
    println!(
        "{:<22} {:<5} {:<10} {:<12} {}",
        "Scope", "%", "Completed", "In Progress", "Not Started"
    );
    println!(
        "{:<22} {:<5} {:<10} {:<12} {}",
        "Overall",
        overall.percent(),
        overall.completed,
        overall.in_progress,
        overall.not_started
    );
    for cat in Category::ALL {
        let members: Vec<&TaskRecord> = tasks.iter().filter(|t| cat.matches(&t.name)).collect();
        let stats = ProgressStats::count(members.iter().copied());
        println!(
            "{:<22} {:<5} {:<10} {:<12} {}",
            cat.heading(),
            stats.percent(),
            stats.completed,
            stats.in_progress,
            stats.not_started
        );
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
