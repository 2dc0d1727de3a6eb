//! Input loading, output writing, and display helpers.
//!
//! This module provides the file-system half of the pipeline: reading and
//! validating the JSON task list, writing the rendered report, plus the
//! date-parsing and table-printing utilities shared by the read-only
//! commands.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ReportError;
use crate::fields::*;
use crate::task::TaskRecord;

/// Default input file read when `--input` is not given.
pub const DEFAULT_INPUT: &str = "tasks.json";
/// Default output file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Mirror of `TaskRecord` with every field optional, so missing required
/// fields surface as invalid input instead of a serde type error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    date_finished: Option<String>,
}

/// Load the task list from a JSON file.
///
/// The file must exist and hold a JSON array of task objects. Each record
/// needs `name` and `status`; `dateFinished` is optional and unknown fields
/// are ignored. Records come back in file order.
pub fn load_tasks(path: &Path) -> Result<Vec<TaskRecord>, ReportError> {
    if !path.exists() {
        return Err(ReportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&raw).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut tasks = Vec::with_capacity(records.len());
    for (i, rec) in records.into_iter().enumerate() {
        let name = rec.name.ok_or_else(|| {
            ReportError::invalid_input(format!(
                "task {} is missing required field `name`",
                i + 1
            ))
        })?;
        let status = rec.status.ok_or_else(|| {
            ReportError::invalid_input(format!(
                "task {} is missing required field `status`",
                i + 1
            ))
        })?;
        tasks.push(TaskRecord {
            name,
            status,
            date_finished: rec.date_finished,
        });
    }
    Ok(tasks)
}

/// Write the rendered report, replacing any previous contents.
pub fn write_report(content: &str, path: &Path) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a finish-date string as an ISO date; anything else is unparseable.
pub fn parse_finished_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Format a classified status for display.
pub fn format_status(s: TaskStatus) -> &'static str {
    match s {
        TaskStatus::Completed => "Completed",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::NotStarted => "Not Started",
    }
}

/// Format a category for display in table rows.
pub fn format_category(c: Category) -> &'static str {
    match c {
        Category::Content => "content",
        Category::Foundational => "foundational",
        Category::Additional => "additional",
    }
}

/// Print tasks in a formatted table, keyed by their 1-based input position.
pub fn print_table(rows: &[(usize, &TaskRecord)]) {
    // Header.
    println!(
        "{:<4} {:<12} {:<5} {:<24} {:<12} {}",
        "#", "Status", "%", "Categories", "Finished", "Name"
    );
    for (pos, t) in rows {
        let status = TaskStatus::classify(&t.status);
        let cats = categories_for(&t.name);
        let cats = if cats.is_empty() {
            "-".to_string()
        } else {
            cats.iter()
                .map(|c| format_category(*c))
                .collect::<Vec<_>>()
                .join(",")
        };
        println!(
            "{:<4} {:<12} {:<5} {:<24} {:<12} {}",
            pos,
            format_status(status),
            status.percent(),
            truncate(&cats, 24),
            t.date_finished.as_deref().unwrap_or("-"),
            t.name
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
