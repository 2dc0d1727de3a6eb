//! Task record structure as loaded from the input file.
//!
//! This module defines the `TaskRecord` struct that represents a single entry
//! in the task list: a name, a raw status string, and an optional finish date.

use serde::{Deserialize, Serialize};

/// A single task as it appears in the input file.
///
/// The status is kept as the raw string from the file; classification into
/// completed / in-progress / not-started happens via marker matching in
/// `fields::TaskStatus::classify`. The finish date is likewise kept as the
/// original string so the report can echo it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub date_finished: Option<String>,
}
