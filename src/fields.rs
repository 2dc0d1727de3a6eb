//! Status markers and category rules for task classification.
//!
//! This module is the single place where the substring rules live: the three
//! recognised status markers and the keyword tables that sort task names into
//! the report's overlapping categories. Everything downstream works with the
//! tagged values, never with inline string checks.

use clap::ValueEnum;

/// Marker denoting a completed task.
pub const COMPLETED_MARKER: &str = "✅";
/// Marker denoting a task currently being worked on.
pub const IN_PROGRESS_MARKER: &str = "🟡";
/// Marker denoting a task not yet begun.
pub const NOT_STARTED_MARKER: &str = "🔲";

/// Name keywords that place a task in the foundational category.
pub const FOUNDATIONAL_KEYWORDS: [&str; 4] =
    ["Project Setup", "Landing Page", "Documentation", "Deployment"];

/// Name keywords that place a task in the additional-materials category and
/// exclude it from core content.
pub const ADDITIONAL_KEYWORDS: [&str; 2] = ["Tutorials", "Testing"];

/// Completion state derived from a task's raw status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl TaskStatus {
    /// Classify a raw status string by marker.
    ///
    /// Only one marker is tested per branch: a string carrying both the
    /// completed and in-progress markers counts as completed, and a string
    /// carrying neither recognised marker counts as not started.
    pub fn classify(status: &str) -> Self {
        if status.contains(COMPLETED_MARKER) {
            TaskStatus::Completed
        } else if status.contains(IN_PROGRESS_MARKER) {
            TaskStatus::InProgress
        } else {
            TaskStatus::NotStarted
        }
    }

    /// Progress contribution of a single task in this state.
    pub fn percent(self) -> u8 {
        match self {
            TaskStatus::Completed => 100,
            TaskStatus::InProgress => 50,
            TaskStatus::NotStarted => 0,
        }
    }
}

/// Overlapping report categories selected by name-matching rules.
///
/// A task may belong to zero, one, or several categories at once. Declaration
/// order is the order the category summaries appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Content,
    Foundational,
    Additional,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 3] =
        [Category::Content, Category::Foundational, Category::Additional];

    /// Whether a task with this name belongs to the category.
    pub fn matches(self, name: &str) -> bool {
        match self {
            Category::Foundational => {
                FOUNDATIONAL_KEYWORDS.iter().any(|kw| name.contains(kw))
            }
            Category::Content => {
                name.chars().next().map_or(false, |c| c.is_ascii_digit())
                    && !ADDITIONAL_KEYWORDS.iter().any(|kw| name.contains(kw))
            }
            Category::Additional => {
                ADDITIONAL_KEYWORDS.iter().any(|kw| name.contains(kw))
            }
        }
    }

    /// Section heading used in the report.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Content => "Core Content",
            Category::Foundational => "Foundational Elements",
            Category::Additional => "Additional Materials",
        }
    }

    /// Noun used in the per-category count lines.
    pub fn noun(self) -> &'static str {
        match self {
            Category::Content => "section",
            Category::Foundational => "element",
            Category::Additional => "item",
        }
    }
}

/// All categories a task name belongs to, in report order.
pub fn categories_for(name: &str) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|c| c.matches(name))
        .collect()
}
