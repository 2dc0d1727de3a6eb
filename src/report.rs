//! Progress aggregation and markdown rendering.
//!
//! This module turns a task list into the finished report: classified status
//! counts roll up into weighted percentages, and `generate` assembles the
//! fixed markdown layout with progress-bar image links for the overall view,
//! each task row, and each category block.

use chrono::NaiveDate;

use crate::error::ReportError;
use crate::fields::*;
use crate::store::parse_finished_date;
use crate::task::TaskRecord;

/// Base URL of the progress-bar image service.
pub const PROGRESS_BAR_URL: &str = "https://progress-bar.xyz";

/// Maximum number of completed entries shown under Recent Updates.
pub const RECENT_LIMIT: usize = 3;

/// Status counts over one set of tasks.
///
/// Built fresh for each aggregation, so the overall report and each category
/// block get their own instance and no counts leak between sections.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl ProgressStats {
    /// Count classified statuses over any iterable of tasks.
    pub fn count<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a TaskRecord>,
    {
        let mut stats = ProgressStats::default();
        for t in tasks {
            match TaskStatus::classify(&t.status) {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::NotStarted => stats.not_started += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.not_started
    }

    /// Weighted completion percentage: completed counts 100, in progress 50.
    ///
    /// Rounded half up to the nearest integer; an empty set is 0.
    pub fn percent(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let raw = (self.completed * 100 + self.in_progress * 50) as f64 / total as f64;
        raw.round() as u8
    }
}

/// Markdown image link for a progress bar at the given percentage.
pub fn progress_image(percent: u8) -> String {
    format!("![progress]({PROGRESS_BAR_URL}/{percent}/)")
}

/// Completed tasks with a finish date, most recent first, capped at
/// `RECENT_LIMIT`.
///
/// Dates that fail to parse sort as oldest; the sort is stable, so ties and
/// unparseable entries keep their input order.
fn recent_completions(tasks: &[TaskRecord]) -> Vec<&TaskRecord> {
    let mut completed: Vec<(Option<NaiveDate>, &TaskRecord)> = tasks
        .iter()
        .filter(|t| {
            TaskStatus::classify(&t.status) == TaskStatus::Completed
                && t.date_finished.as_deref().map_or(false, |d| !d.is_empty())
        })
        .map(|t| {
            let date = parse_finished_date(t.date_finished.as_deref().unwrap_or(""));
            (date, t)
        })
        .collect();
    completed.sort_by(|a, b| b.0.cmp(&a.0));
    completed.truncate(RECENT_LIMIT);
    completed.into_iter().map(|(_, t)| t).collect()
}

/// Render the full progress report for a task list.
///
/// Pure function: no file access, deterministic for a given input. Tasks
/// appear in the main table in input order with their raw status and date
/// strings untouched. Fails only when the list is empty, which would leave
/// every percentage undefined.
pub fn generate(tasks: &[TaskRecord]) -> Result<String, ReportError> {
    if tasks.is_empty() {
        return Err(ReportError::invalid_input("task list is empty"));
    }

    let overall = ProgressStats::count(tasks);

    let mut md = String::new();
    md.push_str("# Computational Chemistry Project Progress\n\n");
    md.push_str("## Legend\n");
    md.push_str(&format!("- {COMPLETED_MARKER} Completed = 100%\n"));
    md.push_str(&format!("- {IN_PROGRESS_MARKER} In Progress = 50%\n"));
    md.push_str(&format!("- {NOT_STARTED_MARKER} Not Started = 0%\n\n"));
    md.push_str("## Project Status Overview\n");
    md.push_str(&progress_image(overall.percent()));
    md.push('\n');

    md.push_str("\n## Tasks Status\n\n");
    md.push_str("| Main Section/Task | Status | Progress | Date Finished |\n");
    md.push_str("|-------------------|--------|----------|--------------|\n");
    for t in tasks {
        let pct = TaskStatus::classify(&t.status).percent();
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            t.name,
            t.status,
            progress_image(pct),
            t.date_finished.as_deref().unwrap_or("")
        ));
    }

    md.push_str("\n## Progress by Category\n");
    for cat in Category::ALL {
        let members: Vec<&TaskRecord> = tasks.iter().filter(|t| cat.matches(&t.name)).collect();
        let stats = ProgressStats::count(members.iter().copied());
        let noun = cat.noun();
        md.push_str(&format!("\n### {}\n", cat.heading()));
        md.push_str(&progress_image(stats.percent()));
        md.push('\n');
        md.push_str(&format!("- {} {}(s) completed\n", stats.completed, noun));
        md.push_str(&format!("- {} {}(s) in progress\n", stats.in_progress, noun));
        md.push_str(&format!("- {} {}(s) not started\n", stats.not_started, noun));
    }

    md.push_str("\n## Recent Updates\n");
    for t in recent_completions(tasks) {
        let date = t.date_finished.as_deref().unwrap_or("");
        md.push_str(&format!(
            "- {COMPLETED_MARKER} Completed {} ({date})\n",
            t.name
        ));
    }
    for t in tasks {
        if TaskStatus::classify(&t.status) == TaskStatus::InProgress {
            md.push_str(&format!(
                "- {IN_PROGRESS_MARKER} Started work on {}\n",
                t.name
            ));
        }
    }

    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(name: &str, status: &str, date: Option<&str>) -> TaskRecord {
        TaskRecord {
            name: name.into(),
            status: status.into(),
            date_finished: date.map(|d| d.into()),
        }
    }

    #[test]
    fn test_stats_count_classifies() {
        let tasks = vec![
            make_task("a", "✅", None),
            make_task("b", "✅ shipped", None),
            make_task("c", "🟡", None),
            make_task("d", "🔲", None),
            make_task("e", "", None),
        ];
        let stats = ProgressStats::count(&tasks);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.not_started, 2);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_percent_formula() {
        let stats = ProgressStats {
            completed: 1,
            in_progress: 1,
            not_started: 0,
        };
        assert_eq!(stats.percent(), 75);
        let stats = ProgressStats {
            completed: 2,
            in_progress: 1,
            not_started: 0,
        };
        // 250 / 3 = 83.33…
        assert_eq!(stats.percent(), 83);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 50 / 4 = 12.5
        let stats = ProgressStats {
            completed: 0,
            in_progress: 1,
            not_started: 3,
        };
        assert_eq!(stats.percent(), 13);
    }

    #[test]
    fn test_percent_empty_is_zero() {
        assert_eq!(ProgressStats::default().percent(), 0);
    }

    #[test]
    fn test_progress_image_url() {
        assert_eq!(
            progress_image(75),
            "![progress](https://progress-bar.xyz/75/)"
        );
        assert_eq!(
            progress_image(0),
            "![progress](https://progress-bar.xyz/0/)"
        );
    }

    #[test]
    fn test_generate_empty_input_errors() {
        let err = generate(&[]).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput { .. }));
    }

    #[test]
    fn test_generate_full_document() {
        let tasks = vec![
            make_task("1. Project Setup", "✅", Some("2024-01-05")),
            make_task("2. Molecular Dynamics", "🟡", None),
            make_task("3. Tutorials", "🔲", None),
        ];
        let report = generate(&tasks).unwrap();
        let expected = [
            "# Computational Chemistry Project Progress",
            "",
            "## Legend",
            "- ✅ Completed = 100%",
            "- 🟡 In Progress = 50%",
            "- 🔲 Not Started = 0%",
            "",
            "## Project Status Overview",
            "![progress](https://progress-bar.xyz/50/)",
            "",
            "## Tasks Status",
            "",
            "| Main Section/Task | Status | Progress | Date Finished |",
            "|-------------------|--------|----------|--------------|",
            "| 1. Project Setup | ✅ | ![progress](https://progress-bar.xyz/100/) | 2024-01-05 |",
            "| 2. Molecular Dynamics | 🟡 | ![progress](https://progress-bar.xyz/50/) |  |",
            "| 3. Tutorials | 🔲 | ![progress](https://progress-bar.xyz/0/) |  |",
            "",
            "## Progress by Category",
            "",
            "### Core Content",
            "![progress](https://progress-bar.xyz/75/)",
            "- 1 section(s) completed",
            "- 1 section(s) in progress",
            "- 0 section(s) not started",
            "",
            "### Foundational Elements",
            "![progress](https://progress-bar.xyz/100/)",
            "- 1 element(s) completed",
            "- 0 element(s) in progress",
            "- 0 element(s) not started",
            "",
            "### Additional Materials",
            "![progress](https://progress-bar.xyz/0/)",
            "- 0 item(s) completed",
            "- 0 item(s) in progress",
            "- 1 item(s) not started",
            "",
            "## Recent Updates",
            "- ✅ Completed 1. Project Setup (2024-01-05)",
            "- 🟡 Started work on 2. Molecular Dynamics",
        ]
        .join("\n")
            + "\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_generate_overall_percentage_worked_example() {
        let tasks = vec![
            make_task("1. Project Setup", "✅", Some("2024-01-01")),
            make_task("2. Tutorials", "🟡", None),
        ];
        let report = generate(&tasks).unwrap();
        assert!(report
            .contains("## Project Status Overview\n![progress](https://progress-bar.xyz/75/)\n"));
    }

    #[test]
    fn test_generate_rows_keep_raw_strings_and_order() {
        let tasks = vec![
            make_task("Beta", "✅ shipped early", Some("soon")),
            make_task("Alpha", "🔲", None),
        ];
        let report = generate(&tasks).unwrap();
        assert!(report
            .contains("| Beta | ✅ shipped early | ![progress](https://progress-bar.xyz/100/) | soon |"));
        assert!(report.contains("| Alpha | 🔲 | ![progress](https://progress-bar.xyz/0/) |  |"));
        // Input order, not alphabetical.
        let beta = report.find("| Beta |").unwrap();
        let alpha = report.find("| Alpha |").unwrap();
        assert!(beta < alpha);
    }

    #[test]
    fn test_recent_updates_capped_at_three_most_recent() {
        let tasks = vec![
            make_task("First", "✅", Some("2024-01-01")),
            make_task("Third", "✅", Some("2024-03-01")),
            make_task("Second", "✅", Some("2024-02-01")),
            make_task("Dateless", "✅", None),
            make_task("Fourth", "✅", Some("2024-04-01")),
        ];
        let report = generate(&tasks).unwrap();
        let recent = report.split("## Recent Updates\n").nth(1).unwrap();
        let expected = [
            "- ✅ Completed Fourth (2024-04-01)",
            "- ✅ Completed Third (2024-03-01)",
            "- ✅ Completed Second (2024-02-01)",
        ]
        .join("\n")
            + "\n";
        assert_eq!(recent, expected);
    }

    #[test]
    fn test_recent_updates_unparseable_dates_sort_oldest() {
        let tasks = vec![
            make_task("Vague", "✅", Some("sometime in spring")),
            make_task("Old", "✅", Some("2023-12-01")),
            make_task("New", "✅", Some("2024-01-15")),
        ];
        let report = generate(&tasks).unwrap();
        let recent = report.split("## Recent Updates\n").nth(1).unwrap();
        let expected = [
            "- ✅ Completed New (2024-01-15)",
            "- ✅ Completed Old (2023-12-01)",
            "- ✅ Completed Vague (sometime in spring)",
        ]
        .join("\n")
            + "\n";
        assert_eq!(recent, expected);
    }

    #[test]
    fn test_started_work_lines_follow_input_order() {
        let tasks = vec![
            make_task("Zeta", "🟡", None),
            make_task("Both markers", "✅🟡", Some("2024-02-02")),
            make_task("Alpha", "🟡", None),
        ];
        let report = generate(&tasks).unwrap();
        let zeta = report.find("- 🟡 Started work on Zeta").unwrap();
        let alpha = report.find("- 🟡 Started work on Alpha").unwrap();
        assert!(zeta < alpha);
        // Dual-marker statuses classify completed and stay out of this list.
        assert!(!report.contains("Started work on Both markers"));
        assert!(report.contains("- ✅ Completed Both markers (2024-02-02)"));
    }

    #[test]
    fn test_category_block_empty_shows_zero() {
        // No name matches Additional Materials.
        let tasks = vec![make_task("1. Basis Sets", "✅", Some("2024-01-01"))];
        let report = generate(&tasks).unwrap();
        let additional = report.split("### Additional Materials\n").nth(1).unwrap();
        assert!(additional.starts_with("![progress](https://progress-bar.xyz/0/)\n"));
        assert!(additional.contains("- 0 item(s) completed"));
    }
}
