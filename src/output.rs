//! Rendering and persistence of grade reports.
//!
//! Supports the plain-text report (console and file), JSON, and a CSV run log.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Write;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::ranking::personal_average;
use crate::analyzers::types::{ReportFacts, StudentRecord};

/// Renders report facts as plain text.
///
/// Subjects are listed alphabetically. Group headings switch to the singular
/// when the group has exactly one student.
pub fn render_text(facts: &ReportFacts) -> String {
    let mut out = String::new();

    let mut subjects: Vec<_> = facts.subject_averages.iter().collect();
    subjects.sort_by(|a, b| a.0.cmp(b.0));

    let _ = writeln!(out, "Average grade by subject:");
    for (subject, avg) in subjects {
        let _ = writeln!(out, "{} - {:.2}", subject, avg);
    }

    let _ = writeln!(out);
    write_group(&mut out, "Best", &facts.best);
    let _ = writeln!(out);
    write_group(&mut out, "Worst", &facts.worst);
    let _ = writeln!(out);

    let _ = writeln!(out, "Students counted: {}", facts.student_count);
    out
}

fn write_group(out: &mut String, label: &str, group: &[StudentRecord]) {
    let noun = if group.len() == 1 { "student" } else { "students" };
    let _ = writeln!(out, "{} {}:", label, noun);
    for student in group {
        let _ = writeln!(
            out,
            "{} (average {:.2})",
            student.name(),
            personal_average(student)
        );
    }
}

/// Prints the text report to stdout between banner lines.
pub fn print_report(facts: &ReportFacts) {
    println!("\n--- Grade report ---\n");
    print!("{}", render_text(facts));
    println!("--- End of report ---\n");
}

/// Prints report facts as pretty-printed JSON to stdout.
pub fn print_json(facts: &ReportFacts) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(facts)?);
    Ok(())
}

/// Writes the text report to `dir/file_name`, replacing any previous report.
///
/// Returns the path written.
pub fn write_report(dir: &Path, file_name: &str, facts: &ReportFacts) -> Result<PathBuf> {
    let path = dir.join(file_name);

    if path.exists() {
        debug!(path = %path.display(), "Removing previous report");
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove old report {}", path.display()))?;
    }

    fs::write(&path, render_text(facts))
        .with_context(|| format!("failed to write report {}", path.display()))?;

    info!(path = %path.display(), "Report written");
    Ok(path)
}

/// One row of the CSV run log.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub directory: String,
    pub student_count: usize,
    pub rejected_count: usize,
    pub best_average: Option<f64>,
    pub worst_average: Option<f64>,
}

impl RunSummary {
    /// Summarizes a run; `facts` is `None` when no valid records were found.
    pub fn new(directory: &Path, facts: Option<&ReportFacts>, rejected_count: usize) -> Self {
        let group_average = |group: &[StudentRecord]| group.first().map(personal_average);

        RunSummary {
            timestamp: Utc::now(),
            directory: directory.display().to_string(),
            student_count: facts.map_or(0, |f| f.student_count),
            rejected_count,
            best_average: facts.and_then(|f| group_average(f.best.as_slice())),
            worst_average: facts.and_then(|f| group_average(f.worst.as_slice())),
        }
    }
}

/// Appends a [`RunSummary`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_run_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV record");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn student(name: &str, grades: &[(&str, u8)]) -> StudentRecord {
        StudentRecord::new(
            name,
            grades.iter().map(|(s, g)| (s.to_string(), *g)).collect(),
        )
    }

    fn sample_facts() -> ReportFacts {
        let a = student("Ivanov Ivan Ivanovich", &[("Math", 5), ("Physics", 4)]);
        let b = student("Petrov Petr Petrovich", &[("Math", 5), ("Physics", 4)]);
        let c = student("Sidorov Sidor Sidorovich", &[("Math", 3), ("Physics", 3)]);

        ReportFacts {
            subject_averages: HashMap::from([
                ("Physics".to_string(), 11.0 / 3.0),
                ("Math".to_string(), 13.0 / 3.0),
            ]),
            best: vec![a, b],
            worst: vec![c],
            student_count: 3,
        }
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample_facts());

        let expected = "\
Average grade by subject:
Math - 4.33
Physics - 3.67

Best students:
Ivanov Ivan Ivanovich (average 4.50)
Petrov Petr Petrovich (average 4.50)

Worst student:
Sidorov Sidor Sidorovich (average 3.00)

Students counted: 3
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_plural_worst() {
        let mut facts = sample_facts();
        facts.worst = facts.best.clone();
        facts.best.truncate(1);

        let text = render_text(&facts);
        assert!(text.contains("Best student:\n"));
        assert!(text.contains("Worst students:\n"));
    }

    #[test]
    fn test_print_report_does_not_panic() {
        print_report(&sample_facts());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_facts()).unwrap();
    }

    #[test]
    fn test_write_report_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("report.txt"), "stale").unwrap();

        let path = write_report(dir.path(), "report.txt", &sample_facts()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.ends_with("Students counted: 3\n"));
    }

    #[test]
    fn test_append_run_summary_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        let facts = sample_facts();

        let summary = RunSummary::new(Path::new("grades"), Some(&facts), 1);
        append_run_summary(&path, &summary).unwrap();
        append_run_summary(&path, &summary).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,"));
        assert!(lines[1].ends_with(",grades,3,1,4.5,3.0"));
    }

    #[test]
    fn test_run_summary_without_facts() {
        let summary = RunSummary::new(Path::new("grades"), None, 4);

        assert_eq!(summary.student_count, 0);
        assert_eq!(summary.rejected_count, 4);
        assert!(summary.best_average.is_none());
        assert!(summary.worst_average.is_none());
    }
}
