use grade_report::analyzers::analyzer::generate_report;
use grade_report::analyzers::ranking::personal_average;
use grade_report::analyzers::types::ReportOutcome;
use grade_report::error::{RecordError, ScanError};
use grade_report::output::{render_text, write_report};
use grade_report::scan::{ScanOptions, scan_directory};
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/grades")
}

#[test]
fn test_full_pipeline() {
    let candidates =
        scan_directory(&fixtures_dir(), &ScanOptions::default()).expect("Failed to scan fixtures");
    assert_eq!(candidates.len(), 8);

    let report = generate_report(&candidates);
    let facts = report.outcome.facts().expect("Expected report facts");

    assert_eq!(facts.student_count, 4);

    let best: Vec<_> = facts.best.iter().map(|s| s.name()).collect();
    assert_eq!(best, vec!["Ivanov Ivan Ivanovich"]);
    assert!((personal_average(&facts.best[0]) - 4.6).abs() < 1e-9);

    let worst: Vec<_> = facts.worst.iter().map(|s| s.name()).collect();
    assert_eq!(worst, vec!["Sidorov Sidor Sidorovich"]);

    assert_eq!(facts.subject_averages.len(), 7);
    assert_eq!(facts.subject_averages["Math"], 4.0);
    assert_eq!(facts.subject_averages["Literature"], 5.0);
    assert_eq!(facts.subject_averages["Advanced - Topics"], 5.0);
    assert!((facts.subject_averages["Chemistry"] - 11.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rejections_name_each_bad_file() {
    let candidates = scan_directory(&fixtures_dir(), &ScanOptions::default()).unwrap();
    let report = generate_report(&candidates);

    let rejected: Vec<_> = report
        .rejected
        .iter()
        .map(|r| (r.identity.as_str(), &r.error))
        .collect();

    assert_eq!(rejected.len(), 4);
    assert!(matches!(
        rejected[0],
        ("Morozov Dmitry Pavlovich", RecordError::InvalidGradeFormat { .. })
    ));
    assert!(matches!(
        rejected[1],
        ("Popov Oleg Igorevich", RecordError::GradeOutOfRange { grade: 7, .. })
    ));
    assert!(matches!(
        rejected[2],
        ("Smirnov Alexey", RecordError::InvalidIdentity { .. })
    ));
    assert!(matches!(
        rejected[3],
        ("Volkova Maria Petrovna", RecordError::TooFewSubjects { lines: 3 })
    ));
}

#[test]
fn test_report_file_round_trip_excludes_itself() {
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir(fixtures_dir()).unwrap() {
        let path = entry.unwrap().path();
        fs::copy(&path, dir.path().join(path.file_name().unwrap())).unwrap();
    }

    let options = ScanOptions::default();
    let first = generate_report(&scan_directory(dir.path(), &options).unwrap());
    let facts = first.outcome.facts().unwrap();
    let path = write_report(dir.path(), &options.report_file_name, facts).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), render_text(facts));

    // the report itself must not be picked up as a student file
    let second = scan_directory(dir.path(), &options).unwrap();
    assert_eq!(second.len(), 8);
}

#[test]
fn test_directory_without_valid_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Ivanov Ivan.txt"), "Math - 5\n").unwrap();

    let candidates = scan_directory(dir.path(), &ScanOptions::default()).unwrap();
    let report = generate_report(&candidates);

    assert!(matches!(report.outcome, ReportOutcome::NoValidRecords));
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn test_unavailable_directory_is_fatal() {
    let result = scan_directory(&fixtures_dir().join("missing"), &ScanOptions::default());
    assert!(matches!(result, Err(ScanError::DirectoryUnavailable { .. })));
}
