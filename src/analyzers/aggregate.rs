use crate::analyzers::types::StudentRecord;
use crate::analyzers::utility::mean;
use std::collections::HashMap;

/// Computes the mean grade of every subject across `records`.
///
/// Each subject is averaged over the students that have a grade for it, so a
/// subject missing from some files is not pulled down by them. Subjects only
/// appear in the result if at least one record grades them.
pub fn averages_by_subject(records: &[StudentRecord]) -> HashMap<String, f64> {
    let mut subject_series: HashMap<&str, Vec<u8>> = HashMap::new();

    for record in records {
        for (subject, &grade) in record.grades() {
            subject_series.entry(subject.as_str()).or_default().push(grade);
        }
    }

    subject_series
        .into_iter()
        .map(|(subject, series)| (subject.to_string(), mean(series)))
        .collect()
}
