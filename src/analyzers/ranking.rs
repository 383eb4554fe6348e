//! Personal averages and tie-inclusive best/worst selection.

use crate::analyzers::types::StudentRecord;
use crate::analyzers::utility::mean;

/// Starting point for the maximum search; below any legal average.
const BEST_SENTINEL: f64 = -1.0;
/// Starting point for the minimum search; above any legal average.
const WORST_SENTINEL: f64 = 6.0;

/// Mean of all grades in `record`, or 0.0 if it has none.
pub fn personal_average(record: &StudentRecord) -> f64 {
    mean(record.grades().values().copied())
}

/// Returns every record whose personal average equals the highest one,
/// in input order.
pub fn find_best(records: &[StudentRecord]) -> Vec<StudentRecord> {
    let max = records
        .iter()
        .map(personal_average)
        .fold(BEST_SENTINEL, f64::max);

    records
        .iter()
        .filter(|r| personal_average(r) >= max)
        .cloned()
        .collect()
}

/// Returns every record whose personal average equals the lowest one,
/// in input order.
pub fn find_worst(records: &[StudentRecord]) -> Vec<StudentRecord> {
    let min = records
        .iter()
        .map(personal_average)
        .fold(WORST_SENTINEL, f64::min);

    records
        .iter()
        .filter(|r| personal_average(r) <= min)
        .cloned()
        .collect()
}
