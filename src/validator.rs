//! Structural checks on student identities and grade values.

/// Lowest admissible grade.
pub const MIN_GRADE: i32 = 1;
/// Highest admissible grade.
pub const MAX_GRADE: i32 = 5;

/// Returns `true` when `candidate` splits into exactly three
/// whitespace-separated tokens (surname, given name, patronymic).
///
/// Token content is not inspected, so any script is accepted.
pub fn is_valid_identity(candidate: &str) -> bool {
    candidate.split_whitespace().count() == 3
}

/// Returns `true` when `value` lies in the inclusive range `1..=5`.
pub fn is_valid_grade(value: i32) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&value)
}
