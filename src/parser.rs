//! Parser for the line-oriented grade file format.
//!
//! Each relevant line reads `<subject> - <grade>`. Lines without the
//! separator are ignored.

use std::collections::HashMap;

use crate::analyzers::types::StudentRecord;
use crate::error::RecordError;
use crate::validator::is_valid_grade;

/// Separator between subject name and grade.
pub const SEPARATOR: &str = " - ";

/// Minimum number of lines a grade file must have.
pub const MIN_LINES: usize = 5;

/// Builds a [`StudentRecord`] for `identity` from the lines of its grade file.
///
/// `identity` is expected to have passed
/// [`is_valid_identity`](crate::validator::is_valid_identity) already.
///
/// # Errors
///
/// - [`RecordError::TooFewSubjects`] when there are fewer than five lines,
///   whatever they contain.
/// - [`RecordError::InvalidGradeFormat`] when the text after the separator is
///   not an integer.
/// - [`RecordError::GradeOutOfRange`] when the grade is outside `1..=5`.
pub fn parse_record<S: AsRef<str>>(
    identity: &str,
    lines: &[S],
) -> Result<StudentRecord, RecordError> {
    if lines.len() < MIN_LINES {
        return Err(RecordError::TooFewSubjects { lines: lines.len() });
    }

    let mut grades = HashMap::new();

    for line in lines {
        let Some((subject, grade)) = parse_line(line.as_ref())? else {
            continue;
        };
        // a repeated subject keeps its last grade
        grades.insert(subject, grade);
    }

    Ok(StudentRecord::new(identity, grades))
}

/// Parses one `<subject> - <grade>` line.
///
/// Splits on the last separator so subject names may contain ` - `.
/// Returns `Ok(None)` for lines without a separator.
fn parse_line(line: &str) -> Result<Option<(String, u8)>, RecordError> {
    let line = line.trim();
    let Some((subject, raw)) = line.rsplit_once(SEPARATOR) else {
        return Ok(None);
    };

    let subject = subject.trim().to_string();
    let raw = raw.trim();

    let grade: i32 = raw.parse().map_err(|_| RecordError::InvalidGradeFormat {
        subject: subject.clone(),
        raw: raw.to_string(),
    })?;

    match u8::try_from(grade) {
        Ok(value) if is_valid_grade(grade) => Ok(Some((subject, value))),
        _ => Err(RecordError::GradeOutOfRange { subject, grade }),
    }
}
