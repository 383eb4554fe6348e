//! Error types for record parsing and directory scanning.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a single grade file is rejected.
///
/// None of these abort a report run; the pipeline records them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("file name `{identity}` is not a three-part full name")]
    InvalidIdentity { identity: String },

    #[error("expected at least 5 lines, found {lines}")]
    TooFewSubjects { lines: usize },

    #[error("grade `{raw}` for subject `{subject}` is not an integer")]
    InvalidGradeFormat { subject: String, raw: String },

    #[error("grade {grade} for subject `{subject}` is outside 1..=5")]
    GradeOutOfRange { subject: String, grade: i32 },
}

/// Failures that prevent enumerating the source directory at all.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The path is missing, is not a directory, or cannot be listed.
    #[error("path is not a readable directory: {}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ScanError {
    pub(crate) fn unavailable(path: &Path, source: Option<std::io::Error>) -> Self {
        ScanError::DirectoryUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}
