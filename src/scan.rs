//! Discovery of grade files in a directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::analyzers::types::Candidate;
use crate::error::ScanError;

/// Which files in a directory count as grade files.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extension of grade files, without the dot. Compared case-insensitively.
    pub extension: String,
    /// Name of the report artifact, which is never treated as a grade file.
    pub report_file_name: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            report_file_name: "report.txt".to_string(),
        }
    }
}

/// Reads every eligible grade file in `dir` into a [`Candidate`].
///
/// The identity of each candidate is its file name without the extension.
/// Candidates are sorted by file name. Files that cannot be read as UTF-8 text
/// are logged and skipped.
///
/// The extension match ignores case, so `A B C.txt` and `A B C.TXT` both
/// become candidates with the same identity on a case-sensitive filesystem.
/// Both are kept and a warning is logged.
///
/// # Errors
///
/// Returns [`ScanError::DirectoryUnavailable`] if `dir` is not a directory or
/// cannot be listed.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_directory(dir: &Path, options: &ScanOptions) -> Result<Vec<Candidate>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::unavailable(dir, None));
    }

    let io_err = |source| ScanError::unavailable(dir, Some(source));

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if is_eligible(&path, options) {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-grade file");
        }
    }
    paths.sort();

    let mut candidates: Vec<Candidate> = Vec::with_capacity(paths.len());
    for path in paths {
        match read_candidate(&path) {
            Ok(candidate) => {
                if candidates.iter().any(|c| c.identity == candidate.identity) {
                    warn!(
                        path = %path.display(),
                        identity = %candidate.identity,
                        "Duplicate student identity"
                    );
                }
                candidates.push(candidate);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to read grade file"),
        }
    }

    info!(candidates = candidates.len(), "Directory scanned");
    Ok(candidates)
}

fn is_eligible(path: &Path, options: &ScanOptions) -> bool {
    if !path.is_file() {
        return false;
    }

    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if file_name.to_lowercase() == options.report_file_name.to_lowercase() {
        return false;
    }

    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(&options.extension))
}

fn read_candidate(path: &Path) -> Result<Candidate> {
    let identity = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("file name of {} is not valid UTF-8", path.display()))?;

    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    Ok(Candidate::new(
        identity,
        content.lines().map(str::to_string).collect(),
    ))
}
