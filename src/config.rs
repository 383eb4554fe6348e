//! Runtime settings read from the environment.
//!
//! Values can also come from a `.env` file, loaded by the binary at startup.
//! Every setting has a default, so an empty environment is valid.

use std::path::PathBuf;

use crate::scan::ScanOptions;

pub const LOG_FILE_PATH_VAR: &str = "LOG_FILE_PATH";
pub const REPORT_FILE_VAR: &str = "GRADE_REPORT_FILE";
pub const SOURCE_EXTENSION_VAR: &str = "GRADE_SOURCE_EXTENSION";

const DEFAULT_LOG_FILE_PATH: &str = "logs/grade_report.log";
const DEFAULT_REPORT_FILE: &str = "report.txt";
const DEFAULT_SOURCE_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_file_path: PathBuf,
    pub report_file_name: String,
    pub source_extension: String,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for missing
    /// or blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            log_file_path: PathBuf::from(get(LOG_FILE_PATH_VAR, DEFAULT_LOG_FILE_PATH)),
            report_file_name: get(REPORT_FILE_VAR, DEFAULT_REPORT_FILE),
            source_extension: get(SOURCE_EXTENSION_VAR, DEFAULT_SOURCE_EXTENSION)
                .trim_start_matches('.')
                .to_string(),
        }
    }

    /// Scan options for these settings. `report_name` overrides the configured
    /// report file name.
    pub fn scan_options(&self, report_name: Option<&str>) -> ScanOptions {
        ScanOptions {
            extension: self.source_extension.clone(),
            report_file_name: report_name.unwrap_or(&self.report_file_name).to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
