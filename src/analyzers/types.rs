//! Data types shared by the parsing, aggregation and ranking stages.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::error::RecordError;

/// One raw grade file as handed over by the directory scan: the identity
/// derived from its file name plus its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identity: String,
    pub lines: Vec<String>,
}

impl Candidate {
    pub fn new(identity: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            identity: identity.into(),
            lines,
        }
    }
}

/// A parsed, validated student.
///
/// Two records are equal when their names are equal, whatever their grades.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    name: String,
    grades: HashMap<String, u8>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, grades: HashMap<String, u8>) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &HashMap<String, u8> {
        &self.grades
    }
}

impl PartialEq for StudentRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for StudentRecord {}

impl Hash for StudentRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// The facts a report is rendered from.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFacts {
    pub subject_averages: HashMap<String, f64>,
    pub best: Vec<StudentRecord>,
    pub worst: Vec<StudentRecord>,
    pub student_count: usize,
}

/// Result of a pipeline run over a candidate list.
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    /// Every candidate was rejected, or there were none.
    NoValidRecords,
    Facts(ReportFacts),
}

impl ReportOutcome {
    pub fn facts(&self) -> Option<&ReportFacts> {
        match self {
            ReportOutcome::Facts(facts) => Some(facts),
            ReportOutcome::NoValidRecords => None,
        }
    }
}

/// A candidate excluded from the report, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub identity: String,
    pub error: RecordError,
}

/// Everything a single pipeline run produces.
#[derive(Debug, Clone)]
pub struct Report {
    pub outcome: ReportOutcome,
    pub rejected: Vec<Rejection>,
}
