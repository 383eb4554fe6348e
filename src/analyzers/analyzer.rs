use crate::analyzers::aggregate::averages_by_subject;
use crate::analyzers::ranking::{find_best, find_worst};
use crate::analyzers::types::{
    Candidate, Rejection, Report, ReportFacts, ReportOutcome, StudentRecord,
};
use crate::error::RecordError;
use crate::parser::parse_record;
use crate::validator::is_valid_identity;
use tracing::{debug, info, warn};

/// Parses every candidate, drops the malformed ones and computes the report facts
/// from the rest.
///
/// A bad candidate never fails the run: it is logged and listed in
/// [`Report::rejected`]. When nothing survives the outcome is
/// [`ReportOutcome::NoValidRecords`].
#[tracing::instrument(skip_all, fields(candidates = candidates.len()))]
pub fn generate_report(candidates: &[Candidate]) -> Report {
    let (records, rejected) = validate_candidates(candidates);

    if records.is_empty() {
        warn!(rejected = rejected.len(), "No valid student records");
        return Report {
            outcome: ReportOutcome::NoValidRecords,
            rejected,
        };
    }

    let facts = ReportFacts {
        subject_averages: averages_by_subject(&records),
        best: find_best(&records),
        worst: find_worst(&records),
        student_count: records.len(),
    };

    info!(
        students = facts.student_count,
        subjects = facts.subject_averages.len(),
        rejected = rejected.len(),
        "Report facts computed"
    );

    Report {
        outcome: ReportOutcome::Facts(facts),
        rejected,
    }
}

/// Splits candidates into parsed records and rejections, keeping input order.
pub fn validate_candidates(candidates: &[Candidate]) -> (Vec<StudentRecord>, Vec<Rejection>) {
    let mut records = Vec::new();
    let mut rejected = Vec::new();

    for candidate in candidates {
        match validate_candidate(candidate) {
            Ok(record) => {
                debug!(
                    identity = %candidate.identity,
                    subjects = record.grades().len(),
                    "Record accepted"
                );
                records.push(record);
            }
            Err(error) => {
                warn!(identity = %candidate.identity, error = %error, "Record skipped");
                rejected.push(Rejection {
                    identity: candidate.identity.clone(),
                    error,
                });
            }
        }
    }

    (records, rejected)
}

fn validate_candidate(candidate: &Candidate) -> Result<StudentRecord, RecordError> {
    if !is_valid_identity(&candidate.identity) {
        return Err(RecordError::InvalidIdentity {
            identity: candidate.identity.clone(),
        });
    }
    parse_record(&candidate.identity, &candidate.lines)
}
