//! Data-quality checks for input records.
//!
//! The engine tolerates bad records (it skips or relabels them), but a
//! caller may want the full list of problems up front, e.g. to show an
//! import report. Detects:
//! - Duplicate IDs
//! - Missing or malformed dates
//! - Ranges that end before they start
//! - Allocation outside 0..=100
//! - References to unknown engineers or projects

use crate::models::{Assignment, Engineer, Project, RawAssignment};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<RecordIssue>>;

/// A data-quality problem on one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordIssue {
    /// Issue category.
    pub kind: RecordIssueKind,
    /// Offending record.
    pub record_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of record issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordIssueKind {
    /// Two records of one kind share an ID.
    DuplicateId,
    /// A date is absent or not ISO-8601.
    MalformedDate,
    /// End date precedes start date.
    InvertedRange,
    /// Allocation is negative or above 100.
    AllocationOutOfRange,
    /// Assignment references an engineer that doesn't exist.
    UnknownEngineer,
    /// Assignment references a project that doesn't exist.
    UnknownProject,
}

impl RecordIssue {
    fn new(kind: RecordIssueKind, record_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            record_id: record_id.to_string(),
            message: message.into(),
        }
    }
}

fn check_unique<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<RecordIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(RecordIssue::new(
                RecordIssueKind::DuplicateId,
                id,
                format!("Duplicate {kind} ID: {id}"),
            ));
        }
    }
    seen
}

/// Validates engineers, projects, and raw assignments together.
///
/// Checks:
/// 1. No duplicate engineer, project, or assignment IDs
/// 2. Both dates present and parseable
/// 3. Start on or before end
/// 4. Allocation within 0..=100
/// 5. Engineer and project references resolve
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(issues)` with every detected problem.
pub fn validate_records(
    engineers: &[Engineer],
    projects: &[Project],
    assignments: &[RawAssignment],
) -> ValidationResult {
    let mut issues = Vec::new();

    let engineer_ids = check_unique("engineer", engineers.iter().map(|e| e.id.as_str()), &mut issues);
    let project_ids = check_unique("project", projects.iter().map(|p| p.id.as_str()), &mut issues);
    check_unique("assignment", assignments.iter().map(|a| a.id.as_str()), &mut issues);

    for raw in assignments {
        match Assignment::from_raw(raw) {
            Err(err) => issues.push(RecordIssue::new(
                RecordIssueKind::MalformedDate,
                &raw.id,
                err.to_string(),
            )),
            Ok(a) if a.range().is_inverted() => issues.push(RecordIssue::new(
                RecordIssueKind::InvertedRange,
                &raw.id,
                format!(
                    "Assignment '{}' ends ({}) before it starts ({})",
                    raw.id, a.end_date, a.start_date
                ),
            )),
            Ok(_) => {}
        }

        if !(0.0..=100.0).contains(&raw.allocation_percentage) {
            issues.push(RecordIssue::new(
                RecordIssueKind::AllocationOutOfRange,
                &raw.id,
                format!(
                    "Assignment '{}' allocates {}%",
                    raw.id, raw.allocation_percentage
                ),
            ));
        }

        if raw.engineer_id.is_empty() {
            issues.push(RecordIssue::new(
                RecordIssueKind::UnknownEngineer,
                &raw.id,
                format!("Assignment '{}' has no engineer", raw.id),
            ));
        } else if !engineer_ids.contains(raw.engineer_id.as_str()) {
            issues.push(RecordIssue::new(
                RecordIssueKind::UnknownEngineer,
                &raw.id,
                format!(
                    "Assignment '{}' references unknown engineer '{}'",
                    raw.id, raw.engineer_id
                ),
            ));
        }

        if raw.project_id.is_empty() {
            issues.push(RecordIssue::new(
                RecordIssueKind::UnknownProject,
                &raw.id,
                format!("Assignment '{}' has no project", raw.id),
            ));
        } else if !project_ids.contains(raw.project_id.as_str()) {
            issues.push(RecordIssue::new(
                RecordIssueKind::UnknownProject,
                &raw.id,
                format!(
                    "Assignment '{}' references unknown project '{}'",
                    raw.id, raw.project_id
                ),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
