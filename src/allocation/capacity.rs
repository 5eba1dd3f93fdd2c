//! Single-engineer capacity figures.
//!
//! These back the engineer's own dashboard and the assignment form's
//! "available capacity" hint. Both differ on purpose from the team view:
//! the self view frees the engineer after the *latest* active end, and
//! available capacity ignores dates altogether.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::aggregator::{is_active, utilization};
use crate::interval::add_days;
use crate::models::{Assignment, CalendarDate, Engineer};

/// What an engineer sees about their own load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerSummary {
    /// Engineer identifier.
    pub engineer_id: String,
    /// Summed allocation of active assignments.
    pub utilization: i64,
    /// Distinct projects among active assignments.
    pub projects_count: usize,
    /// Day after the last booked active assignment ends, or the reference
    /// date when utilization is zero or below.
    pub next_free_date: CalendarDate,
}

impl EngineerSummary {
    /// Summarizes one engineer's assignments at `reference`.
    ///
    /// Assignments belonging to other engineers are ignored.
    pub fn for_engineer(
        engineer_id: &str,
        assignments: &[Assignment],
        reference: CalendarDate,
    ) -> Self {
        let active: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.engineer_id == engineer_id && is_active(a, reference))
            .collect();

        let projects_count = active
            .iter()
            .map(|a| a.project_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let utilization = utilization(&active);
        let next_free_date = if utilization <= 0 {
            reference
        } else {
            active
                .iter()
                .filter(|a| a.allocation_percentage > 0)
                .map(|a| a.end_date)
                .max()
                .map_or(reference, |end| add_days(end, 1))
        };

        Self {
            engineer_id: engineer_id.to_string(),
            utilization,
            projects_count,
            next_free_date,
        }
    }
}

/// Capacity left after every booking, regardless of dates.
///
/// `max_capacity` (absent counts as 0) minus the sum of all of the
/// engineer's allocations. Negative when overbooked.
pub fn available_capacity(engineer: &Engineer, assignments: &[Assignment]) -> i64 {
    let booked: i64 = assignments
        .iter()
        .filter(|a| a.engineer_id == engineer.id)
        .map(|a| i64::from(a.allocation_percentage))
        .sum();
    i64::from(engineer.capacity_or_zero()) - booked
}
