//! Manager dashboard composition.
//!
//! One call produces everything the manager overview renders: team
//! scalars, per-engineer utilization rows, and the joined assignments
//! overlapping the reference month for the calendar and timeline widgets.
//! Nothing is cached; callers rebuild on every request or record update.

use serde::Serialize;

use crate::allocation::{AllocationAggregator, TeamStats};
use crate::board::{AssignmentView, RecordSet};
use crate::calendar::MonthWindow;
use crate::config::EngineConfig;
use crate::models::CalendarDate;

/// One team-overview row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerUtilization {
    /// Engineer identifier.
    pub engineer_id: String,
    /// Display name.
    pub name: String,
    /// Skill tags.
    pub skills: Vec<String>,
    /// Seniority tag.
    pub seniority: Option<String>,
    /// Summed active allocation.
    pub utilization_percent: i64,
    /// Day after the soonest-ending active assignment.
    pub next_available_date: CalendarDate,
    /// Utilization above 100.
    pub over_allocated: bool,
}

/// Everything the manager overview shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Reference date used for "active".
    pub reference_date: CalendarDate,
    /// Team-wide scalars.
    pub team: TeamStats,
    /// Team overview rows, in directory order.
    pub engineers: Vec<EngineerUtilization>,
    /// Joined assignments overlapping the reference month.
    pub assignments: Vec<AssignmentView>,
}

/// Builds dashboard summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dashboard;

impl Dashboard {
    /// Computes the dashboard for `records` at `reference`.
    pub fn build(records: &RecordSet, reference: CalendarDate, config: &EngineConfig) -> DashboardSummary {
        let aggregator =
            AllocationAggregator::new(&records.engineers, &records.assignments, config).at(reference);

        let engineers = aggregator
            .engineers()
            .iter()
            .map(|e| {
                let snap = aggregator.snapshot(e);
                EngineerUtilization {
                    engineer_id: e.id.clone(),
                    name: e.name.clone(),
                    skills: e.skills.clone(),
                    seniority: e.seniority.clone(),
                    utilization_percent: snap.utilization_percent,
                    next_available_date: snap.next_available_date,
                    over_allocated: snap.is_over_allocated(),
                }
            })
            .collect();

        let month = MonthWindow::containing(reference);
        let assignments = records
            .views(config)
            .into_iter()
            .filter(|v| month.overlaps(&v.assignment.range()))
            .collect();

        DashboardSummary {
            reference_date: reference,
            team: aggregator.team_stats(),
            engineers,
            assignments,
        }
    }
}
