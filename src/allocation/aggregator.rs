//! Team utilization at a reference date.
//!
//! # Definitions
//!
//! | Figure | Definition |
//! |--------|-----------|
//! | Active | range contains the reference date |
//! | Utilization | sum of active allocations (not capped at 100) |
//! | Next available (engineer) | earliest end + 1 day over active assignments with positive allocation; the reference date when utilization <= 0 |
//! | Average utilization | round(sum of utilizations / engineer count), 0 if no engineers |
//! | Active projects | distinct project ids across all active assignments |
//! | Next availability (team) | min of the engineer figure over engineers with utilization > 0 |
//!
//! The per-engineer and team next-availability figures are separate
//! operations and answer different questions; neither is derived from
//! the other's output.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::interval::{add_days, contains_day};
use crate::models::{Assignment, CalendarDate, Engineer};

/// One engineer's load at the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationSnapshot {
    /// Engineer identifier.
    pub engineer_id: String,
    /// Ids of the assignments active at the reference date.
    pub active_assignment_ids: Vec<String>,
    /// Summed allocation of active assignments. May exceed 100.
    pub utilization_percent: i64,
    /// First day after the soonest-ending active assignment.
    pub next_available_date: CalendarDate,
}

impl UtilizationSnapshot {
    /// Whether the engineer is booked beyond full capacity.
    pub fn is_over_allocated(&self) -> bool {
        self.utilization_percent > 100
    }

    /// Whether the engineer has no active assignment.
    pub fn is_idle(&self) -> bool {
        self.active_assignment_ids.is_empty()
    }
}

/// Team-wide figures at the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    /// Number of engineers considered.
    pub engineer_count: usize,
    /// Rounded mean utilization.
    pub average_utilization: i64,
    /// Distinct projects with at least one active assignment.
    pub active_project_count: usize,
    /// Soonest day any engineer's load drops; `None` if nobody is booked.
    pub next_availability: Option<CalendarDate>,
}

/// Aggregator output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    /// Reference date used.
    pub reference_date: CalendarDate,
    /// One entry per engineer, in input order.
    pub engineers: Vec<UtilizationSnapshot>,
    /// Team-wide scalars.
    pub team: TeamStats,
}

/// Computes utilization figures for a team.
///
/// Only directory users with the configured engineer role are counted;
/// per-engineer figures use only their own assignments. The active project
/// count looks at every assignment supplied.
#[derive(Debug, Clone)]
pub struct AllocationAggregator<'a> {
    engineers: Vec<&'a Engineer>,
    assignments: &'a [Assignment],
    by_engineer: HashMap<&'a str, Vec<&'a Assignment>>,
    reference: CalendarDate,
}

impl<'a> AllocationAggregator<'a> {
    /// Creates an aggregator at today's local date.
    pub fn new(engineers: &'a [Engineer], assignments: &'a [Assignment], config: &EngineConfig) -> Self {
        let engineers: Vec<&Engineer> = engineers
            .iter()
            .filter(|e| e.has_role(&config.engineer_role))
            .collect();
        let ids: HashSet<&str> = engineers.iter().map(|e| e.id.as_str()).collect();

        let mut by_engineer: HashMap<&str, Vec<&Assignment>> = HashMap::new();
        for a in assignments {
            if a.range().is_inverted() {
                warn!(
                    assignment_id = %a.id,
                    start = %a.start_date,
                    end = %a.end_date,
                    "assignment ends before it starts; contributes no days"
                );
                continue;
            }
            if ids.contains(a.engineer_id.as_str()) {
                by_engineer.entry(a.engineer_id.as_str()).or_default().push(a);
            }
        }

        Self {
            engineers,
            assignments,
            by_engineer,
            reference: Local::now().date_naive(),
        }
    }

    /// Sets the reference date.
    pub fn at(mut self, reference: NaiveDate) -> Self {
        self.reference = reference;
        self
    }

    /// The reference date in use.
    pub fn reference_date(&self) -> CalendarDate {
        self.reference
    }

    /// Engineers counted by this aggregator, in input order.
    pub fn engineers(&self) -> &[&'a Engineer] {
        &self.engineers
    }

    fn active_for(&self, engineer_id: &str) -> Vec<&'a Assignment> {
        self.by_engineer
            .get(engineer_id)
            .map(|list| {
                list.iter()
                    .copied()
                    .filter(|a| is_active(a, self.reference))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Utilization snapshot for one engineer.
    pub fn snapshot(&self, engineer: &Engineer) -> UtilizationSnapshot {
        let active = self.active_for(&engineer.id);
        UtilizationSnapshot {
            engineer_id: engineer.id.clone(),
            active_assignment_ids: active.iter().map(|a| a.id.clone()).collect(),
            utilization_percent: utilization(&active),
            next_available_date: next_available_date(&active, self.reference),
        }
    }

    /// Snapshots for every counted engineer.
    pub fn snapshots(&self) -> Vec<UtilizationSnapshot> {
        self.engineers.iter().map(|e| self.snapshot(e)).collect()
    }

    /// Distinct projects with an active assignment (any engineer).
    pub fn active_project_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| is_active(a, self.reference))
            .map(|a| a.project_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Soonest day any counted engineer's load drops.
    ///
    /// For each engineer with positive utilization, take their next
    /// available date; return the minimum. `None` when nobody is booked.
    pub fn soonest_team_availability(&self) -> Option<CalendarDate> {
        self.engineers
            .iter()
            .filter_map(|e| {
                let active = self.active_for(&e.id);
                (utilization(&active) > 0).then(|| next_available_date(&active, self.reference))
            })
            .min()
    }

    /// Team-wide scalars.
    pub fn team_stats(&self) -> TeamStats {
        let total: i64 = self
            .engineers
            .iter()
            .map(|e| utilization(&self.active_for(&e.id)))
            .sum();

        TeamStats {
            engineer_count: self.engineers.len(),
            average_utilization: average_utilization(total, self.engineers.len()),
            active_project_count: self.active_project_count(),
            next_availability: self.soonest_team_availability(),
        }
    }

    /// Snapshots plus team scalars.
    pub fn report(&self) -> AllocationReport {
        let engineers = self.snapshots();
        let team = self.team_stats();
        debug!(
            reference = %self.reference,
            engineers = team.engineer_count,
            average = team.average_utilization,
            active_projects = team.active_project_count,
            "computed allocation report"
        );
        AllocationReport {
            reference_date: self.reference,
            engineers,
            team,
        }
    }
}

/// Whether an assignment is active on `reference`.
#[inline]
pub fn is_active(assignment: &Assignment, reference: CalendarDate) -> bool {
    contains_day(&assignment.range(), reference)
}

/// Sum of allocation percentages.
pub fn utilization(active: &[&Assignment]) -> i64 {
    active
        .iter()
        .map(|a| i64::from(a.allocation_percentage))
        .sum()
}

/// Day after the soonest-ending booked assignment.
///
/// Only positive allocations count as booked. Returns `reference` when
/// the summed utilization is zero or below.
pub fn next_available_date(active: &[&Assignment], reference: CalendarDate) -> CalendarDate {
    if utilization(active) <= 0 {
        return reference;
    }
    active
        .iter()
        .filter(|a| a.allocation_percentage > 0)
        .map(|a| a.end_date)
        .min()
        .map_or(reference, |end| add_days(end, 1))
}

/// Rounded mean (half up), 0 for an empty team.
pub fn average_utilization(total: i64, engineer_count: usize) -> i64 {
    if engineer_count == 0 {
        return 0;
    }
    (total as f64 / engineer_count as f64 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    fn team() -> Vec<Engineer> {
        vec![
            Engineer::new("E1", "Ada"),
            Engineer::new("E2", "Linus"),
            Engineer::new("E3", "Grace"),
            Engineer::new("M1", "Boss").with_role("manager"),
        ]
    }

    #[test]
    fn test_over_allocation_not_clamped() {
        let engineers = vec![Engineer::new("E1", "Ada")];
        let assignments = vec![
            Assignment::new("A", "E1", "P1", 40, d(6, 1), d(6, 30)),
            Assignment::new("B", "E1", "P2", 70, d(6, 10), d(6, 20)),
        ];
        let agg = AllocationAggregator::new(&engineers, &assignments, &EngineConfig::default())
            .at(d(6, 15));
        let snap = agg.snapshot(&engineers[0]);
        assert_eq!(snap.utilization_percent, 110);
        assert!(snap.is_over_allocated());
        // B ends first (06-20), so the engineer frees up on 06-21
        assert_eq!(snap.next_available_date, d(6, 21));
    }

    #[test]
    fn test_idle_engineer_available_now() {
        let engineers = vec![Engineer::new("E1", "Ada")];
        let agg = AllocationAggregator::new(&engineers, &[], &EngineConfig::default()).at(d(6, 15));
        let snap = agg.snapshot(&engineers[0]);
        assert_eq!(snap.utilization_percent, 0);
        assert!(snap.is_idle());
        assert_eq!(snap.next_available_date, d(6, 15));
    }

    #[test]
    fn test_zero_allocation_is_not_booked() {
        let engineers = vec![Engineer::new("E1", "Ada"), Engineer::new("E2", "Linus")];
        let assignments = vec![
            Assignment::new("A1", "E1", "P1", 0, d(6, 1), d(6, 20)),
            Assignment::new("A2", "E2", "P1", 0, d(6, 1), d(6, 12)),
            Assignment::new("A3", "E2", "P2", 30, d(6, 1), d(6, 25)),
        ];
        let agg = AllocationAggregator::new(&engineers, &assignments, &EngineConfig::default())
            .at(d(6, 10));

        let ada = agg.snapshot(&engineers[0]);
        assert_eq!(ada.utilization_percent, 0);
        assert!(!ada.is_idle());
        assert_eq!(ada.next_available_date, d(6, 10));

        // A2 ends sooner but books nothing.
        let linus = agg.snapshot(&engineers[1]);
        assert_eq!(linus.next_available_date, d(6, 26));
        assert_eq!(agg.soonest_team_availability(), Some(d(6, 26)));
    }

    #[test]
    fn test_active_boundaries_are_inclusive() {
        let a = Assignment::new("A", "E1", "P1", 50, d(6, 1), d(6, 5));
        assert!(is_active(&a, d(6, 1)));
        assert!(is_active(&a, d(6, 5)));
        assert!(!is_active(&a, d(5, 31)));
        assert!(!is_active(&a, d(6, 6)));
    }

    #[test]
    fn test_team_average() {
        let engineers = team();
        let assignments = vec![
            Assignment::new("A1", "E2", "P1", 50, d(6, 1), d(6, 30)),
            Assignment::new("A2", "E3", "P1", 60, d(6, 1), d(6, 30)),
            Assignment::new("A3", "E3", "P2", 40, d(6, 1), d(6, 30)),
            Assignment::new("A4", "M1", "P3", 100, d(6, 1), d(6, 30)), // manager, ignored
        ];
        let stats = AllocationAggregator::new(&engineers, &assignments, &EngineConfig::default())
            .at(d(6, 15))
            .team_stats();
        assert_eq!(stats.engineer_count, 3);
        assert_eq!(stats.average_utilization, 50); // round(150 / 3)
    }

    #[test]
    fn test_average_rounding_and_empty_team() {
        assert_eq!(average_utilization(0, 0), 0);
        assert_eq!(average_utilization(100, 3), 33);
        assert_eq!(average_utilization(200, 3), 67);
        assert_eq!(average_utilization(5, 2), 3); // 2.5 rounds up

        let stats = AllocationAggregator::new(&[], &[], &EngineConfig::default())
            .at(d(6, 1))
            .team_stats();
        assert_eq!(stats.average_utilization, 0);
        assert_eq!(stats.next_availability, None);
    }

    #[test]
    fn test_active_project_count_spans_all_assignments() {
        let engineers = team();
        let assignments = vec![
            Assignment::new("A1", "E1", "P1", 50, d(6, 1), d(6, 30)),
            Assignment::new("A2", "E2", "P1", 50, d(6, 1), d(6, 30)),
            Assignment::new("A3", "M1", "P2", 10, d(6, 1), d(6, 30)),
            Assignment::new("A4", "E3", "P3", 10, d(7, 1), d(7, 30)), // not active
        ];
        let agg = AllocationAggregator::new(&engineers, &assignments, &EngineConfig::default())
            .at(d(6, 15));
        assert_eq!(agg.active_project_count(), 2);
    }

    #[test]
    fn test_team_next_availability_is_minimum() {
        let engineers = team();
        let assignments = vec![
            Assignment::new("A1", "E1", "P1", 50, d(6, 1), d(6, 25)),
            Assignment::new("A2", "E1", "P2", 50, d(6, 1), d(6, 28)),
            Assignment::new("A3", "E2", "P1", 50, d(6, 10), d(6, 18)),
        ];
        let agg = AllocationAggregator::new(&engineers, &assignments, &EngineConfig::default())
            .at(d(6, 15));
        assert_eq!(agg.soonest_team_availability(), Some(d(6, 19)));

        let snaps = agg.snapshots();
        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[0].next_available_date, d(6, 26));
        assert_eq!(snaps[1].next_available_date, d(6, 19));
        assert_eq!(snaps[2].next_available_date, d(6, 15));
    }

    #[test]
    fn test_inverted_assignment_is_ignored() {
        let engineers = vec![Engineer::new("E1", "Ada")];
        let assignments = vec![
            Assignment::new("bad", "E1", "P1", 90, d(6, 20), d(6, 10)),
            Assignment::new("ok", "E1", "P2", 20, d(6, 1), d(6, 30)),
        ];
        let report = AllocationAggregator::new(&engineers, &assignments, &EngineConfig::default())
            .at(d(6, 15))
            .report();
        assert_eq!(report.engineers[0].utilization_percent, 20);
        assert_eq!(report.engineers[0].active_assignment_ids, vec!["ok"]);
        assert_eq!(report.team.active_project_count, 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let engineers = vec![Engineer::new("E1", "Ada")];
        let report = AllocationAggregator::new(&engineers, &[], &EngineConfig::default())
            .at(d(6, 15))
            .report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["engineers"][0]["engineerId"], "E1");
        assert_eq!(json["engineers"][0]["utilizationPercent"], 0);
        assert_eq!(json["engineers"][0]["nextAvailableDate"], "2025-06-15");
        assert_eq!(json["team"]["averageUtilization"], 0);
    }
}
