//! Joined assignment rows and the in-memory record set.
//!
//! Widgets need an assignment together with its project's name and its
//! engineer's profile. A missing join target never drops the row: the
//! configured placeholder label stands in, so allocation totals survive
//! dangling references.
//!
//! Live updates replace one record by id and then recompute everything;
//! there is no incremental patching of derived structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::interval::DateRange;
use crate::models::{Assignment, Engineer, Project, ProjectStatus, Record, Scheduled};

/// An assignment joined with project and engineer details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    /// The underlying assignment.
    pub assignment: Assignment,
    /// Project name, or the unknown-project placeholder.
    pub project_name: String,
    /// Project status when the project is known.
    pub project_status: Option<ProjectStatus>,
    /// Engineer name, or the unknown-engineer placeholder.
    pub engineer_name: String,
    /// Engineer skill tags (empty when the engineer is unknown).
    pub engineer_skills: Vec<String>,
    /// Engineer seniority tag.
    pub engineer_seniority: Option<String>,
    /// Engineer department tag.
    pub engineer_department: Option<String>,
    /// Role label, or the unknown-role placeholder.
    pub role_label: String,
}

impl AssignmentView {
    /// Whether the project reference resolved.
    pub fn has_known_project(&self) -> bool {
        self.project_status.is_some()
    }
}

impl Record for AssignmentView {
    fn id(&self) -> &str {
        &self.assignment.id
    }
}

impl Scheduled for AssignmentView {
    fn date_range(&self) -> Result<DateRange> {
        Ok(self.assignment.range())
    }

    fn project_label(&self) -> &str {
        &self.project_name
    }
}

/// Joins assignments with their engineers and projects, in input order.
pub fn join_assignments(
    assignments: &[Assignment],
    engineers: &[Engineer],
    projects: &[Project],
    config: &EngineConfig,
) -> Vec<AssignmentView> {
    let engineers_by_id: HashMap<&str, &Engineer> =
        engineers.iter().map(|e| (e.id.as_str(), e)).collect();
    let projects_by_id: HashMap<&str, &Project> =
        projects.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut unresolved = 0usize;
    let views: Vec<AssignmentView> = assignments
        .iter()
        .map(|a| {
            let engineer = engineers_by_id.get(a.engineer_id.as_str()).copied();
            let project = projects_by_id.get(a.project_id.as_str()).copied();
            if engineer.is_none() || project.is_none() {
                unresolved += 1;
            }

            AssignmentView {
                assignment: a.clone(),
                project_name: project
                    .map_or_else(|| config.unknown_project_label.clone(), |p| p.name.clone()),
                project_status: project.map(|p| p.status),
                engineer_name: engineer
                    .map_or_else(|| config.unknown_engineer_label.clone(), |e| e.name.clone()),
                engineer_skills: engineer.map(|e| e.skills.clone()).unwrap_or_default(),
                engineer_seniority: engineer.and_then(|e| e.seniority.clone()),
                engineer_department: engineer.and_then(|e| e.department.clone()),
                role_label: if a.role.is_empty() {
                    config.unknown_role_label.clone()
                } else {
                    a.role.clone()
                },
            }
        })
        .collect();

    debug!(
        assignments = views.len(),
        unresolved, "joined assignment rows"
    );
    views
}

/// Replaces the record with the same id, or appends it.
///
/// Returns `true` when an existing record was replaced.
pub fn upsert_by_id<T: Record>(records: &mut Vec<T>, record: T) -> bool {
    match records.iter().position(|r| r.id() == record.id()) {
        Some(i) => {
            records[i] = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Snapshot of every input record the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Directory users (engineers and others).
    pub engineers: Vec<Engineer>,
    /// Projects.
    pub projects: Vec<Project>,
    /// Parsed assignments.
    pub assignments: Vec<Assignment>,
}

impl RecordSet {
    /// Creates a record set.
    pub fn new(engineers: Vec<Engineer>, projects: Vec<Project>, assignments: Vec<Assignment>) -> Self {
        Self {
            engineers,
            projects,
            assignments,
        }
    }

    /// Upserts an engineer by id.
    pub fn upsert_engineer(&mut self, engineer: Engineer) -> bool {
        upsert_by_id(&mut self.engineers, engineer)
    }

    /// Upserts a project by id.
    pub fn upsert_project(&mut self, project: Project) -> bool {
        upsert_by_id(&mut self.projects, project)
    }

    /// Upserts an assignment by id.
    pub fn upsert_assignment(&mut self, assignment: Assignment) -> bool {
        upsert_by_id(&mut self.assignments, assignment)
    }

    /// Removes an assignment by id. Returns the removed record.
    pub fn remove_assignment(&mut self, id: &str) -> Option<Assignment> {
        let i = self.assignments.iter().position(|a| a.id == id)?;
        Some(self.assignments.remove(i))
    }

    /// Joined rows for every assignment.
    pub fn views(&self, config: &EngineConfig) -> Vec<AssignmentView> {
        join_assignments(&self.assignments, &self.engineers, &self.projects, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_join_resolves_references() {
        let engineers = vec![Engineer::new("E1", "Ada")
            .with_skill("Rust")
            .with_seniority("senior")
            .with_department("Core")];
        let projects = vec![Project::new("P1", "Apollo").with_status(ProjectStatus::Active)];
        let assignments =
            vec![Assignment::new("A1", "E1", "P1", 50, d(1), d(2)).with_role("Lead")];

        let views = join_assignments(&assignments, &engineers, &projects, &EngineConfig::default());
        let v = &views[0];
        assert_eq!(v.project_name, "Apollo");
        assert_eq!(v.project_status, Some(ProjectStatus::Active));
        assert_eq!(v.engineer_name, "Ada");
        assert_eq!(v.engineer_skills, vec!["Rust"]);
        assert_eq!(v.engineer_seniority.as_deref(), Some("senior"));
        assert_eq!(v.engineer_department.as_deref(), Some("Core"));
        assert_eq!(v.role_label, "Lead");
        assert!(v.has_known_project());
        assert_eq!(v.project_label(), "Apollo");
    }

    #[test]
    fn test_join_substitutes_placeholders() {
        let assignments = vec![Assignment::new("A1", "ghost", "nowhere", 80, d(1), d(2))];
        let views = join_assignments(&assignments, &[], &[], &EngineConfig::default());
        assert_eq!(views.len(), 1);
        let v = &views[0];
        assert_eq!(v.project_name, "Unknown Project");
        assert_eq!(v.engineer_name, "Unknown");
        assert_eq!(v.role_label, "Unknown Role");
        assert_eq!(v.project_status, None);
        assert!(v.engineer_skills.is_empty());
        assert_eq!(v.assignment.allocation_percentage, 80);
    }

    #[test]
    fn test_upsert_by_id() {
        let mut list = vec![
            Project::new("P1", "Apollo"),
            Project::new("P2", "Zephyr"),
        ];
        assert!(upsert_by_id(&mut list, Project::new("P2", "Zephyr II")));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "Zephyr II");

        assert!(!upsert_by_id(&mut list, Project::new("P3", "Orion")));
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].id, "P3");
    }

    #[test]
    fn test_record_set_updates() {
        let mut set = RecordSet::new(
            vec![Engineer::new("E1", "Ada")],
            vec![Project::new("P1", "Apollo")],
            vec![Assignment::new("A1", "E1", "P1", 50, d(1), d(2))],
        );
        assert!(set.upsert_assignment(Assignment::new("A1", "E1", "P1", 70, d(1), d(3))));
        assert_eq!(set.assignments[0].allocation_percentage, 70);
        assert!(!set.upsert_engineer(Engineer::new("E2", "Linus")));
        assert!(set.upsert_project(Project::new("P1", "Apollo v2")));

        let views = set.views(&EngineConfig::default());
        assert_eq!(views[0].project_name, "Apollo v2");

        let removed = set.remove_assignment("A1").unwrap();
        assert_eq!(removed.id, "A1");
        assert!(set.remove_assignment("A1").is_none());
    }
}
