//! Record filtering for calendar and timeline views.
//!
//! Each filter field is a case-insensitive substring test; an empty
//! field matches everything. Fields are ANDed.
//!
//! | Field | Tested against |
//! |-------|----------------|
//! | `skill` | any of the engineer's skill tags |
//! | `engineer` | engineer display name |
//! | `project` | project display name |
//! | `role` | displayed role label (placeholder included) |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::board::AssignmentView;
use crate::models::Engineer;

/// Composable substring filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentFilter {
    /// Skill substring.
    pub skill: String,
    /// Engineer-name substring.
    pub engineer: String,
    /// Project-name substring.
    pub project: String,
    /// Role substring.
    pub role: String,
}

/// Lowercased needle; `None` when the field is empty (matches all).
fn needle(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        None => true,
        Some(n) => haystack.to_lowercase().contains(n.as_str()),
    }
}

fn any_contains_ci(haystacks: &[String], needle: &Option<String>) -> bool {
    match needle {
        None => true,
        Some(_) => haystacks.iter().any(|h| contains_ci(h, needle)),
    }
}

impl AssignmentFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the skill substring.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    /// Sets the engineer-name substring.
    pub fn with_engineer(mut self, engineer: impl Into<String>) -> Self {
        self.engineer = engineer.into();
        self
    }

    /// Sets the project-name substring.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Sets the role substring.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.skill.is_empty()
            && self.engineer.is_empty()
            && self.project.is_empty()
            && self.role.is_empty()
    }

    /// Engineer-level predicates (skill and name).
    pub fn matches_engineer(&self, engineer: &Engineer) -> bool {
        any_contains_ci(&engineer.skills, &needle(&self.skill))
            && contains_ci(&engineer.name, &needle(&self.engineer))
    }

    /// All predicates against a joined assignment row.
    pub fn matches(&self, view: &AssignmentView) -> bool {
        any_contains_ci(&view.engineer_skills, &needle(&self.skill))
            && contains_ci(&view.engineer_name, &needle(&self.engineer))
            && contains_ci(&view.project_name, &needle(&self.project))
            && contains_ci(&view.role_label, &needle(&self.role))
    }

    /// Rows passing every predicate, in input order.
    pub fn apply<'a>(&self, views: &'a [AssignmentView]) -> Vec<&'a AssignmentView> {
        views.iter().filter(|v| self.matches(v)).collect()
    }

    /// Engineers that pass the engineer predicates *and* keep at least one
    /// matching assignment. Caller order is preserved.
    pub fn engineer_rows<'a>(
        &self,
        engineers: &'a [Engineer],
        views: &[AssignmentView],
    ) -> Vec<&'a Engineer> {
        let with_matches: HashSet<&str> = views
            .iter()
            .filter(|v| self.matches(v))
            .map(|v| v.assignment.engineer_id.as_str())
            .collect();

        engineers
            .iter()
            .filter(|e| self.matches_engineer(e) && with_matches.contains(e.id.as_str()))
            .collect()
    }
}

/// Distinct values offered in filter pick-lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Project names, first-seen order.
    pub projects: Vec<String>,
    /// Engineer names, first-seen order (blank names omitted).
    pub engineers: Vec<String>,
    /// Role labels, first-seen order.
    pub roles: Vec<String>,
}

impl FilterOptions {
    /// Collects distinct values from joined rows.
    pub fn collect(views: &[AssignmentView]) -> Self {
        fn push_unique(list: &mut Vec<String>, seen: &mut HashSet<String>, value: &str) {
            if seen.insert(value.to_string()) {
                list.push(value.to_string());
            }
        }

        let mut options = Self::default();
        let (mut p, mut e, mut r) = (HashSet::new(), HashSet::new(), HashSet::new());
        for v in views {
            push_unique(&mut options.projects, &mut p, &v.project_name);
            if !v.engineer_name.is_empty() {
                push_unique(&mut options.engineers, &mut e, &v.engineer_name);
            }
            push_unique(&mut options.roles, &mut r, &v.role_label);
        }
        options
    }
}
