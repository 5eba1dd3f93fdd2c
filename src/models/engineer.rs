//! Engineer model.
//!
//! Engineers are the people whose capacity gets allocated. They are owned
//! by an external user directory; the engine only reads them.

use serde::{Deserialize, Serialize};

use super::Record;

/// Directory role that marks a user as allocatable.
pub const ENGINEER_ROLE: &str = "engineer";

fn default_role() -> String {
    ENGINEER_ROLE.to_string()
}

/// A person who can be assigned to projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    /// Unique engineer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Directory role (`"engineer"` or `"manager"`).
    #[serde(default = "default_role")]
    pub role: String,
    /// Skill tags. Order carries no meaning.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Seniority tag (e.g. "junior", "mid", "senior").
    #[serde(default)]
    pub seniority: Option<String>,
    /// Maximum capacity percentage. `None` counts as 0 for availability.
    #[serde(default)]
    pub max_capacity: Option<i32>,
    /// Department tag.
    #[serde(default)]
    pub department: Option<String>,
}

impl Engineer {
    /// Creates an engineer with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: default_role(),
            skills: Vec::new(),
            seniority: None,
            max_capacity: None,
            department: None,
        }
    }

    /// Sets the directory role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Sets the seniority tag.
    pub fn with_seniority(mut self, seniority: impl Into<String>) -> Self {
        self.seniority = Some(seniority.into());
        self
    }

    /// Sets the maximum capacity percentage.
    pub fn with_max_capacity(mut self, percent: i32) -> Self {
        self.max_capacity = Some(percent);
        self
    }

    /// Sets the department tag.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Whether this record has the given directory role (case-insensitive).
    pub fn has_role(&self, role: &str) -> bool {
        self.role.eq_ignore_ascii_case(role)
    }

    /// Whether this engineer has a skill tag (exact match).
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Maximum capacity, with absent treated as 0.
    pub fn capacity_or_zero(&self) -> i32 {
        self.max_capacity.unwrap_or(0)
    }
}

impl Record for Engineer {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_builder() {
        let e = Engineer::new("E1", "Ada")
            .with_skill("React")
            .with_skill("Rust")
            .with_seniority("senior")
            .with_max_capacity(80)
            .with_department("Platform");

        assert_eq!(e.id, "E1");
        assert_eq!(e.name, "Ada");
        assert!(e.has_role(ENGINEER_ROLE));
        assert!(e.has_skill("Rust"));
        assert!(!e.has_skill("rust"));
        assert_eq!(e.seniority.as_deref(), Some("senior"));
        assert_eq!(e.capacity_or_zero(), 80);
        assert_eq!(e.department.as_deref(), Some("Platform"));
    }

    #[test]
    fn test_missing_capacity_is_zero() {
        let e = Engineer::new("E1", "Ada");
        assert_eq!(e.max_capacity, None);
        assert_eq!(e.capacity_or_zero(), 0);
    }

    #[test]
    fn test_deserialize_directory_record() {
        let e: Engineer = serde_json::from_str(
            r#"{"id":"u1","name":"Lin","skills":["Node"],"maxCapacity":50,"seniority":"mid"}"#,
        )
        .unwrap();
        assert_eq!(e.role, "engineer");
        assert_eq!(e.max_capacity, Some(50));
        assert_eq!(e.department, None);

        let m: Engineer =
            serde_json::from_str(r#"{"id":"u2","name":"Kim","role":"manager"}"#).unwrap();
        assert!(!m.has_role(ENGINEER_ROLE));
        assert!(m.skills.is_empty());
    }
}
