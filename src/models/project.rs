//! Project model.
//!
//! Only the display name and status matter here: the name labels bars and
//! seeds the color hash.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Record;

/// A project engineers can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ProjectStatus,
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Not started yet.
    #[default]
    Planning,
    /// In progress.
    Active,
    /// Finished.
    Completed,
}

impl ProjectStatus {
    /// Lowercase tag as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Project {
    /// Creates a project in the planning state.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ProjectStatus::Planning,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_defaults() {
        let p = Project::new("P1", "Atlas");
        assert_eq!(p.status, ProjectStatus::Planning);
        let p = p.with_status(ProjectStatus::Active);
        assert_eq!(p.status.to_string(), "active");
    }

    #[test]
    fn test_status_wire_format() {
        let p: Project =
            serde_json::from_str(r#"{"id":"p","name":"Nova","status":"completed"}"#).unwrap();
        assert_eq!(p.status, ProjectStatus::Completed);

        let p: Project = serde_json::from_str(r#"{"id":"p","name":"Nova"}"#).unwrap();
        assert_eq!(p.status, ProjectStatus::Planning);
    }
}
