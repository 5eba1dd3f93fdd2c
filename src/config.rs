//! Engine configuration.
//!
//! Layout constants and placeholder labels. Every field has a default, so
//! an embedding service can deserialize a partial JSON object and get the
//! stock dashboard behavior for the rest.

use serde::{Deserialize, Serialize};

use crate::models::ENGINEER_ROLE;

/// Tunables shared by aggregation, joining, and layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Days shown in the timeline window.
    pub window_days: u32,
    /// Days before "today" where the default window starts.
    pub window_lead_days: u32,
    /// Days the window moves per page.
    pub page_step_days: u32,
    /// Grid columns reserved for row labels before the first day column.
    pub fixed_left_columns: u32,
    /// Grid rows reserved for the date header above the first engineer.
    pub header_rows: u32,
    /// Directory role counted by the aggregator.
    pub engineer_role: String,
    /// Label used when an assignment's project cannot be found.
    pub unknown_project_label: String,
    /// Label used when an assignment's engineer cannot be found.
    pub unknown_engineer_label: String,
    /// Label used when an assignment has no role.
    pub unknown_role_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_days: 35,
            window_lead_days: 10,
            page_step_days: 7,
            fixed_left_columns: 1,
            header_rows: 1,
            engineer_role: ENGINEER_ROLE.to_string(),
            unknown_project_label: "Unknown Project".to_string(),
            unknown_engineer_label: "Unknown".to_string(),
            unknown_role_label: "Unknown Role".to_string(),
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeline window length.
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Sets how far before today the default window starts.
    pub fn with_window_lead_days(mut self, days: u32) -> Self {
        self.window_lead_days = days;
        self
    }

    /// Sets the paging step.
    pub fn with_page_step_days(mut self, days: u32) -> Self {
        self.page_step_days = days;
        self
    }

    /// Sets the number of label columns.
    pub fn with_fixed_left_columns(mut self, columns: u32) -> Self {
        self.fixed_left_columns = columns;
        self
    }

    /// Sets the number of header rows.
    pub fn with_header_rows(mut self, rows: u32) -> Self {
        self.header_rows = rows;
        self
    }

    /// Sets the role the aggregator treats as allocatable.
    pub fn with_engineer_role(mut self, role: impl Into<String>) -> Self {
        self.engineer_role = role.into();
        self
    }

    /// Sets the placeholder for missing projects.
    pub fn with_unknown_project_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_project_label = label.into();
        self
    }

    /// Sets the placeholder for missing engineers.
    pub fn with_unknown_engineer_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_engineer_label = label.into();
        self
    }

    /// Sets the placeholder for assignments without a role.
    pub fn with_unknown_role_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_role_label = label.into();
        self
    }
}
