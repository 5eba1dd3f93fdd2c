//! Sliding visible window.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::interval::{add_days, clamp_to_window, days_between, DateRange, WindowSpan};
use crate::models::CalendarDate;

/// `length_days` consecutive days starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleWindow {
    /// First visible day.
    pub start: CalendarDate,
    /// Number of visible days.
    pub length_days: u32,
}

impl VisibleWindow {
    /// Creates a window.
    pub fn new(start: CalendarDate, length_days: u32) -> Self {
        Self { start, length_days }
    }

    /// The stock view: `window_days` long, starting `window_lead_days`
    /// before `today`.
    pub fn default_for(today: CalendarDate, config: &EngineConfig) -> Self {
        Self::new(
            add_days(today, -i64::from(config.window_lead_days)),
            config.window_days,
        )
    }

    /// Last visible day. Equals `start - 1` for an empty window.
    pub fn end(&self) -> CalendarDate {
        add_days(self.start, i64::from(self.length_days) - 1)
    }

    /// The window as a day range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end())
    }

    /// Visible days, in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        self.range().days()
    }

    /// Moves the window by `days` (negative moves back).
    pub fn shifted(&self, days: i64) -> Self {
        Self::new(add_days(self.start, days), self.length_days)
    }

    /// Next page.
    pub fn page_forward(&self, step_days: u32) -> Self {
        self.shifted(i64::from(step_days))
    }

    /// Previous page.
    pub fn page_back(&self, step_days: u32) -> Self {
        self.shifted(-i64::from(step_days))
    }

    /// Next page, stepping by the configured `page_step_days`.
    pub fn page_forward_by(&self, config: &EngineConfig) -> Self {
        self.page_forward(config.page_step_days)
    }

    /// Previous page, stepping by the configured `page_step_days`.
    pub fn page_back_by(&self, config: &EngineConfig) -> Self {
        self.page_back(config.page_step_days)
    }

    /// Day column (0-based) of `date`, if visible.
    pub fn index_of(&self, date: CalendarDate) -> Option<u32> {
        let idx = days_between(date, self.start);
        (0..i64::from(self.length_days))
            .contains(&idx)
            .then_some(idx as u32)
    }

    /// Clips a range to this window.
    pub fn clamp(&self, range: &DateRange) -> Option<WindowSpan> {
        clamp_to_window(range, self.start, self.length_days)
    }
}
