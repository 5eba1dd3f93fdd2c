//! Month windows for the calendar widget.

use chrono::{Datelike, Months};
use serde::{Deserialize, Serialize};

use crate::interval::{add_days, DateRange};
use crate::models::{CalendarDate, Scheduled};

/// The first through last day of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthWindow {
    /// First day of the month.
    pub first: CalendarDate,
    /// Last day of the month.
    pub last: CalendarDate,
}

impl MonthWindow {
    /// The month containing `date`.
    pub fn containing(date: CalendarDate) -> Self {
        let first = add_days(date, -i64::from(date.day0()));
        let last = first
            .checked_add_months(Months::new(1))
            .map_or(CalendarDate::MAX, |next| add_days(next, -1));
        Self { first, last }
    }

    /// The month as a day range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.first, self.last)
    }

    /// Number of days in the month.
    pub fn len(&self) -> u32 {
        self.range().covered_days() as u32
    }

    /// Always false; a month has at least 28 days.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        self.range().days()
    }

    /// The following month.
    pub fn next(&self) -> Self {
        Self::containing(add_days(self.last, 1))
    }

    /// The preceding month.
    pub fn previous(&self) -> Self {
        Self::containing(add_days(self.first, -1))
    }

    /// Whether `range` shares at least one day with this month.
    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.range().overlaps(range)
    }

    /// Records overlapping the month, in input order. Records with
    /// malformed dates are left out.
    pub fn visible<'a, T: Scheduled>(&self, records: &'a [T]) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| r.date_range().is_ok_and(|range| self.overlaps(&range)))
            .collect()
    }
}
