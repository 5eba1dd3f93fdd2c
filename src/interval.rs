//! Calendar-day interval arithmetic.
//!
//! # Day Model
//! Ranges are closed: `[start, end]`, both ends inclusive, measured in
//! whole calendar days. A range whose end precedes its start is
//! *inverted* and covers no days; nothing here panics on it.
//!
//! # Window Clipping
//! A visible window is `length` consecutive days from `window_start`.
//! Clipping a range against it yields a column `offset` (0-based) and
//! a `span` in days, or nothing when they do not intersect.

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::models::CalendarDate;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: CalendarDate,
    /// Last day (inclusive).
    pub end: CalendarDate,
}

impl DateRange {
    /// Creates a range. Inverted input is kept as-is.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Single-day range.
    pub fn day(day: CalendarDate) -> Self {
        Self::new(day, day)
    }

    /// Whether `end < start`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Raw day count, `days_between(end, start) + 1`.
    ///
    /// Zero or negative for inverted ranges; use [`DateRange::covered_days`]
    /// where a count of actual days is needed.
    #[inline]
    pub fn day_count(&self) -> i64 {
        days_between(self.end, self.start) + 1
    }

    /// Number of days actually covered (0 when inverted).
    #[inline]
    pub fn covered_days(&self) -> u64 {
        self.day_count().max(0) as u64
    }

    /// Whether `day` falls within the range.
    #[inline]
    pub fn contains(&self, day: CalendarDate) -> bool {
        contains_day(self, day)
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_inverted()
            && !other.is_inverted()
            && self.start <= other.end
            && other.start <= self.end
    }

    /// Iterates every covered day in order. Empty when inverted.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let end = self.end;
        self.start
            .iter_days()
            .take(self.covered_days() as usize)
            .take_while(move |d| *d <= end)
    }
}

/// Whole days from `earlier` to `later` (`later - earlier`).
///
/// Negative when `later` precedes `earlier`. Read it as a duration
/// (`days_between(end, start) + 1`) or as a column offset from a window
/// start (`days_between(day, window_start)`).
#[inline]
pub fn days_between(later: CalendarDate, earlier: CalendarDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Whether `day` falls within `range`, comparing calendar dates only.
#[inline]
pub fn contains_day(range: &DateRange, day: CalendarDate) -> bool {
    range.start <= day && day <= range.end
}

/// Adds whole days, saturating at the calendar's limits.
pub fn add_days(date: CalendarDate, days: i64) -> CalendarDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(if days >= 0 {
        CalendarDate::MAX
    } else {
        CalendarDate::MIN
    })
}

/// The part of a range that lands inside a visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpan {
    /// Column offset from the window start (0-based).
    pub offset: u32,
    /// Number of visible days, always >= 1.
    pub span: u32,
}

/// Clips `range` to the `length` days starting at `window_start`.
///
/// A range starting before the window begins at offset 0; one running past
/// the window is cut at its last day. Returns `None` when nothing is
/// visible: inverted ranges, ranges ending before the window, ranges
/// starting at or after `window_start + length`, and zero-length windows.
pub fn clamp_to_window(
    range: &DateRange,
    window_start: CalendarDate,
    length: u32,
) -> Option<WindowSpan> {
    let duration = range.day_count();
    if duration <= 0 {
        return None;
    }

    let length = i64::from(length);
    let start_index = days_between(range.start, window_start);
    if start_index >= length || start_index + duration <= 0 {
        return None;
    }

    let offset = start_index.max(0);
    let end_index = (start_index + duration).min(length);
    let span = end_index - offset;
    if span <= 0 {
        return None;
    }

    Some(WindowSpan {
        offset: offset as u32,
        span: span as u32,
    })
}
