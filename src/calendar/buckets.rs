//! Day buckets for month calendars.
//!
//! Every record is expanded into the days it covers and appended to each
//! day's bucket. Within a bucket, records keep their input order, so
//! tooltips list the same assignments in the same order on every build.
//!
//! Records with malformed or inverted dates are skipped (and logged) on
//! their own; the rest of the pass continues.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::color::Palette;
use crate::interval::DateRange;
use crate::models::{iso_day, parse_calendar_date, CalendarDate, Scheduled};

/// Records grouped by the calendar days they cover.
#[derive(Debug, Clone)]
pub struct DayBucketMap<'a, T> {
    buckets: BTreeMap<CalendarDate, Vec<&'a T>>,
    skipped: Vec<String>,
}

impl<'a, T> Default for DayBucketMap<'a, T> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }
}

/// Buckets every covered day of every record.
pub fn index_by_day<T: Scheduled>(records: &[T]) -> DayBucketMap<'_, T> {
    DayBucketMap::build(records, None)
}

/// Buckets only the days that fall inside `within`.
///
/// Use this for a visible month so a multi-year booking does not
/// enumerate days nobody will look at.
pub fn index_by_day_within<T: Scheduled>(records: &[T], within: DateRange) -> DayBucketMap<'_, T> {
    DayBucketMap::build(records, Some(within))
}

impl<'a, T: Scheduled> DayBucketMap<'a, T> {
    fn build(records: &'a [T], within: Option<DateRange>) -> Self {
        let mut map = Self::default();

        for record in records {
            let range = match record.date_range() {
                Ok(r) => r,
                Err(err) => {
                    warn!(assignment_id = record.id(), error = %err, "skipping record with malformed dates");
                    map.skipped.push(record.id().to_string());
                    continue;
                }
            };
            if range.is_inverted() {
                warn!(
                    assignment_id = record.id(),
                    start = %range.start,
                    end = %range.end,
                    "skipping record that ends before it starts"
                );
                map.skipped.push(record.id().to_string());
                continue;
            }

            let visible = match within {
                None => range,
                Some(w) if range.overlaps(&w) => {
                    DateRange::new(range.start.max(w.start), range.end.min(w.end))
                }
                Some(_) => continue,
            };

            for day in visible.days() {
                map.buckets.entry(day).or_default().push(record);
            }
        }

        debug!(
            records = records.len(),
            days = map.buckets.len(),
            skipped = map.skipped.len(),
            "built day buckets"
        );
        map
    }

    /// Records covering `day`, in input order.
    pub fn get(&self, day: CalendarDate) -> &[&'a T] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records covering an ISO day key (`YYYY-MM-DD`). Empty for bad keys.
    pub fn get_iso(&self, key: &str) -> &[&'a T] {
        match parse_calendar_date(key) {
            Ok(day) => self.get(day),
            Err(_) => &[],
        }
    }

    /// Whether any record covers `day`.
    pub fn is_occupied(&self, day: CalendarDate) -> bool {
        !self.get(day).is_empty()
    }

    /// Up to `limit` project colors for a day's badge dots.
    pub fn badges(&self, day: CalendarDate, limit: usize, palette: &Palette) -> Vec<&'static str> {
        self.get(day)
            .iter()
            .take(limit)
            .map(|r| palette.color_for(r.project_label()))
            .collect()
    }

    /// Occupied days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of occupied days.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no day is occupied.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Ids of records that were skipped, in input order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// The map keyed by ISO day strings, as presentation consumes it.
    pub fn to_iso_map(&self) -> BTreeMap<String, Vec<&'a T>> {
        self.buckets
            .iter()
            .map(|(day, list)| (iso_day(*day), list.clone()))
            .collect()
    }
}
