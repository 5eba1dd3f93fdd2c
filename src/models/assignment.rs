//! Assignment model.
//!
//! An assignment books a share of one engineer's capacity on one project
//! for an inclusive range of calendar days.
//!
//! Two shapes exist: [`RawAssignment`] mirrors the store's JSON with date
//! strings, and [`Assignment`] carries parsed calendar dates. Allocation
//! outside 0..=100 and inverted ranges are tolerated here; downstream
//! passes decide what they mean.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use super::date::{parse_optional, CalendarDate};
use super::{Record, Scheduled};
use crate::error::Result;
use crate::interval::DateRange;

/// Assignment as shipped by the record store (dates still as strings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Assigned engineer. Empty when the store sent null.
    #[serde(default, deserialize_with = "null_as_default")]
    pub engineer_id: String,
    /// Target project. Empty when the store sent null.
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: String,
    /// Share of the engineer's capacity, in percent. Any JSON number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub allocation_percentage: f64,
    /// ISO-8601 start (date or date-time).
    #[serde(default)]
    pub start_date: Option<String>,
    /// ISO-8601 end (date or date-time), inclusive.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Role label on the project.
    #[serde(default)]
    pub role: String,
    /// Tentative (not yet confirmed) booking.
    #[serde(default)]
    pub is_tentative: Option<bool>,
}

/// Reads `null` as the type's default instead of failing the batch.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawAssignment {
    /// Allocation as whole percent, rounded half up.
    pub fn allocation_percent(&self) -> i32 {
        let rounded = (self.allocation_percentage + 0.5).floor();
        if rounded != self.allocation_percentage {
            debug!(
                assignment_id = %self.id,
                allocation = self.allocation_percentage,
                "rounding fractional allocation"
            );
        }
        rounded as i32
    }
}

/// Assignment with parsed calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Assigned engineer.
    pub engineer_id: String,
    /// Target project.
    pub project_id: String,
    /// Share of the engineer's capacity, in percent.
    pub allocation_percentage: i32,
    /// First booked day.
    pub start_date: CalendarDate,
    /// Last booked day (inclusive).
    pub end_date: CalendarDate,
    /// Role label on the project.
    pub role: String,
    /// Tentative (not yet confirmed) booking.
    pub is_tentative: bool,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        id: impl Into<String>,
        engineer_id: impl Into<String>,
        project_id: impl Into<String>,
        allocation_percentage: i32,
        start_date: CalendarDate,
        end_date: CalendarDate,
    ) -> Self {
        Self {
            id: id.into(),
            engineer_id: engineer_id.into(),
            project_id: project_id.into(),
            allocation_percentage,
            start_date,
            end_date,
            role: String::new(),
            is_tentative: false,
        }
    }

    /// Sets the role label.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Marks the booking as tentative.
    pub fn tentative(mut self) -> Self {
        self.is_tentative = true;
        self
    }

    /// Parses a raw record. Fails if either date is missing or malformed.
    pub fn from_raw(raw: &RawAssignment) -> Result<Self> {
        let start_date = parse_optional(raw.start_date.as_deref())
            .map_err(|e| e.in_field(raw.id.as_str(), "startDate"))?;
        let end_date = parse_optional(raw.end_date.as_deref())
            .map_err(|e| e.in_field(raw.id.as_str(), "endDate"))?;

        Ok(Self {
            id: raw.id.clone(),
            engineer_id: raw.engineer_id.clone(),
            project_id: raw.project_id.clone(),
            allocation_percentage: raw.allocation_percent(),
            start_date,
            end_date,
            role: raw.role.clone(),
            is_tentative: raw.is_tentative.unwrap_or(false),
        })
    }

    /// The inclusive day range this assignment covers.
    #[inline]
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Parses a batch of raw records, dropping (and logging) the malformed ones.
///
/// Input order is preserved for the survivors.
pub fn parse_assignments(raws: &[RawAssignment]) -> Vec<Assignment> {
    raws.iter()
        .filter_map(|raw| match Assignment::from_raw(raw) {
            Ok(a) => Some(a),
            Err(err) => {
                warn!(assignment_id = %raw.id, error = %err, "skipping assignment with malformed dates");
                None
            }
        })
        .collect()
}

impl Record for RawAssignment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Assignment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Scheduled for RawAssignment {
    fn date_range(&self) -> Result<DateRange> {
        Assignment::from_raw(self).map(|a| a.range())
    }
}

impl Scheduled for Assignment {
    fn date_range(&self) -> Result<DateRange> {
        Ok(self.range())
    }
}
