//! Resourcing domain models.
//!
//! Read-only input records supplied by the surrounding application:
//! engineers from the user directory, projects, and assignments linking
//! the two for a percentage of capacity over a range of days.
//!
//! # Record Shapes
//!
//! | Type | Key fields |
//! |------|-----------|
//! | `Engineer` | id, name, skills, seniority, max capacity, department |
//! | `Project` | id, name, status |
//! | `RawAssignment` | id, engineer, project, allocation, date strings, role |
//! | `Assignment` | same as raw, with parsed calendar dates |

mod assignment;
mod date;
mod engineer;
mod project;

pub use assignment::{parse_assignments, Assignment, RawAssignment};
pub use date::{iso_day, parse_calendar_date, CalendarDate};
pub use engineer::{Engineer, ENGINEER_ROLE};
pub use project::{Project, ProjectStatus};

use crate::error::Result;
use crate::interval::DateRange;

/// A record addressable by identifier.
pub trait Record {
    /// Unique identifier.
    fn id(&self) -> &str;
}

/// A record occupying a range of calendar days.
///
/// Implementors whose dates may be malformed report that as `Err`;
/// callers skip such records instead of failing the whole pass.
pub trait Scheduled: Record {
    /// The inclusive day range, or why it could not be determined.
    fn date_range(&self) -> Result<DateRange>;

    /// Project label used for colors and tooltips. Empty when unknown.
    fn project_label(&self) -> &str {
        ""
    }
}
