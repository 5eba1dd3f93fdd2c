//! Boundary errors.
//!
//! Only parsing at the record boundary can fail. Engine passes never
//! return errors: bad records are logged and skipped.

use thiserror::Error;

/// Result alias for boundary parsing.
pub type Result<T> = std::result::Result<T, DateParseError>;

/// A date string that could not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The field was absent or blank.
    #[error("missing date")]
    Missing,

    /// The field did not match any accepted ISO-8601 shape.
    #[error("unrecognized date '{input}'")]
    Unrecognized { input: String },

    /// A record-level failure naming the offending field.
    #[error("assignment {record_id}: {field}: {source}")]
    Field {
        record_id: String,
        field: &'static str,
        #[source]
        source: Box<DateParseError>,
    },
}

impl DateParseError {
    /// Wraps this error with the record and field it came from.
    pub fn in_field(self, record_id: impl Into<String>, field: &'static str) -> Self {
        Self::Field {
            record_id: record_id.into(),
            field,
            source: Box::new(self),
        }
    }
}
