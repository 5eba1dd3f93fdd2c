//! Calendar projections.
//!
//! Groups dated records by the calendar days they cover, for month
//! calendar badges and per-day tooltips.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_staffing::calendar::{index_by_day, MonthWindow};
//! use u_staffing::models::Assignment;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
//! let assignments = vec![Assignment::new("A1", "E1", "P1", 50, d(2), d(4))];
//!
//! let june = MonthWindow::containing(d(15));
//! let buckets = index_by_day(&assignments);
//! assert!(buckets.is_occupied(d(3)));
//! assert_eq!(june.visible(&assignments).len(), 1);
//! ```

mod buckets;
mod month;

pub use buckets::{index_by_day, index_by_day_within, DayBucketMap};
pub use month::MonthWindow;
