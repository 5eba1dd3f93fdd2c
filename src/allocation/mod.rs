//! Allocation aggregation.
//!
//! Turns a flat list of dated, percentage-allocated assignments into
//! per-engineer utilization and availability figures at a reference date.
//!
//! # Views
//!
//! - **`AllocationAggregator`**: manager dashboard (per-engineer snapshots
//!   and team scalars)
//! - **`EngineerSummary`**: an engineer's own dashboard
//! - **`available_capacity`**: remaining headroom for new bookings

mod aggregator;
mod capacity;

pub use aggregator::{
    average_utilization, is_active, next_available_date, utilization, AllocationAggregator,
    AllocationReport, TeamStats, UtilizationSnapshot,
};
pub use capacity::{available_capacity, EngineerSummary};
