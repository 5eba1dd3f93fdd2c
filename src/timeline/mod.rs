//! Timeline (Gantt) projection.
//!
//! Places engineers on rows and their assignments as bars over a sliding
//! window of days. Pure: re-run it whenever the window pages or the
//! filtered record set changes.

mod layout;
mod window;

pub use layout::{TimelineCell, TimelineInput, TimelineLayout, TimelineLayoutPlanner, TimelineRow};
pub use window::VisibleWindow;
