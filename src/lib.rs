//! Allocation and interval-timeline engine for team resourcing.
//!
//! Managers book engineers onto projects for a percentage of capacity over
//! a range of days. This crate turns those bookings into utilization
//! figures, calendar day buckets, and timeline grid placements. Every
//! operation is a pure function of its inputs: no I/O, no hidden state.
//!
//! # Modules
//!
//! - **`models`**: Input records (`Engineer`, `Project`, `Assignment`)
//! - **`interval`**: Inclusive day ranges, day counts, window clipping
//! - **`allocation`**: Utilization, next-available dates, team averages
//! - **`calendar`**: Day buckets and month windows
//! - **`timeline`**: Sliding window and grid layout
//! - **`color`**: Deterministic project colors
//! - **`filter`**: Case-insensitive substring filters
//! - **`board`**: Joined assignment rows, replace-by-id updates
//! - **`dashboard`**: Manager overview composition
//! - **`validation`**: Data-quality report for input records
//!
//! # Failure Model
//!
//! Records with malformed dates or inverted ranges are logged through
//! `tracing` and skipped; they never fail a pass. Only boundary parsing
//! returns errors.

pub mod allocation;
pub mod board;
pub mod calendar;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod interval;
pub mod models;
pub mod timeline;
pub mod validation;

pub use config::EngineConfig;
pub use error::DateParseError;
