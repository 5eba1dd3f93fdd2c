//! Gantt-style grid placement.
//!
//! # Grid
//! Rows: `header_rows` header rows, then one row per engineer in the
//! caller's order. Columns: `fixed_left_columns` label columns, then one
//! column per visible day. Indices here are 0-based; add 1 for CSS grid
//! line numbers.
//!
//! # Bars
//! Each assignment becomes one bar clipped to the window. Bars that miss
//! the window are dropped. Overlapping bars for one engineer are kept
//! side by side: that overlap is the over-allocation signal, not a
//! layout conflict.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::VisibleWindow;
use crate::board::AssignmentView;
use crate::color::Palette;
use crate::config::EngineConfig;
use crate::filter::AssignmentFilter;
use crate::models::{Engineer, Scheduled};

/// One engineer and the bars to place on their row.
#[derive(Debug, Clone)]
pub struct TimelineInput<'a, T> {
    /// Row owner.
    pub engineer: &'a Engineer,
    /// Bars, in drawing order.
    pub bars: Vec<&'a T>,
}

/// A placed engineer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    /// Engineer identifier.
    pub engineer_id: String,
    /// Engineer display name.
    pub engineer_name: String,
    /// Position among engineer rows (0-based).
    pub engineer_row_index: u32,
    /// Grid row, counting header rows.
    pub grid_row: u32,
}

/// A placed assignment bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineCell {
    /// Assignment identifier.
    pub assignment_id: String,
    /// Owning row (0-based among engineer rows).
    pub engineer_row_index: u32,
    /// Grid row, counting header rows.
    pub grid_row: u32,
    /// Day offset from the window start.
    pub column_offset: u32,
    /// Grid column, counting label columns.
    pub grid_column: u32,
    /// Visible width in days (>= 1).
    pub column_span: u32,
    /// Bar color token.
    pub color: &'static str,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    /// Window the layout was computed for.
    pub window: VisibleWindow,
    /// Engineer rows, in input order.
    pub rows: Vec<TimelineRow>,
    /// Surviving bars, row by row, in input order within a row.
    pub cells: Vec<TimelineCell>,
}

impl TimelineLayout {
    /// Bars placed on one engineer row.
    pub fn cells_for_row(&self, engineer_row_index: u32) -> impl Iterator<Item = &TimelineCell> {
        self.cells
            .iter()
            .filter(move |c| c.engineer_row_index == engineer_row_index)
    }
}

/// Projects bars onto a fixed day window.
#[derive(Debug, Clone)]
pub struct TimelineLayoutPlanner {
    window: VisibleWindow,
    fixed_left_columns: u32,
    header_rows: u32,
    palette: Palette,
}

impl TimelineLayoutPlanner {
    /// Creates a planner with grid offsets from `config`.
    pub fn new(window: VisibleWindow, config: &EngineConfig) -> Self {
        Self {
            window,
            fixed_left_columns: config.fixed_left_columns,
            header_rows: config.header_rows,
            palette: Palette::TIMELINE,
        }
    }

    /// Uses a different palette for bar colors.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The window in use.
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Places the given rows and bars.
    pub fn plan<T: Scheduled>(&self, rows: &[TimelineInput<'_, T>]) -> TimelineLayout {
        let mut placed_rows = Vec::with_capacity(rows.len());
        let mut cells = Vec::new();
        let mut dropped = 0usize;

        for (i, input) in rows.iter().enumerate() {
            let row_index = i as u32;
            let grid_row = row_index + self.header_rows;
            placed_rows.push(TimelineRow {
                engineer_id: input.engineer.id.clone(),
                engineer_name: input.engineer.name.clone(),
                engineer_row_index: row_index,
                grid_row,
            });

            for bar in &input.bars {
                let range = match bar.date_range() {
                    Ok(r) => r,
                    Err(err) => {
                        warn!(assignment_id = bar.id(), error = %err, "skipping bar with malformed dates");
                        dropped += 1;
                        continue;
                    }
                };
                if range.is_inverted() {
                    warn!(assignment_id = bar.id(), "skipping bar that ends before it starts");
                    dropped += 1;
                    continue;
                }

                let Some(span) = self.window.clamp(&range) else {
                    dropped += 1;
                    continue;
                };

                cells.push(TimelineCell {
                    assignment_id: bar.id().to_string(),
                    engineer_row_index: row_index,
                    grid_row,
                    column_offset: span.offset,
                    grid_column: span.offset + self.fixed_left_columns,
                    column_span: span.span,
                    color: self.palette.color_for(bar.project_label()),
                });
            }
        }

        debug!(
            window_start = %self.window.start,
            rows = placed_rows.len(),
            bars = cells.len(),
            dropped,
            "planned timeline"
        );

        TimelineLayout {
            window: self.window,
            rows: placed_rows,
            cells,
        }
    }

    /// Filters engineers and joined rows, then places them.
    ///
    /// Engineers left with no matching assignment get no row. A matching
    /// assignment outside the window still keeps its engineer's row.
    pub fn plan_filtered(
        &self,
        engineers: &[Engineer],
        views: &[AssignmentView],
        filter: &AssignmentFilter,
    ) -> TimelineLayout {
        let mut by_engineer: HashMap<&str, Vec<&AssignmentView>> = HashMap::new();
        for view in filter.apply(views) {
            by_engineer
                .entry(view.assignment.engineer_id.as_str())
                .or_default()
                .push(view);
        }

        let inputs: Vec<TimelineInput<'_, AssignmentView>> = filter
            .engineer_rows(engineers, views)
            .into_iter()
            .map(|engineer| TimelineInput {
                engineer,
                bars: by_engineer.remove(engineer.id.as_str()).unwrap_or_default(),
            })
            .collect();

        self.plan(&inputs)
    }
}
