//! Per-axis placement of the rendered window.
//!
//! Converts a scroll offset into a pixel padding aligned to cell boundaries
//! and the index of the first rendered row/column.

use serde::{Deserialize, Serialize};

use crate::types::{
    AxisOffset, CellSize, ContainerSize, GridExtent, Overscan, RenderedWindow, ScrollPosition,
};

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Vertical: scroll top, cell height, row count.
    Row,
    /// Horizontal: scroll left, cell width, column count.
    Column,
}

impl Axis {
    /// Overscanned cells placed before the viewport on this axis.
    ///
    /// Rows round the half down and columns round it up, so an odd overscan
    /// leans toward the trailing edge vertically and the leading edge
    /// horizontally.
    pub const fn leading_overscan(self, overscan: Overscan) -> u32 {
        match self {
            Self::Row => overscan.leading_floor(),
            Self::Column => overscan.leading_ceil(),
        }
    }

    pub fn scroll_offset(self, scroll: ScrollPosition) -> f64 {
        match self {
            Self::Row => scroll.top,
            Self::Column => scroll.left,
        }
    }

    pub fn viewport_extent(self, container: ContainerSize) -> f64 {
        match self {
            Self::Row => container.height,
            Self::Column => container.width,
        }
    }

    pub fn cell_extent(self, cell: CellSize) -> f64 {
        match self {
            Self::Row => cell.height,
            Self::Column => cell.width,
        }
    }

    pub fn count(self, extent: GridExtent) -> u32 {
        match self {
            Self::Row => extent.row_count,
            Self::Column => extent.column_count,
        }
    }

    pub fn rendered(self, window: RenderedWindow) -> u32 {
        match self {
            Self::Row => window.rendered_row_count,
            Self::Column => window.rendered_column_count,
        }
    }
}

/// Largest padding that keeps the rendered window inside the grid.
///
/// Floored at zero: when the grid is smaller than the rendered window the
/// window simply starts at the origin.
pub fn max_padding(total_count: u32, rendered_count: u32, cell_size: f64) -> f64 {
    let total = f64::from(total_count) * cell_size;
    let rendered = f64::from(rendered_count) * cell_size;
    (total - rendered).max(0.0)
}

/// Padding and first index for one axis.
///
/// The sub-cell remainder of the scroll offset is dropped so the window's
/// cell boundaries coincide with the grid's, then the leading overscan is
/// subtracted and the result clamped into `[0, max_padding]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_axis_offset(
    axis: Axis,
    scroll_offset: f64,
    max_padding: f64,
    cell_size: f64,
    overscan: Overscan,
) -> AxisOffset {
    let fraction = scroll_offset % cell_size;
    let lead = f64::from(axis.leading_overscan(overscan)) * cell_size;
    let raw_padding = scroll_offset - lead - fraction;

    // max/min rather than clamp: clamp panics on a NaN bound.
    let padding = raw_padding.max(0.0).min(max_padding.max(0.0));
    let first_index = (padding / cell_size).round() as u32;

    AxisOffset {
        padding,
        first_index,
    }
}
