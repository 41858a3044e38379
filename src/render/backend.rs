//! Cell renderer trait and host-facing placement data.
//!
//! The grid never decides what a cell looks like; it hands each materialized
//! coordinate to a [`CellRenderer`] and tells the host where to put the
//! rendered window via [`WindowPlacement`].

use serde::Serialize;

use super::colors::{CssColor, Rainbow};
use crate::types::{AxisOffset, CellCoordinate, CellSize, ContainerSize, RenderedWindow};

/// Produces renderable content for one grid cell.
///
/// May be called again for a coordinate it has already seen, so it should be
/// pure (or at least idempotent) in `(x, y)`.
pub trait CellRenderer {
    type Output;

    fn render_cell(&mut self, coord: CellCoordinate) -> Self::Output;
}

impl<T, F> CellRenderer for F
where
    F: FnMut(CellCoordinate) -> T,
{
    type Output = T;

    fn render_cell(&mut self, coord: CellCoordinate) -> T {
        self(coord)
    }
}

/// Rendered content paired with the coordinate it was rendered for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCell<T> {
    #[serde(flatten)]
    pub coord: CellCoordinate,
    pub content: T,
}

/// Renders every cell as its rainbow background color.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowCells {
    pub rainbow: Rainbow,
}

impl CellRenderer for RainbowCells {
    type Output = CssColor;

    fn render_cell(&mut self, coord: CellCoordinate) -> CssColor {
        self.rainbow.cell(coord.x, coord.y).to_css()
    }
}

/// Where and how the host lays out the rendered window.
///
/// The window is an absolutely positioned layout grid inside a relatively
/// positioned surface sized to the full content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowPlacement {
    /// Size of the full scrollable surface.
    pub content: ContainerSize,
    pub top: f64,
    pub left: f64,
    pub rows: u32,
    pub columns: u32,
    pub cell: CellSize,
}

impl WindowPlacement {
    pub fn new(
        content: ContainerSize,
        window: RenderedWindow,
        row_offset: AxisOffset,
        column_offset: AxisOffset,
        cell: CellSize,
    ) -> Self {
        Self {
            content,
            top: row_offset.padding,
            left: column_offset.padding,
            rows: window.rendered_row_count,
            columns: window.rendered_column_count,
            cell,
        }
    }

    /// `grid-template-columns` value, e.g. `repeat(14,128px)`.
    pub fn grid_template_columns(&self) -> String {
        format!("repeat({},{}px)", self.columns, self.cell.width)
    }

    /// `grid-template-rows` value, e.g. `repeat(14,64px)`.
    pub fn grid_template_rows(&self) -> String {
        format!("repeat({},{}px)", self.rows, self.cell.height)
    }
}
