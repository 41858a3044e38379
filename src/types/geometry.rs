use serde::{Deserialize, Serialize};

/// Default cell width in pixels.
pub const DEFAULT_CELL_WIDTH: f64 = 128.0;
/// Default cell height in pixels.
pub const DEFAULT_CELL_HEIGHT: f64 = 64.0;
/// Default number of overscanned rows/columns.
pub const DEFAULT_OVERSCAN: u32 = 4;

/// Scroll offsets of the host container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPosition {
    pub top: f64,
    pub left: f64,
}

impl ScrollPosition {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Size of the visible viewport in pixels. `0` on an axis means "not measured yet".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the host has reported a usable size on both axes.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Fixed size of every cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl CellSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Total logical size of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridExtent {
    pub row_count: u32,
    pub column_count: u32,
}

impl GridExtent {
    pub const fn new(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
        }
    }

    /// Full scrollable content size for the given cell size.
    pub fn content_size(&self, cell: CellSize) -> ContainerSize {
        ContainerSize {
            width: f64::from(self.column_count) * cell.width,
            height: f64::from(self.row_count) * cell.height,
        }
    }
}

/// Extra rows/columns rendered beyond what covers the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overscan(pub u32);

impl Default for Overscan {
    fn default() -> Self {
        Self(DEFAULT_OVERSCAN)
    }
}

impl Overscan {
    /// Overscan cells placed before the viewport, rounding half down.
    pub const fn leading_floor(self) -> u32 {
        self.0 / 2
    }

    /// Overscan cells placed before the viewport, rounding half up.
    pub const fn leading_ceil(self) -> u32 {
        self.0 / 2 + self.0 % 2
    }
}

/// How many rows and columns are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedWindow {
    pub rendered_row_count: u32,
    pub rendered_column_count: u32,
}

impl RenderedWindow {
    pub const fn new(rendered_row_count: u32, rendered_column_count: u32) -> Self {
        Self {
            rendered_row_count,
            rendered_column_count,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.rendered_row_count == 0 || self.rendered_column_count == 0
    }

    /// Number of cells in the window.
    pub fn cell_count(&self) -> usize {
        self.rendered_row_count as usize * self.rendered_column_count as usize
    }
}

/// Where the rendered window starts on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOffset {
    /// Pixel offset of the window inside the full-size scrollable surface.
    pub padding: f64,
    /// Logical index of the first rendered row/column.
    pub first_index: u32,
}

/// A single grid cell: column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub x: u32,
    pub y: u32,
}

impl CellCoordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_overscan_split() {
        assert_eq!(Overscan(4).leading_floor(), 2);
        assert_eq!(Overscan(4).leading_ceil(), 2);
        assert_eq!(Overscan(5).leading_floor(), 2);
        assert_eq!(Overscan(5).leading_ceil(), 3);
        assert_eq!(Overscan(0).leading_ceil(), 0);
        assert_eq!(Overscan(1).leading_floor(), 0);
        assert_eq!(Overscan(1).leading_ceil(), 1);
    }

    #[test]
    fn test_content_size() {
        let extent = GridExtent::new(10_000, 500);
        let size = extent.content_size(CellSize::default());
        assert_eq!(size.height, 640_000.0);
        assert_eq!(size.width, 64_000.0);
    }

    #[test]
    fn test_unmeasured_container() {
        assert!(!ContainerSize::default().is_measured());
        assert!(!ContainerSize::new(800.0, 0.0).is_measured());
        assert!(ContainerSize::new(800.0, 600.0).is_measured());
    }

    #[test]
    fn test_window_cell_count() {
        assert_eq!(RenderedWindow::new(14, 14).cell_count(), 196);
        assert!(RenderedWindow::new(0, 14).is_empty());
    }

    #[test]
    fn test_coordinate_serializes_as_xy() {
        let json = serde_json::to_string(&CellCoordinate::new(3, 7)).unwrap_or_default();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
    }
}
