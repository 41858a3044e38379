//! How many rows/columns must be rendered to cover the viewport.

use crate::types::{CellSize, ContainerSize, GridExtent, Overscan, RenderedWindow};

/// Cells needed to cover `viewport_extent` on one axis, plus overscan.
///
/// `floor(viewport / cell) + overscan`. A partially visible trailing cell is
/// covered by the overscan, so the result covers the viewport whenever
/// overscan is at least one. Negative or NaN inputs are a caller error and
/// produce an unspecified count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rendered_count(viewport_extent: f64, cell_size: f64, overscan: Overscan) -> u32 {
    let covering = (viewport_extent / cell_size).floor() as u32;
    covering.saturating_add(overscan.0)
}

/// Rendered window for both axes, clamped to the grid extent.
pub fn compute_rendered_window(
    container: ContainerSize,
    cell: CellSize,
    overscan: Overscan,
    extent: GridExtent,
) -> RenderedWindow {
    let rows = rendered_count(container.height, cell.height, overscan);
    let columns = rendered_count(container.width, cell.width, overscan);
    RenderedWindow::new(rows.min(extent.row_count), columns.min(extent.column_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_scenario() {
        let window = compute_rendered_window(
            ContainerSize::new(1280.0, 640.0),
            CellSize::new(128.0, 64.0),
            Overscan(4),
            GridExtent::new(10_000, 10_000),
        );
        assert_eq!(window, RenderedWindow::new(14, 14));
    }

    #[test]
    fn test_partial_cell_is_floored() {
        assert_eq!(rendered_count(650.0, 64.0, Overscan(0)), 10);
        assert_eq!(rendered_count(650.0, 64.0, Overscan(1)), 11);
    }

    #[test]
    fn test_zero_viewport_yields_overscan() {
        assert_eq!(rendered_count(0.0, 64.0, Overscan(4)), 4);
        assert_eq!(rendered_count(0.0, 64.0, Overscan(0)), 0);
    }

    #[test]
    fn test_clamped_to_extent() {
        let window = compute_rendered_window(
            ContainerSize::new(1280.0, 640.0),
            CellSize::default(),
            Overscan(4),
            GridExtent::new(3, 100),
        );
        assert_eq!(window.rendered_row_count, 3);
        assert_eq!(window.rendered_column_count, 14);
    }
}
