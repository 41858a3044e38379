//! Viewport and scroll windowing tests
//!
//! Tests for the rendered window size, per-axis padding and first index,
//! and coordinate materialization across the whole scroll range.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use std::collections::HashSet;
use std::sync::Arc;

use test_case::test_case;
use virtual_grid::layout::{max_padding, rendered_count};
use virtual_grid::{
    compute_axis_offset, compute_rendered_window, materialize_coordinates, Axis, CellCoordinate,
    CellSize, ContainerSize, GridConfig, GridController, GridExtent, Overscan, RenderedWindow,
    ScrollPosition,
};

fn default_grid() -> GridController {
    GridController::new(GridConfig::new(10_000, 10_000)).unwrap()
}

// =============================================================================
// WINDOW SIZE
// =============================================================================

#[test_case(640.0, 64.0, 4 => 14 ; "default rows")]
#[test_case(1280.0, 128.0, 4 => 14 ; "default columns")]
#[test_case(650.0, 64.0, 4 => 14 ; "partial cell floored")]
#[test_case(63.0, 64.0, 2 => 2 ; "viewport smaller than a cell")]
#[test_case(0.0, 64.0, 0 => 0 ; "nothing measured, no overscan")]
fn test_rendered_count(viewport: f64, cell: f64, overscan: u32) -> u32 {
    rendered_count(viewport, cell, Overscan(overscan))
}

#[test]
fn test_window_covers_viewport() {
    for overscan in 1..6 {
        for cell in [17.0, 32.0, 64.0, 100.0] {
            for viewport in [0.0, 1.0, 63.0, 64.0, 65.0, 640.0, 1000.5, 4096.0] {
                let count = rendered_count(viewport, cell, Overscan(overscan));
                assert!(count >= overscan, "count {count} below overscan {overscan}");
                assert!(
                    f64::from(count) * cell >= viewport,
                    "{count} cells of {cell}px do not cover {viewport}px"
                );
            }
        }
    }
}

#[test]
fn test_window_never_exceeds_extent() {
    let window = compute_rendered_window(
        ContainerSize::new(4000.0, 4000.0),
        CellSize::default(),
        Overscan(4),
        GridExtent::new(5, 7),
    );
    assert_eq!(window, RenderedWindow::new(5, 7));
}

// =============================================================================
// AXIS OFFSETS
// =============================================================================

#[test]
fn test_row_offset_mid_grid() {
    let offset = compute_axis_offset(Axis::Row, 1000.0, 50_000.0, 64.0, Overscan(4));
    assert_eq!(offset.padding, 832.0);
    assert_eq!(offset.first_index, 13);
}

#[test_case(Axis::Row ; "rows")]
#[test_case(Axis::Column ; "columns")]
fn test_origin_clamped_to_zero(axis: Axis) {
    for overscan in [0, 1, 4, 9] {
        let offset = compute_axis_offset(axis, 0.0, 10_000.0, 64.0, Overscan(overscan));
        assert_eq!(offset.padding, 0.0);
        assert_eq!(offset.first_index, 0);
    }
}

#[test]
fn test_max_scroll_clamped_to_max_padding() {
    // 10000 rows of 64px in a 640px viewport.
    let rendered = rendered_count(640.0, 64.0, Overscan(4));
    let max = max_padding(10_000, rendered, 64.0);
    let max_scroll = 10_000.0 * 64.0 - 640.0;

    let offset = compute_axis_offset(Axis::Row, max_scroll, max, 64.0, Overscan(4));
    assert_eq!(offset.padding, max);
    assert_eq!(offset.first_index + rendered, 10_000);

    let beyond = compute_axis_offset(Axis::Row, max_scroll * 2.0, max, 64.0, Overscan(4));
    assert_eq!(beyond.padding, max);
}

#[test_case(Axis::Row ; "rows")]
#[test_case(Axis::Column ; "columns")]
fn test_padding_bounds_and_monotonic_index(axis: Axis) {
    let cell = 48.0;
    let rendered = 20;
    let total = 500;
    let max = max_padding(total, rendered, cell);
    let max_scroll = f64::from(total) * cell - 700.0;

    let mut previous = 0;
    let mut scroll = 0.0;
    while scroll <= max_scroll {
        let offset = compute_axis_offset(axis, scroll, max, cell, Overscan(5));
        assert!(offset.padding >= 0.0, "negative padding at {scroll}");
        assert!(offset.padding <= max, "padding overshoots at {scroll}");
        assert_eq!(offset.padding % cell, 0.0, "padding not cell aligned at {scroll}");
        assert!(offset.first_index >= previous, "index went backwards at {scroll}");
        assert!(offset.first_index + rendered <= total);
        previous = offset.first_index;
        scroll += 7.25;
    }
}

#[test]
fn test_overscan_split_is_opposite_between_axes() {
    let row = compute_axis_offset(Axis::Row, 3200.0, 1e9, 64.0, Overscan(3));
    let column = compute_axis_offset(Axis::Column, 3200.0, 1e9, 64.0, Overscan(3));
    // 50 cells scrolled: rows lead by floor(3/2)=1, columns by ceil(3/2)=2.
    assert_eq!(row.first_index, 49);
    assert_eq!(column.first_index, 48);
}

#[test]
fn test_grid_smaller_than_viewport_starts_at_origin() {
    let mut grid = GridController::new(GridConfig::new(3, 2)).unwrap();
    let frame = grid.frame(
        ScrollPosition::new(500.0, 500.0),
        ContainerSize::new(1280.0, 640.0),
    );
    assert_eq!(frame.window, RenderedWindow::new(3, 2));
    assert_eq!(frame.row_offset.padding, 0.0);
    assert_eq!(frame.column_offset.padding, 0.0);
    assert_eq!(frame.indices.len(), 6);
}

// =============================================================================
// MATERIALIZATION
// =============================================================================

#[test_case(0, 0, 14, 14 ; "origin window")]
#[test_case(13, 7, 3, 5 ; "offset window")]
#[test_case(9_986, 9_990, 14, 10 ; "window at the far corner")]
fn test_materialization_complete(first_row: u32, first_col: u32, rows: u32, cols: u32) {
    let indices = materialize_coordinates(first_row, first_col, rows, cols);
    assert_eq!(indices.row_count(), rows as usize);
    assert!(indices.rows.iter().all(|row| row.cells.len() == cols as usize));

    let all: Vec<CellCoordinate> = indices.iter().collect();
    let unique: HashSet<_> = all.iter().copied().collect();
    assert_eq!(unique.len(), (rows * cols) as usize);

    for y in first_row..first_row + rows {
        for x in first_col..first_col + cols {
            assert!(unique.contains(&CellCoordinate::new(x, y)));
        }
    }

    let mut sorted = all.clone();
    sorted.sort_by_key(|c| (c.y, c.x));
    assert_eq!(all, sorted, "coordinates are not row-major");
}

// =============================================================================
// CONTROLLER
// =============================================================================

#[test]
fn test_frames_are_idempotent() {
    let mut grid = default_grid();
    let container = ContainerSize::new(1280.0, 640.0);
    let scroll = ScrollPosition::new(123_456.0, 7_890.0);
    let first = grid.frame(scroll, container);
    let second = grid.frame(scroll, container);
    assert_eq!(first, second);
    assert!(Arc::ptr_eq(&first.indices, &second.indices));

    let mut fresh = default_grid();
    assert_eq!(fresh.frame(scroll, container), first);
}

#[test]
fn test_resize_recomputes_window() {
    let mut grid = default_grid();
    let scroll = ScrollPosition::new(1000.0, 1000.0);
    let small = grid.frame(scroll, ContainerSize::new(640.0, 320.0));
    let large = grid.frame(scroll, ContainerSize::new(1280.0, 640.0));
    assert_eq!(small.window, RenderedWindow::new(9, 9));
    assert_eq!(large.window, RenderedWindow::new(14, 14));
    assert_eq!(large.indices.len(), 196);
}

#[test]
fn test_scroll_through_grid_stays_in_bounds() {
    let mut grid = GridController::new(GridConfig::new(1_000, 300)).unwrap();
    let container = ContainerSize::new(1000.0, 700.0);
    let content = grid.content_size();
    let max_top = content.height - container.height;
    let max_left = content.width - container.width;

    let mut top = 0.0;
    while top <= max_top {
        let left = (top * 0.3).min(max_left);
        let frame = grid.frame(ScrollPosition::new(top, left), container);
        let last_row = frame.row_offset.first_index + frame.window.rendered_row_count;
        let last_col = frame.column_offset.first_index + frame.window.rendered_column_count;
        assert!(last_row <= 1_000);
        assert!(last_col <= 300);

        // Every visible row is in the window.
        let first_visible = (top / 64.0).floor() as u32;
        let last_visible = ((top + container.height) / 64.0).ceil() as u32 - 1;
        assert!(frame.indices.contains(CellCoordinate::new(
            frame.column_offset.first_index,
            first_visible
        )));
        assert!(frame.indices.contains(CellCoordinate::new(
            frame.column_offset.first_index,
            last_visible.min(999)
        )));
        top += 333.0;
    }
}
