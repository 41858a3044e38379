//! Benchmarks for the windowing core.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use virtual_grid::{
    compute_axis_offset, materialize_coordinates, Axis, ContainerSize, GridConfig,
    GridController, Overscan, ScrollPosition,
};

/// Uncached axis offset computation
fn bench_axis_offset(c: &mut Criterion) {
    c.bench_function("axis_offset", |b| {
        b.iter(|| {
            compute_axis_offset(
                Axis::Row,
                black_box(123_456.0),
                black_box(639_104.0),
                64.0,
                Overscan(4),
            )
        })
    });
}

/// Uncached materialization at several window sizes
fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize");
    for size in [14_u32, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| materialize_coordinates(black_box(1_000), black_box(2_000), size, size))
        });
    }
    group.finish();
}

/// Scrolling inside one cell: every frame is a cache hit
fn bench_frame_sub_cell_scroll(c: &mut Criterion) {
    let mut grid =
        GridController::new(GridConfig::new(10_000, 10_000)).expect("valid config");
    let container = ContainerSize::new(1280.0, 640.0);
    let mut top = 1_000.0;

    c.bench_function("frame_sub_cell_scroll", |b| {
        b.iter(|| {
            top = if top >= 1_020.0 { 1_000.0 } else { top + 0.5 };
            grid.frame(black_box(ScrollPosition::new(top, 0.0)), container)
        })
    });
}

/// Scrolling across cells: each frame materializes a new window
fn bench_frame_cross_cell_scroll(c: &mut Criterion) {
    let mut grid =
        GridController::new(GridConfig::new(10_000, 10_000)).expect("valid config");
    let container = ContainerSize::new(1280.0, 640.0);
    let mut top = 0.0;

    c.bench_function("frame_cross_cell_scroll", |b| {
        b.iter(|| {
            top = (top + 97.0) % 600_000.0;
            grid.frame(black_box(ScrollPosition::new(top, top)), container)
        })
    });
}

criterion_group!(
    benches,
    bench_axis_offset,
    bench_materialize,
    bench_frame_sub_cell_scroll,
    bench_frame_cross_cell_scroll
);
criterion_main!(benches);
