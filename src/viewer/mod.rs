//! Grid controller - drives the windowing core from host signals.
//!
//! This module provides:
//! - `GridController`: turns (scroll position, container size) into a frame
//!   and drives a per-cell renderer over it
//! - Host-side signal policies: scroll throttling and element size tracking
//! - `VirtualGrid` (wasm32 only): a DOM host wiring it all to a scrollable element
//!
//! The controller keeps no state besides its configuration and its memo
//! cache; the host owns the event subscriptions and decides when to call it.

mod scroll;
mod size;
#[cfg(target_arch = "wasm32")]
mod web;

pub use scroll::ScrollThrottle;
pub use size::ElementSize;
#[cfg(target_arch = "wasm32")]
pub use web::VirtualGrid;

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::layout::{max_padding, Axis, CellIndices};
use crate::render::{CacheStats, CellRenderer, RenderedCell, WindowCache, WindowPlacement};
use crate::types::{
    AxisOffset, CellSize, ContainerSize, GridConfig, RenderedWindow, ScrollPosition,
};

/// Everything a host needs to draw one state of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFrame {
    /// Size of the full scrollable surface.
    pub content: ContainerSize,
    pub window: RenderedWindow,
    pub row_offset: AxisOffset,
    pub column_offset: AxisOffset,
    pub indices: Arc<CellIndices>,
}

impl GridFrame {
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Layout data for positioning the rendered window.
    pub fn placement(&self, cell: CellSize) -> WindowPlacement {
        WindowPlacement::new(
            self.content,
            self.window,
            self.row_offset,
            self.column_offset,
            cell,
        )
    }
}

/// A frame together with the content rendered for each of its cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedFrame<T> {
    pub frame: GridFrame,
    pub cells: Vec<RenderedCell<T>>,
}

/// Windowing for one grid instance.
///
/// Changing the configuration means building a new controller.
pub struct GridController {
    config: GridConfig,
    cache: WindowCache,
    warned_unmeasured: bool,
}

impl GridController {
    /// # Errors
    /// Returns `GridError::InvalidConfig` if `config` fails validation.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cache: WindowCache::new(),
            warned_unmeasured: false,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Size of the full scrollable surface.
    pub fn content_size(&self) -> ContainerSize {
        self.config.extent().content_size(self.config.cell_size())
    }

    /// Compute the frame for the given host state.
    ///
    /// An unmeasured container renders nothing.
    pub fn frame(&mut self, scroll: ScrollPosition, container: ContainerSize) -> GridFrame {
        let content = self.content_size();
        if !container.is_measured() {
            if !self.warned_unmeasured {
                log::warn!("grid container has no size yet; rendering nothing");
                self.warned_unmeasured = true;
            }
            return GridFrame {
                content,
                window: RenderedWindow::default(),
                row_offset: AxisOffset::default(),
                column_offset: AxisOffset::default(),
                indices: self.cache.materialize(0, 0, 0, 0),
            };
        }

        let extent = self.config.extent();
        let cell = self.config.cell_size();
        let overscan = self.config.overscan();

        let window = self
            .cache
            .rendered_window(container, cell, overscan, extent);
        let row_offset = self.axis_offset(Axis::Row, scroll, window);
        let column_offset = self.axis_offset(Axis::Column, scroll, window);
        let indices = self.cache.materialize(
            row_offset.first_index,
            column_offset.first_index,
            window.rendered_row_count,
            window.rendered_column_count,
        );

        log::debug!(
            "frame: {}x{} cells from ({}, {}), padding top={} left={}",
            window.rendered_row_count,
            window.rendered_column_count,
            row_offset.first_index,
            column_offset.first_index,
            row_offset.padding,
            column_offset.padding
        );

        GridFrame {
            content,
            window,
            row_offset,
            column_offset,
            indices,
        }
    }

    /// Compute the frame and render each of its cells, row-major.
    pub fn render<R: CellRenderer>(
        &mut self,
        scroll: ScrollPosition,
        container: ContainerSize,
        renderer: &mut R,
    ) -> RenderedFrame<R::Output> {
        let frame = self.frame(scroll, container);
        let cells = frame
            .indices
            .iter()
            .map(|coord| RenderedCell {
                coord,
                content: renderer.render_cell(coord),
            })
            .collect();
        RenderedFrame { frame, cells }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop memoized results. Subsequent frames recompute.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn axis_offset(
        &mut self,
        axis: Axis,
        scroll: ScrollPosition,
        window: RenderedWindow,
    ) -> AxisOffset {
        let cell = axis.cell_extent(self.config.cell_size());
        let max = max_padding(
            axis.count(self.config.extent()),
            axis.rendered(window),
            cell,
        );
        self.cache.axis_offset(
            axis,
            axis.scroll_offset(scroll),
            max,
            cell,
            self.config.overscan(),
        )
    }
}
