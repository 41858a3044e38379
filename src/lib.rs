//! virtual-grid - windowed rendering for huge uniform grids
//!
//! Renders grids of tens of thousands of rows and columns inside a finite
//! scrollable viewport without ever materializing more than a small window:
//! - Overscan-padded window sizes that always cover the viewport
//! - Cell-aligned padding so the window's grid lines match the scrolled grid
//! - Row-major coordinate materialization, memoized per grid instance
//! - A DOM host (WebAssembly) with throttled scroll and eager resize handling
//!
//! # Usage (Rust)
//!
//! ```rust
//! use virtual_grid::{ContainerSize, GridConfig, GridController, ScrollPosition};
//!
//! let mut grid = GridController::new(GridConfig::new(10_000, 10_000))?;
//! let frame = grid.frame(ScrollPosition::new(1000.0, 0.0), ContainerSize::new(1280.0, 640.0));
//! assert_eq!(frame.row_offset.first_index, 13);
//! assert_eq!(frame.indices.len(), 14 * 14);
//! # Ok::<(), virtual_grid::GridError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { VirtualGrid } from 'virtual-grid';
//! await init();
//! const grid = new VirtualGrid(host, { rowCount: 10000, columnCount: 10000 },
//!     ({ x, y }) => `${x},${y}`);
//! ```

pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, Result};
pub use layout::{
    compute_axis_offset, compute_rendered_window, materialize_coordinates, Axis, CellIndices,
};
pub use render::{CellRenderer, WindowCache};
pub use types::*;
pub use viewer::{GridController, GridFrame, RenderedFrame};

#[cfg(target_arch = "wasm32")]
pub use viewer::VirtualGrid;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
