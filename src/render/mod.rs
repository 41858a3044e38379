//! Rendering support around the windowing core.
//!
//! This module provides:
//! - The `CellRenderer` trait the controller drives once per cell
//! - Placement data hosts use to position the rendered window
//! - Memoization of the windowing functions
//! - Color helpers for demo content

pub mod backend;
pub mod cache;
pub mod colors;

// Re-export commonly used types
pub use backend::{CellRenderer, RainbowCells, RenderedCell, WindowPlacement};
pub use cache::{CacheStats, LruCache, WindowCache};
pub use colors::{CssColor, Rainbow, Rgb};
