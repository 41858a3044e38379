//! Viewport windowing engine.
//!
//! Pure arithmetic deriving which part of a uniform grid to render:
//! - How many rows/columns cover the viewport plus overscan
//! - Where the rendered window starts on each axis (padding + first index)
//! - The concrete row-major coordinates inside the window
//!
//! Nothing here allocates state or fails; memoization lives in
//! [`crate::render::cache`].

mod axis;
mod indices;
mod window;

pub use axis::{compute_axis_offset, max_padding, Axis};
pub use indices::{materialize_coordinates, CellIndices, IndexRow};
pub use window::{compute_rendered_window, rendered_count};
