//! Value types shared by the windowing core, the controller and the hosts.

mod config;
mod geometry;

pub use config::*;
pub use geometry::*;
