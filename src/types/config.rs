use serde::{Deserialize, Serialize};

use super::geometry::{
    CellSize, GridExtent, Overscan, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_OVERSCAN,
};
use crate::error::{GridError, Result};

/// Default minimum interval between accepted scroll signals (one animation frame).
pub const DEFAULT_THROTTLE_MS: f64 = 16.0;

fn default_cell_width() -> f64 {
    DEFAULT_CELL_WIDTH
}

fn default_cell_height() -> f64 {
    DEFAULT_CELL_HEIGHT
}

fn default_over_scan() -> u32 {
    DEFAULT_OVERSCAN
}

fn default_throttle_ms() -> f64 {
    DEFAULT_THROTTLE_MS
}

/// Grid configuration. Constant for the lifetime of a grid instance.
///
/// Field names follow the JS props (`rowCount`, `cellWidth`, ...) so the same
/// JSON works from a config file and from the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub row_count: u32,
    pub column_count: u32,
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
    #[serde(default = "default_over_scan")]
    pub over_scan: u32,
}

impl GridConfig {
    /// Config with the default cell size and overscan.
    pub fn new(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            over_scan: DEFAULT_OVERSCAN,
        }
    }

    #[must_use]
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    #[must_use]
    pub fn with_over_scan(mut self, over_scan: u32) -> Self {
        self.over_scan = over_scan;
        self
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Returns `GridError::Json` on malformed JSON and
    /// `GridError::InvalidConfig` when a constraint is violated.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration surface constraints: positive counts and
    /// positive, finite cell dimensions.
    ///
    /// # Errors
    /// Returns `GridError::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 {
            return Err(GridError::InvalidConfig("rowCount must be > 0".into()));
        }
        if self.column_count == 0 {
            return Err(GridError::InvalidConfig("columnCount must be > 0".into()));
        }
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "cellWidth must be a positive number, got {}",
                self.cell_width
            )));
        }
        if !(self.cell_height.is_finite() && self.cell_height > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "cellHeight must be a positive number, got {}",
                self.cell_height
            )));
        }
        Ok(())
    }

    pub fn extent(&self) -> GridExtent {
        GridExtent::new(self.row_count, self.column_count)
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width, self.cell_height)
    }

    pub fn overscan(&self) -> Overscan {
        Overscan(self.over_scan)
    }
}

/// Options for a hosted grid: the grid config plus the host's scroll throttle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostOptions {
    #[serde(flatten)]
    pub grid: GridConfig,
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: f64,
}

impl HostOptions {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}
