//! Structured error types for virtual-grid.
//!
//! The windowing core is infallible; these errors only surface at the
//! configuration boundary, the CLI, and the browser host binding.

/// All errors that can occur while configuring or hosting a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The grid configuration violates its documented constraints.
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The host environment (document, element, listeners) is unusable.
    #[error("Host error: {0}")]
    Host(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
