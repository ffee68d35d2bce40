//! Structured error types for skillchart.
//!
//! Rendering itself never fails: degenerate geometry is handled locally by the
//! renderers. Errors only come from the boundary (validation, config, I/O).

/// All errors that can occur at the chart rendering boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// A series does not have one value per label.
    #[error("Shape mismatch: series '{series}' has {actual} values, expected {expected}")]
    ShapeMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// A series contains NaN or an infinite value.
    #[error("Non-finite value in series '{series}' at index {index}")]
    NonFiniteValue { series: String, index: usize },

    /// Chart configuration is out of range.
    #[error("Invalid chart config: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Drawing surface error.
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<ChartError> for wasm_bindgen::JsValue {
    fn from(e: ChartError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
