//! skillchart - library-free chart rendering for the web
//!
//! Draws three chart kinds straight onto a Canvas 2D surface, with no
//! charting library underneath:
//! - Grouped bar charts with value and category labels
//! - Pie and donut charts with percentage labels
//! - Radar (spider) charts on a fixed 0-100 scale
//!
//! Every renderer is a pure function from a [`Dataset`] and a [`Geometry`] to
//! a [`DrawList`](render::DrawList), which is replayed onto any
//! [`DrawSurface`](render::DrawSurface). Headless callers use
//! [`RecordingSurface`](render::RecordingSurface).
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_chart_json } from 'skillchart';
//! await init();
//! render_chart_json(canvas, '{"kind":"radar"}', JSON.stringify(dataset));
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod validate;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use charts::{draw_chart, render_chart, BarChart, ChartRenderer, PieChart, RadarChart};
pub use config::{ChartConfig, ChartKind};
pub use error::{ChartError, Result};
pub use types::*;
pub use validate::validate_dataset;

use render::{ApproxTextMetrics, CanvasSurface};

/// Render a chart onto a canvas element
///
/// # Arguments
/// * `canvas` - Target canvas; its pixel size wins over the configured size
/// * `config_json` - A `ChartConfig` as JSON
/// * `dataset_json` - A `Dataset` as JSON
///
/// # Errors
/// Returns an error if either JSON document is malformed, the dataset shape
/// is inconsistent, or the canvas has no 2D context.
#[wasm_bindgen]
pub fn render_chart_json(
    canvas: &HtmlCanvasElement,
    config_json: &str,
    dataset_json: &str,
) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config: ChartConfig = serde_json::from_str(config_json).map_err(ChartError::from)?;
    let dataset: Dataset = serde_json::from_str(dataset_json).map_err(ChartError::from)?;
    let mut surface = CanvasSurface::from_canvas(canvas)?;
    render_chart(&config, &dataset, &mut surface)?;
    Ok(())
}

/// Compute the draw commands for a chart without touching any canvas
///
/// Text is measured with the headless estimate, so legend packing may differ
/// slightly from a real canvas.
///
/// # Errors
/// Returns an error if the inputs do not deserialize or fail validation.
#[wasm_bindgen]
pub fn draw_chart_js(config: JsValue, dataset: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config: ChartConfig = serde_wasm_bindgen::from_value(config)?;
    let dataset: Dataset = serde_wasm_bindgen::from_value(dataset)?;
    let list = draw_chart(&config, &dataset, &ApproxTextMetrics)?;

    serde_wasm_bindgen::to_value(&list)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
