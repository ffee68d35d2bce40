//! Browser smoke tests for the Canvas 2D surface.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use skillchart::render::CanvasSurface;
use skillchart::{render_chart, render_chart_json, ChartConfig, ChartKind, Dataset, Series};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn renders_radar_onto_canvas() {
    let canvas = canvas(300, 300);
    let mut surface = CanvasSurface::from_canvas(&canvas).unwrap();
    let dataset = Dataset::new(
        ["Rust", "SQL", "Go"],
        vec![Series::new("Dev", vec![80.0, 60.0, 40.0]).with_color("#4472C4")],
    );
    render_chart(&ChartConfig::for_kind(ChartKind::Radar), &dataset, &mut surface).unwrap();
}

#[wasm_bindgen_test]
fn json_entry_point_rejects_bad_shape() {
    let canvas = canvas(300, 200);
    let result = render_chart_json(
        &canvas,
        r#"{"kind":"bar"}"#,
        r#"{"labels":["A","B"],"series":[{"name":"S1","values":[1]}]}"#,
    );
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn json_entry_point_draws_donut() {
    let canvas = canvas(300, 300);
    render_chart_json(
        &canvas,
        r#"{"kind":"pie","cutout":0.5}"#,
        r##"{"labels":["A","B"],"datasets":[{"name":"S1","values":[3,1],"color":["#4472C4","#ED7D31"]}]}"##,
    )
    .unwrap();
}
