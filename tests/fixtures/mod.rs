//! Test fixtures for building chart datasets in memory.
//!
//! # Example
//!
//! ```rust
//! use fixtures::DatasetBuilder;
//!
//! let dataset = DatasetBuilder::new(["A", "B"])
//!     .series("S1", [50.0, 100.0], "#4472C4")
//!     .build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use skillchart::render::{DrawCommand, Rect, RecordingSurface};
use skillchart::{render_chart, ChartConfig, ChartKind, Dataset, Series};

// ============================================================================
// Dataset Builder
// ============================================================================

/// Fluent builder for [`Dataset`]
pub struct DatasetBuilder {
    labels: Vec<String>,
    series: Vec<Series>,
}

impl DatasetBuilder {
    pub fn new<const N: usize>(labels: [&str; N]) -> Self {
        Self {
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
            series: Vec::new(),
        }
    }

    /// Add a series with a single color
    pub fn series<const N: usize>(mut self, name: &str, values: [f64; N], color: &str) -> Self {
        self.series
            .push(Series::new(name, values.to_vec()).with_color(color));
        self
    }

    /// Add a series with one color per value
    pub fn series_per_point<const N: usize, const M: usize>(
        mut self,
        name: &str,
        values: [f64; N],
        colors: [&str; M],
    ) -> Self {
        self.series
            .push(Series::new(name, values.to_vec()).with_point_colors(colors));
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.labels, self.series)
    }
}

// ============================================================================
// Rendering helpers
// ============================================================================

/// Render `dataset` onto a fresh recording surface of the default size
pub fn render(kind: ChartKind, dataset: &Dataset) -> RecordingSurface {
    render_with(ChartConfig::for_kind(kind), dataset)
}

/// Render with an explicit config onto a surface of the configured size
pub fn render_with(config: ChartConfig, dataset: &Dataset) -> RecordingSurface {
    let (w, h) = config.size();
    let mut surface = RecordingSurface::new(f64::from(w), f64::from(h));
    render_chart(&config, dataset, &mut surface).expect("render should succeed");
    surface
}

/// Rects larger than a legend swatch, i.e. the bars themselves
pub fn bar_rects(surface: &RecordingSurface) -> Vec<Rect> {
    surface
        .filled_rects()
        .into_iter()
        .map(|(rect, _)| rect)
        .filter(|rect| rect.width > 12.0 || rect.height > 12.0)
        .collect()
}

/// Index of the first command matching `pred`
pub fn first_index(
    surface: &RecordingSurface,
    pred: impl Fn(&DrawCommand) -> bool,
) -> Option<usize> {
    surface.commands().iter().position(pred)
}
