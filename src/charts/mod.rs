//! Chart renderers.
//!
//! Each renderer is stateless and turns a [`Dataset`] plus a [`Geometry`] into
//! a [`DrawList`] in a fixed order: clear, grid/axes, data marks, labels,
//! legend. Renderers trust their input; [`render_chart`] is the validating
//! boundary.

mod bar;
mod pie;
mod radar;

pub use bar::BarChart;
pub use pie::PieChart;
pub use radar::RadarChart;

use crate::config::{ChartConfig, ChartKind};
use crate::error::Result;
use crate::layout::legend::{LegendItem, LegendLayout, LEGEND_FONT};
use crate::render::backend::{DrawSurface, TextMeasure};
use crate::render::colors::palette;
use crate::render::commands::{DrawList, FillStyle, Rect, TextAlign, TextBaseline, TextStyle};
use crate::types::{Dataset, Geometry};
use crate::validate::validate_dataset;

/// Vertical center of the first legend row
pub const LEGEND_TOP: f64 = 12.0;

/// Common contract of the three chart kinds
pub trait ChartRenderer {
    /// Which chart kind this renderer draws
    fn kind(&self) -> ChartKind;

    /// Margin reserved around the plot area
    fn padding(&self) -> f64;

    /// Build the draw list for one full repaint
    fn draw(&self, dataset: &Dataset, geometry: &Geometry, metrics: &dyn TextMeasure) -> DrawList;

    /// Geometry for a canvas of the given size
    fn geometry(&self, width: f64, height: f64) -> Geometry {
        Geometry::new(width, height, self.padding())
    }

    /// Run one draw pass directly onto a surface
    fn render(&self, dataset: &Dataset, surface: &mut dyn DrawSurface) {
        let geometry = self.geometry(surface.width(), surface.height());
        let list = self.draw(dataset, &geometry, surface.metrics());
        tracing::trace!(kind = ?self.kind(), commands = list.len(), "replaying draw list");
        list.replay(surface);
    }
}

/// Renderer for a configuration
fn renderer_for(config: &ChartConfig) -> Box<dyn ChartRenderer> {
    match config.kind {
        ChartKind::Bar => Box::new(BarChart::default()),
        ChartKind::Pie => Box::new(PieChart::default().with_cutout(config.cutout)),
        ChartKind::Radar => Box::new(RadarChart::default()),
    }
}

/// Validate the config and dataset, then build the draw list headlessly
/// at the configured size.
pub fn draw_chart(
    config: &ChartConfig,
    dataset: &Dataset,
    metrics: &dyn TextMeasure,
) -> Result<DrawList> {
    config.validate()?;
    validate_dataset(dataset)?;
    let renderer = renderer_for(config);
    let (width, height) = config.size();
    let geometry = renderer.geometry(f64::from(width), f64::from(height));
    Ok(renderer.draw(dataset, &geometry, metrics))
}

/// Validate the config and dataset, then repaint `surface`.
///
/// The surface's own size wins over the configured size.
pub fn render_chart(
    config: &ChartConfig,
    dataset: &Dataset,
    surface: &mut dyn DrawSurface,
) -> Result<()> {
    config.validate()?;
    validate_dataset(dataset)?;
    renderer_for(config).render(dataset, surface);
    Ok(())
}

/// Full-canvas clear that starts every draw list
pub(crate) fn clear_all(list: &mut DrawList, geometry: &Geometry) {
    list.clear(Rect::new(0.0, 0.0, geometry.width, geometry.height));
}

/// Legend layout with one item per series, colored with the series' primary
/// color. Computed before the plot so wrapped rows can be reserved.
pub(crate) fn series_legend(
    dataset: &Dataset,
    geometry: &Geometry,
    metrics: &dyn TextMeasure,
) -> LegendLayout {
    let items: Vec<LegendItem> = dataset
        .series
        .iter()
        .map(|s| LegendItem::new(s.name.as_str(), s.primary_color()))
        .collect();
    LegendLayout::compute(&items, metrics, geometry, LEGEND_TOP)
}

/// Geometry whose plot starts below every wrapped legend row
pub(crate) fn below_legend(geometry: &Geometry, legend: &LegendLayout) -> Geometry {
    let inset = legend.overflow_height();
    if inset > 0.0 {
        tracing::debug!(rows = legend.rows, inset, "legend wraps, plot moves down");
    }
    geometry.with_top_inset(geometry.top_inset + inset)
}

pub(crate) fn draw_legend(list: &mut DrawList, legend: LegendLayout) {
    let text_style = TextStyle::new(LEGEND_FONT, palette::LEGEND_TEXT)
        .aligned(TextAlign::Left, TextBaseline::Middle);
    for entry in legend.entries {
        list.fill_rect(entry.swatch, FillStyle::solid(entry.color));
        list.text(entry.label, entry.text_anchor, text_style.clone());
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::render::backend::ApproxTextMetrics;
    use crate::render::commands::DrawCommand;
    use crate::render::recording::RecordingSurface;
    use crate::types::Series;

    fn dataset() -> Dataset {
        Dataset::new(
            ["A", "B", "C"],
            vec![
                Series::new("S1", vec![10.0, 20.0, 30.0]).with_color("#4472C4"),
                Series::new("S2", vec![30.0, 20.0, 10.0]).with_color("#ED7D31"),
            ],
        )
    }

    #[test]
    fn test_every_kind_starts_with_full_clear() {
        for kind in [ChartKind::Bar, ChartKind::Pie, ChartKind::Radar] {
            let config = ChartConfig::for_kind(kind);
            let list = draw_chart(&config, &dataset(), &ApproxTextMetrics).unwrap();
            let (w, h) = config.size();
            assert_eq!(
                list.commands()[0],
                DrawCommand::Clear {
                    rect: Rect::new(0.0, 0.0, f64::from(w), f64::from(h))
                },
                "{kind:?} must start with a full clear"
            );
        }
    }

    #[test]
    fn test_render_chart_rejects_shape_mismatch() {
        let mut bad = dataset();
        bad.series[1].values.pop();
        let mut surface = RecordingSurface::new(300.0, 200.0);
        let result = render_chart(&ChartConfig::for_kind(ChartKind::Bar), &bad, &mut surface);
        assert!(matches!(result, Err(ChartError::ShapeMismatch { .. })));
        assert!(surface.is_empty(), "nothing is drawn when validation fails");
    }

    #[test]
    fn test_render_chart_rejects_nan() {
        let mut bad = dataset();
        bad.series[0].values[2] = f64::NAN;
        let mut surface = RecordingSurface::new(300.0, 300.0);
        let result = render_chart(&ChartConfig::for_kind(ChartKind::Radar), &bad, &mut surface);
        assert!(matches!(result, Err(ChartError::NonFiniteValue { index: 2, .. })));
    }

    #[test]
    fn test_render_matches_draw_list() {
        let config = ChartConfig::for_kind(ChartKind::Radar);
        let mut surface = RecordingSurface::new(300.0, 300.0);
        render_chart(&config, &dataset(), &mut surface).unwrap();
        let list = draw_chart(&config, &dataset(), &ApproxTextMetrics).unwrap();
        assert_eq!(surface.commands(), list.commands());
    }

    #[test]
    fn test_redraw_is_a_full_repaint() {
        let config = ChartConfig::for_kind(ChartKind::Bar);
        let mut surface = RecordingSurface::new(300.0, 200.0);
        render_chart(&config, &dataset(), &mut surface).unwrap();
        let first = surface.command_count();
        render_chart(&config, &dataset(), &mut surface).unwrap();
        assert_eq!(surface.command_count(), first);
    }
}
