//! Radar (spider) chart on a fixed 0-100 scale.

use crate::config::ChartKind;
use crate::layout::coords::{polar_angle, PolarLayout};
use crate::layout::labels::place_axis_label;
use crate::render::backend::TextMeasure;
use crate::render::colors::palette;
use crate::render::commands::{DrawList, FillStyle, Font, Point, StrokeStyle, TextStyle};
use crate::types::{Dataset, Geometry, Series};

use super::{below_legend, clear_all, draw_legend, series_legend, ChartRenderer};

/// Margin reserved for axis labels and the legend
pub const RADAR_PADDING: f64 = 40.0;
/// Concentric background rings
pub const RING_COUNT: u32 = 5;
/// Value mapped onto the outer ring
pub const SCALE_MAX: f64 = 100.0;
/// Distance between an axis endpoint and its label anchor
pub const LABEL_OFFSET: f64 = 12.0;
const FILL_ALPHA: f64 = 0.2;
const DEFAULT_BORDER_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct RadarChart {
    pub padding: f64,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            padding: RADAR_PADDING,
        }
    }
}

impl RadarChart {
    fn draw_web(list: &mut DrawList, layout: &PolarLayout, axes: usize) {
        let ring_style = StrokeStyle::new(palette::GRID_LINE, 1.0);
        for level in 1..=RING_COUNT {
            let radius = f64::from(level) / f64::from(RING_COUNT);
            list.stroke_polygon(layout.ring(axes, radius), ring_style.clone());
        }

        let spoke_style = StrokeStyle::new(palette::SPOKE, 1.0);
        for i in 0..axes {
            list.line(layout.center, layout.point(i, axes, 1.0), spoke_style.clone());
        }
    }

    /// Vertices of one series, `value / 100` of the way out along each axis
    pub fn series_points(layout: &PolarLayout, series: &Series, axes: usize) -> Vec<Point> {
        series
            .values
            .iter()
            .take(axes)
            .enumerate()
            .map(|(i, value)| layout.point(i, axes, value / SCALE_MAX))
            .collect()
    }

    fn draw_series(list: &mut DrawList, layout: &PolarLayout, series: &Series, axes: usize) {
        let points = Self::series_points(layout, series, axes);
        let color = series.primary_color();

        let fill = match &series.background_color {
            Some(background) => FillStyle::solid(background.as_str()),
            None => FillStyle::translucent(color, FILL_ALPHA),
        };
        let stroke = StrokeStyle::new(
            series.border_color.as_deref().unwrap_or(color),
            series.border_width.unwrap_or(DEFAULT_BORDER_WIDTH),
        );

        list.fill_polygon(points.clone(), fill);
        list.stroke_polygon(points.clone(), stroke);

        let marker = FillStyle::solid(color);
        for point in points {
            list.fill_circle(point, MARKER_RADIUS, marker.clone());
        }
    }
}

impl ChartRenderer for RadarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn padding(&self) -> f64 {
        self.padding
    }

    fn draw(&self, dataset: &Dataset, geometry: &Geometry, metrics: &dyn TextMeasure) -> DrawList {
        let mut list = DrawList::new();
        clear_all(&mut list, geometry);

        let axes = dataset.category_count();
        if axes == 0 {
            tracing::debug!("radar chart has no axes, nothing to draw");
            return list;
        }
        if axes < 3 {
            tracing::debug!(axes, "radar chart with fewer than 3 axes draws a degenerate web");
        }

        let legend = series_legend(dataset, geometry, metrics);
        let geometry = &below_legend(geometry, &legend);

        let layout = PolarLayout::fit(geometry);
        Self::draw_web(&mut list, &layout, axes);

        for series in &dataset.series {
            Self::draw_series(&mut list, &layout, series, axes);
        }

        for (i, label) in dataset.labels.iter().enumerate() {
            let placement = place_axis_label(
                polar_angle(i, axes),
                layout.center,
                layout.max_radius,
                LABEL_OFFSET,
                geometry,
            );
            let style = TextStyle::new(Font::regular(11.0), palette::AXIS_LABEL)
                .aligned(placement.align, placement.baseline);
            list.text(label.as_str(), placement.position, style);
        }

        draw_legend(&mut list, legend);

        tracing::debug!(
            axes,
            series = dataset.series.len(),
            commands = list.len(),
            "radar chart draw pass"
        );
        list
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;
    use crate::render::backend::ApproxTextMetrics;
    use crate::render::commands::{DrawCommand, TextAlign, TextBaseline};

    const EPS: f64 = 1e-9;

    fn geometry() -> Geometry {
        RadarChart::default().geometry(300.0, 300.0)
    }

    fn layout() -> PolarLayout {
        PolarLayout::fit(&geometry())
    }

    fn skills(values: Vec<f64>) -> Dataset {
        Dataset::new(
            ["Rust", "SQL", "Go", "Ops", "UX"],
            vec![Series::new("Dev", values).with_color("#4472C4")],
        )
    }

    #[test]
    fn test_full_score_lands_on_outer_ring() {
        let dataset = skills(vec![100.0; 5]);
        let layout = layout();
        let points = RadarChart::series_points(&layout, &dataset.series[0], 5);
        let outer = layout.ring(5, 1.0);
        for (p, q) in points.iter().zip(&outer) {
            assert!((p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS);
            assert!((p.distance(layout.center) - layout.max_radius).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_score_collapses_to_center() {
        let dataset = skills(vec![0.0; 5]);
        let layout = layout();
        for p in RadarChart::series_points(&layout, &dataset.series[0], 5) {
            assert!(p.distance(layout.center) < EPS);
        }
    }

    #[test]
    fn test_draws_five_rings_and_a_spoke_per_axis() {
        let chart = RadarChart::default();
        let list = chart.draw(&skills(vec![50.0; 5]), &geometry(), &ApproxTextMetrics);
        let rings = list
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::StrokePath { closed: true, style, .. } if style.color == palette::GRID_LINE)
            })
            .count();
        let spokes = list
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::StrokePath { closed: false, style, .. } if style.color == palette::SPOKE)
            })
            .count();
        assert_eq!(rings, 5);
        assert_eq!(spokes, 5);
    }

    #[test]
    fn test_fill_defaults_to_translucent_series_color() {
        let chart = RadarChart::default();
        let list = chart.draw(&skills(vec![50.0; 5]), &geometry(), &ApproxTextMetrics);
        let fill = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillPath { style, .. } => Some(style.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(fill.color, "#4472C4");
        assert_eq!(fill.alpha, 0.2);
    }

    #[test]
    fn test_explicit_background_and_border_win() {
        let mut dataset = skills(vec![50.0; 5]);
        dataset.series[0].background_color = Some("rgba(0, 0, 0, 0.1)".to_string());
        dataset.series[0].border_color = Some("#FF0000".to_string());
        dataset.series[0].border_width = Some(3.0);
        let chart = RadarChart::default();
        let list = chart.draw(&dataset, &geometry(), &ApproxTextMetrics);

        let fill = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillPath { style, .. } => Some(style.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(fill.color, "rgba(0, 0, 0, 0.1)");
        assert_eq!(fill.alpha, 1.0);

        let border = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokePath { style, .. } if style.color == "#FF0000" => {
                    Some(style.width)
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(border, 3.0);
    }

    #[test]
    fn test_marker_per_vertex() {
        let chart = RadarChart::default();
        let list = chart.draw(&skills(vec![20.0, 40.0, 60.0, 80.0, 100.0]), &geometry(), &ApproxTextMetrics);
        let markers = list
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { radius, .. } if *radius == 3.0))
            .count();
        assert_eq!(markers, 5);
    }

    #[test]
    fn test_axis_labels_are_aligned_by_band() {
        let dataset = Dataset::new(
            ["N", "E", "S", "W"],
            vec![Series::new("Dev", vec![10.0, 20.0, 30.0, 40.0])],
        );
        let chart = RadarChart::default();
        let list = chart.draw(&dataset, &geometry(), &ApproxTextMetrics);
        let aligned: Vec<(String, TextAlign, TextBaseline)> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, style, .. } if style.color == palette::AXIS_LABEL => {
                    Some((text.clone(), style.align, style.baseline))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            aligned,
            vec![
                ("N".to_string(), TextAlign::Center, TextBaseline::Bottom),
                ("E".to_string(), TextAlign::Left, TextBaseline::Middle),
                ("S".to_string(), TextAlign::Center, TextBaseline::Top),
                ("W".to_string(), TextAlign::Right, TextBaseline::Middle),
            ]
        );
    }

    #[test]
    fn test_no_axes_only_clears() {
        let chart = RadarChart::default();
        let dataset = Dataset::new(Vec::<String>::new(), vec![Series::new("Dev", vec![])]);
        assert_eq!(chart.draw(&dataset, &geometry(), &ApproxTextMetrics).len(), 1);
    }
}
