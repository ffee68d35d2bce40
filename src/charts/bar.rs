//! Grouped bar chart.

use crate::config::ChartKind;
use crate::layout::coords::{cartesian_y, CartesianGrid};
use crate::render::backend::TextMeasure;
use crate::render::colors::palette;
use crate::render::commands::{
    DrawList, FillStyle, Font, Point, Rect, StrokeStyle, TextAlign, TextBaseline, TextStyle,
};
use crate::types::{Dataset, Geometry};

use super::{below_legend, clear_all, draw_legend, series_legend, ChartRenderer};

/// Margin reserved for axis, value, and legend labels
pub const BAR_PADDING: f64 = 40.0;
/// Horizontal gridlines above the baseline
const GRID_LINES: u32 = 5;
/// Gap between a bar top and its value label
const VALUE_LABEL_GAP: f64 = 4.0;
/// Gap between the baseline and category labels
const CATEGORY_LABEL_GAP: f64 = 6.0;

/// Grouped vertical bar chart.
///
/// The value scale comes from the first series only; later series share
/// that scale and may run past the top of the plot area.
#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    pub padding: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            padding: BAR_PADDING,
        }
    }
}

impl BarChart {
    /// Maximum of the first series, the scale every bar is drawn against
    pub fn scale_max(dataset: &Dataset) -> f64 {
        dataset
            .series
            .first()
            .map(|s| s.values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(0.0)
    }

    fn draw_grid(list: &mut DrawList, geometry: &Geometry) {
        let left = geometry.padding;
        let right = geometry.width - geometry.padding;
        let top = geometry.plot_top();
        let baseline = geometry.baseline_y();
        let grid = StrokeStyle::new(palette::GRID_LINE, 0.5);

        for i in 0..GRID_LINES {
            let y = top + geometry.plot_height() * f64::from(i) / f64::from(GRID_LINES);
            list.line(Point::new(left, y), Point::new(right, y), grid.clone());
        }

        let axis = StrokeStyle::new(palette::AXIS, 1.0);
        list.line(Point::new(left, top), Point::new(left, baseline), axis.clone());
        list.line(Point::new(left, baseline), Point::new(right, baseline), axis);
    }
}

impl ChartRenderer for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn padding(&self) -> f64 {
        self.padding
    }

    fn draw(&self, dataset: &Dataset, geometry: &Geometry, metrics: &dyn TextMeasure) -> DrawList {
        let mut list = DrawList::new();
        clear_all(&mut list, geometry);

        let categories = dataset.category_count();
        if categories == 0 {
            tracing::debug!("bar chart has no categories, nothing to draw");
            return list;
        }

        let legend = series_legend(dataset, geometry, metrics);
        let geometry = &below_legend(geometry, &legend);

        Self::draw_grid(&mut list, geometry);

        let grid = CartesianGrid::new(*geometry);
        let max = Self::scale_max(dataset);
        if max <= 0.0 {
            tracing::debug!(max, "bar chart scale is not positive, bars collapse to baseline");
        }
        let plot_height = geometry.plot_height();
        let baseline = geometry.baseline_y();
        let series_count = dataset.series.len();
        let bar_width = grid.bar_width(categories, series_count);

        let value_style = TextStyle::new(Font::regular(10.0), palette::VALUE_LABEL)
            .aligned(TextAlign::Center, TextBaseline::Bottom);
        let mut value_labels = Vec::new();

        for (series_idx, series) in dataset.series.iter().enumerate() {
            for (idx, &value) in series.values.iter().enumerate().take(categories) {
                let center = grid.x(idx, categories, series_idx, series_count);
                let top = geometry.plot_top() + cartesian_y(value, max, plot_height);
                list.fill_rect(
                    Rect::new(center - bar_width / 2.0, top, bar_width, baseline - top),
                    FillStyle::solid(series.color_at(idx)),
                );
                let label_y = top.min(baseline) - VALUE_LABEL_GAP;
                value_labels.push((value.to_string(), Point::new(center, label_y)));
            }
        }

        for (text, position) in value_labels {
            list.text(text, position, value_style.clone());
        }

        let category_style = TextStyle::new(Font::regular(10.0), palette::AXIS_LABEL)
            .aligned(TextAlign::Center, TextBaseline::Top);
        for (idx, label) in dataset.labels.iter().enumerate() {
            let x = grid.category_center(idx, categories);
            list.text(
                label.as_str(),
                Point::new(x, baseline + CATEGORY_LABEL_GAP),
                category_style.clone(),
            );
        }

        draw_legend(&mut list, legend);

        tracing::debug!(
            categories,
            series = series_count,
            commands = list.len(),
            "bar chart draw pass"
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
    use crate::render::commands::DrawCommand;
    use crate::types::{Series, FALLBACK_COLOR};

    fn bars(list: &DrawList) -> Vec<(Rect, String)> {
        list.iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, style } if rect.width > 12.0 || rect.height > 12.0 => {
                    Some((*rect, style.color.clone()))
                }
                _ => None,
            })
            .collect()
    }

    fn draw(dataset: &Dataset) -> DrawList {
        let chart = BarChart::default();
        chart.draw(dataset, &chart.geometry(300.0, 200.0), &ApproxTextMetrics)
    }

    #[test]
    fn test_scale_uses_first_series_only() {
        let dataset = Dataset::new(
            ["A"],
            vec![Series::new("S1", vec![10.0]), Series::new("S2", vec![50.0])],
        );
        assert_eq!(BarChart::scale_max(&dataset), 10.0);
    }

    #[test]
    fn test_later_series_can_exceed_plot() {
        let dataset = Dataset::new(
            ["A"],
            vec![Series::new("S1", vec![10.0]), Series::new("S2", vec![20.0])],
        );
        let rects = bars(&draw(&dataset));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].0.height, 120.0);
        assert_eq!(rects[1].0.height, 240.0);
        assert!(rects[1].0.y < BAR_PADDING);
    }

    #[test]
    fn test_zero_max_draws_flat_bars() {
        let dataset = Dataset::new(["A", "B"], vec![Series::new("S1", vec![0.0, 0.0])]);
        for (rect, _) in bars(&draw(&dataset)) {
            assert_eq!(rect.height, 0.0);
        }
    }

    #[test]
    fn test_negative_value_hangs_below_baseline() {
        let dataset = Dataset::new(["A", "B"], vec![Series::new("S1", vec![10.0, -5.0])]);
        let list = draw(&dataset);
        let rects = bars(&list);
        assert_eq!(rects[1].0.y, 160.0);
        assert_eq!(rects[1].0.height, 60.0);
    }

    #[test]
    fn test_no_categories_only_clears() {
        let list = draw(&Dataset::new(Vec::<String>::new(), vec![Series::new("S1", vec![])]));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_short_color_array_uses_fallback() {
        let dataset = Dataset::new(
            ["A", "B", "C"],
            vec![
                Series::new("S1", vec![1.0, 2.0, 3.0]).with_point_colors(["#111111", "#222222"]),
                Series::new("S2", vec![3.0, 2.0, 1.0]).with_color("#333333"),
            ],
        );
        let colors: Vec<String> = bars(&draw(&dataset)).into_iter().map(|(_, c)| c).collect();
        assert_eq!(
            colors,
            vec!["#111111", "#222222", FALLBACK_COLOR, "#333333", "#333333", "#333333"]
        );
    }

    #[test]
    fn test_labels_follow_marks() {
        let dataset = Dataset::new(["A", "B"], vec![Series::new("S1", vec![50.0, 100.0])]);
        let list = draw(&dataset);
        let first_text = list
            .iter()
            .position(|c| matches!(c, DrawCommand::FillText { .. }))
            .unwrap();
        let last_bar = list
            .iter()
            .rposition(|c| matches!(c, DrawCommand::FillRect { rect, .. } if rect.width > 12.0))
            .unwrap();
        assert!(last_bar < first_text);
        assert_eq!(list.texts(), vec!["50", "100", "A", "B", "S1"]);
    }
}
