//! Pie and donut chart.

use std::f64::consts::TAU;

use crate::config::ChartKind;
use crate::layout::coords::PolarLayout;
use crate::render::backend::TextMeasure;
use crate::render::colors::{contrast_text_color, palette};
use crate::render::commands::{
    DrawList, FillStyle, Font, Sector, StrokeStyle, TextAlign, TextBaseline, TextStyle,
};
use crate::types::{Dataset, Geometry};

use super::{clear_all, ChartRenderer};

/// Margin around the pie
pub const PIE_PADDING: f64 = 10.0;
/// Slices whose rounded percentage is at or below this get no label
pub const LABEL_THRESHOLD_PERCENT: f64 = 5.0;
/// Radial position of percentage labels, as a fraction of the radius
pub const LABEL_RADIUS_RATIO: f64 = 0.7;

/// A computed slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Index into the series values
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the total, rounded to the nearest integer percent
    pub percent: f64,
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Whether this slice is wide enough to carry a percentage label
    pub fn has_label(&self) -> bool {
        self.percent > LABEL_THRESHOLD_PERCENT
    }
}

/// Split `values` into consecutive slices starting at angle 0 (3 o'clock).
///
/// Non-positive values get no slice; a non-positive total yields none.
pub fn compute_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    let mut slices = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let end = start + (value / total) * TAU;
        slices.push(Slice {
            index,
            start_angle: start,
            end_angle: end,
            percent: (value / total * 100.0).round(),
        });
        start = end;
    }
    slices
}

/// Pie chart of the first series, one slice per value.
///
/// Non-positive values get no slice and are left out of the total.
/// A non-zero `cutout` turns it into a donut.
#[derive(Debug, Clone, Copy)]
pub struct PieChart {
    pub padding: f64,
    /// Hole radius as a fraction of the outer radius
    pub cutout: f64,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            padding: PIE_PADDING,
            cutout: 0.0,
        }
    }
}

impl PieChart {
    #[must_use]
    pub fn with_cutout(mut self, cutout: f64) -> Self {
        self.cutout = cutout.clamp(0.0, 1.0);
        self
    }

    fn label_radius(&self, radius: f64) -> f64 {
        if self.cutout > 0.0 {
            // Middle of the ring
            radius * (1.0 + self.cutout) / 2.0
        } else {
            radius * LABEL_RADIUS_RATIO
        }
    }
}

impl ChartRenderer for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn padding(&self) -> f64 {
        self.padding
    }

    fn draw(&self, dataset: &Dataset, geometry: &Geometry, _metrics: &dyn TextMeasure) -> DrawList {
        let mut list = DrawList::new();
        clear_all(&mut list, geometry);

        let Some(series) = dataset.series.first() else {
            tracing::debug!("pie chart has no series, nothing to draw");
            return list;
        };
        let slices = compute_slices(&series.values);
        if slices.is_empty() {
            tracing::debug!(series = %series.name, "pie total is not positive, nothing to draw");
            return list;
        }

        let layout = PolarLayout::fit(geometry);
        let inner_radius = layout.max_radius * self.cutout;
        let border = StrokeStyle::new(palette::WHITE, 1.0);

        for slice in &slices {
            let sector = Sector {
                center: layout.center,
                radius: layout.max_radius,
                inner_radius,
                start_angle: slice.start_angle,
                end_angle: slice.end_angle,
            };
            list.fill_sector(
                sector,
                FillStyle::solid(series.color_at(slice.index)),
                Some(border.clone()),
            );
        }

        let label_radius = self.label_radius(layout.max_radius);
        for slice in &slices {
            if !slice.has_label() {
                tracing::debug!(
                    index = slice.index,
                    percent = slice.percent,
                    "pie label suppressed on thin slice"
                );
                continue;
            }
            let style = TextStyle::new(
                Font::bold(12.0),
                contrast_text_color(series.color_at(slice.index)),
            )
            .aligned(TextAlign::Center, TextBaseline::Middle);
            list.text(
                format!("{}%", slice.percent),
                layout.at(slice.mid_angle(), label_radius),
                style,
            );
        }

        tracing::debug!(slices = slices.len(), commands = list.len(), "pie chart draw pass");
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
    use crate::types::Series;
    use std::f64::consts::FRAC_PI_2;

    fn draw(chart: PieChart, values: Vec<f64>) -> DrawList {
        let labels: Vec<String> = (0..values.len()).map(|i| format!("L{i}")).collect();
        let dataset = Dataset::new(
            labels,
            vec![Series::new("S1", values).with_point_colors(["#4472C4", "#ED7D31", "#FFC000", "#5B9BD5"])],
        );
        chart.draw(&dataset, &chart.geometry(300.0, 300.0), &ApproxTextMetrics)
    }

    #[test]
    fn test_equal_values_make_quarter_slices() {
        let slices = compute_slices(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(slices.len(), 4);
        for slice in &slices {
            assert!((slice.end_angle - slice.start_angle - FRAC_PI_2).abs() < 1e-12);
            assert_eq!(slice.percent, 25.0);
            assert!(slice.has_label());
        }
        assert_eq!(slices[0].start_angle, 0.0);
    }

    #[test]
    fn test_thin_slice_labels_are_suppressed() {
        let list = draw(PieChart::default(), vec![97.0, 1.0, 1.0, 1.0]);
        assert_eq!(list.texts(), vec!["97%"]);
    }

    #[test]
    fn test_five_percent_is_suppressed_six_is_not() {
        let slices = compute_slices(&[5.0, 6.0, 89.0]);
        assert!(!slices[0].has_label());
        assert!(slices[1].has_label());
    }

    #[test]
    fn test_zero_total_only_clears() {
        let list = draw(PieChart::default(), vec![0.0, 0.0]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_zero_value_gets_no_slice() {
        let slices = compute_slices(&[1.0, 0.0, 1.0]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[1].index, 2);
    }

    #[test]
    fn test_negative_value_is_left_out_of_total() {
        let slices = compute_slices(&[3.0, -5.0, 1.0]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[1].percent, 25.0);
        assert!((slices[1].end_angle - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_label_sits_at_seventy_percent_radius() {
        let list = draw(PieChart::default(), vec![1.0, 1.0, 1.0, 1.0]);
        let position = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillText { position, .. } => Some(*position),
                _ => None,
            })
            .unwrap();
        // 280px plot -> radius 140, first slice mid-angle is 45 degrees
        let expected = 140.0 * LABEL_RADIUS_RATIO;
        let distance = position.distance(crate::render::commands::Point::new(150.0, 150.0));
        assert!((distance - expected).abs() < 1e-9);
        assert!(position.x > 150.0 && position.y > 150.0);
    }

    #[test]
    fn test_donut_sectors_have_inner_radius() {
        let list = draw(PieChart::default().with_cutout(0.5), vec![1.0, 3.0]);
        let inner: Vec<f64> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillSector { sector, .. } => Some(sector.inner_radius),
                _ => None,
            })
            .collect();
        assert_eq!(inner, vec![70.0, 70.0]);
    }

    #[test]
    fn test_label_color_contrasts_with_slice() {
        let list = draw(PieChart::default(), vec![0.0, 0.0, 1.0]);
        let color = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillText { style, .. } => Some(style.color.clone()),
                _ => None,
            })
            .unwrap();
        // #FFC000 is light
        assert_eq!(color, palette::BLACK);
    }
}
