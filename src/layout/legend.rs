//! Legend row packing.
//!
//! Items are laid out left to right as (swatch, gap, label) runs. Runs that
//! would overflow the available width wrap onto further rows; every row is
//! centered in the span between the side paddings and never starts left of
//! the padding.

use crate::render::backend::TextMeasure;
use crate::render::commands::{Font, Point, Rect};
use crate::types::Geometry;

/// Swatch edge length in pixels
pub const SWATCH_SIZE: f64 = 12.0;
/// Gap between swatch and label
pub const SWATCH_GAP: f64 = 4.0;
/// Space between consecutive items on a row
pub const ITEM_SPACING: f64 = 12.0;
/// Vertical distance between row centers
pub const ROW_HEIGHT: f64 = 16.0;

/// Font used for legend labels
pub const LEGEND_FONT: Font = Font::regular(11.0);

/// One (color, label) pair to lay out
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
}

impl LegendItem {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A positioned legend item
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub swatch: Rect,
    /// Left-aligned, vertically centered text anchor
    pub text_anchor: Point,
    pub row: usize,
}

/// Computed legend placement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendLayout {
    pub entries: Vec<LegendEntry>,
    pub rows: usize,
}

impl LegendLayout {
    /// Pack `items` into centered rows whose first row is centered on `top`
    pub fn compute(
        items: &[LegendItem],
        metrics: &dyn TextMeasure,
        geometry: &Geometry,
        top: f64,
    ) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let available = geometry.plot_width();
        let widths: Vec<f64> = items
            .iter()
            .map(|item| SWATCH_SIZE + SWATCH_GAP + metrics.measure_text(&item.label, &LEGEND_FONT))
            .collect();

        // Greedy row packing; an item too wide for any row gets one to itself
        let mut rows: Vec<(usize, usize, f64)> = Vec::new();
        let mut start = 0;
        let mut run = 0.0;
        for (i, &w) in widths.iter().enumerate() {
            let next = if i == start { w } else { run + ITEM_SPACING + w };
            if i > start && next > available {
                rows.push((start, i, run));
                start = i;
                run = w;
            } else {
                run = next;
            }
        }
        rows.push((start, widths.len(), run));

        let mut entries = Vec::with_capacity(items.len());
        for (row, &(from, to, run_width)) in rows.iter().enumerate() {
            let row_y = top + row_offset(row);
            let mut x = row_start_x(geometry, run_width);
            for (item, &w) in items.iter().zip(&widths).skip(from).take(to - from) {
                entries.push(LegendEntry {
                    label: item.label.clone(),
                    color: item.color.clone(),
                    swatch: Rect::new(x, row_y - SWATCH_SIZE / 2.0, SWATCH_SIZE, SWATCH_SIZE),
                    text_anchor: Point::new(x + SWATCH_SIZE + SWATCH_GAP, row_y),
                    row,
                });
                x += w + ITEM_SPACING;
            }
        }

        Self {
            entries,
            rows: rows.len(),
        }
    }

    /// Total height taken by all rows
    pub fn height(&self) -> f64 {
        row_offset(self.rows)
    }

    /// Height taken by rows after the first.
    ///
    /// The first row fits inside the chart padding; every wrapped row pushes
    /// the plot down by one row height.
    pub fn overflow_height(&self) -> f64 {
        row_offset(self.rows.saturating_sub(1))
    }
}

/// Starting x that centers a run of `run_width` between the paddings
pub fn row_start_x(geometry: &Geometry, run_width: f64) -> f64 {
    let centered = (geometry.width - run_width) / 2.0;
    centered.max(geometry.padding)
}

#[allow(clippy::cast_precision_loss)]
fn row_offset(row: usize) -> f64 {
    row as f64 * ROW_HEIGHT
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::render::backend::ApproxTextMetrics;

    fn items(labels: &[&str]) -> Vec<LegendItem> {
        labels
            .iter()
            .map(|l| LegendItem::new(*l, "#4472C4"))
            .collect()
    }

    #[test]
    fn test_empty_legend_has_no_rows() {
        let layout =
            LegendLayout::compute(&[], &ApproxTextMetrics, &Geometry::new(300.0, 200.0, 40.0), 10.0);
        assert_eq!(layout.rows, 0);
        assert!(layout.entries.is_empty());
        assert_eq!(layout.overflow_height(), 0.0);
    }

    #[test]
    fn test_single_row_is_centered() {
        let geometry = Geometry::new(300.0, 200.0, 40.0);
        // "Alpha" at 11px: 5 * 6.6 = 33px text, 49px item
        let layout = LegendLayout::compute(&items(&["Alpha"]), &ApproxTextMetrics, &geometry, 10.0);
        assert_eq!(layout.rows, 1);
        let entry = &layout.entries[0];
        assert!((entry.swatch.x - (300.0 - 49.0) / 2.0).abs() < 1e-9);
        assert_eq!(entry.swatch.y, 4.0);
        assert_eq!(entry.text_anchor.x, entry.swatch.x + 16.0);
        assert_eq!(layout.overflow_height(), 0.0);
    }

    #[test]
    fn test_items_advance_left_to_right() {
        let geometry = Geometry::new(400.0, 200.0, 20.0);
        let layout = LegendLayout::compute(&items(&["A", "B", "C"]), &ApproxTextMetrics, &geometry, 10.0);
        assert_eq!(layout.rows, 1);
        let xs: Vec<f64> = layout.entries.iter().map(|e| e.swatch.x).collect();
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
    }

    #[test]
    fn test_overflow_wraps_and_stays_inside_padding() {
        let geometry = Geometry::new(200.0, 200.0, 20.0);
        let labels = ["Problem solving", "Communication", "Code quality", "Testing"];
        let layout = LegendLayout::compute(&items(&labels), &ApproxTextMetrics, &geometry, 10.0);
        assert!(layout.rows > 1);
        assert_eq!(layout.entries.len(), labels.len());
        for entry in &layout.entries {
            assert!(entry.swatch.x >= geometry.padding);
        }
        assert_eq!(layout.height(), ROW_HEIGHT * layout.rows as f64);
        assert_eq!(layout.overflow_height(), layout.height() - ROW_HEIGHT);
    }

    #[test]
    fn test_oversized_item_starts_at_padding() {
        let geometry = Geometry::new(100.0, 100.0, 10.0);
        let layout = LegendLayout::compute(
            &items(&["An extremely long series name that cannot fit"]),
            &ApproxTextMetrics,
            &geometry,
            10.0,
        );
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.entries[0].swatch.x, 10.0);
    }
}
