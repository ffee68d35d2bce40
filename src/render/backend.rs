//! Drawing surface traits for pluggable rendering targets.
//!
//! Chart renderers never touch a surface directly while computing a layout;
//! they emit a [`DrawList`](super::commands::DrawList) which is then replayed
//! onto anything implementing [`DrawSurface`]: the browser Canvas 2D context,
//! or the in-memory [`RecordingSurface`](super::recording::RecordingSurface).

use super::commands::{FillStyle, Font, Point, Rect, Sector, StrokeStyle, TextStyle};

/// Average glyph advance as a fraction of the font size
const APPROX_CHAR_WIDTH: f64 = 0.6;

/// Text measurement, needed for legend packing
pub trait TextMeasure {
    /// Width in pixels of `text` rendered with `font`
    fn measure_text(&self, text: &str, font: &Font) -> f64;
}

/// Primitive 2D drawing operations.
///
/// Every call carries its full style; implementations must not rely on state
/// left behind by a previous call.
pub trait DrawSurface: TextMeasure {
    /// This surface as a text measurer
    fn metrics(&self) -> &dyn TextMeasure;

    /// Surface width in pixels
    fn width(&self) -> f64;

    /// Surface height in pixels
    fn height(&self) -> f64;

    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle);

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle);

    /// Stroke a polyline, closing it back to the first point when `closed`
    fn stroke_path(&mut self, points: &[Point], closed: bool, style: &StrokeStyle);

    /// Fill the closed polygon through `points`
    fn fill_path(&mut self, points: &[Point], style: &FillStyle);

    /// Fill a pie or donut slice, optionally outlining it
    fn fill_sector(&mut self, sector: &Sector, style: &FillStyle, stroke: Option<&StrokeStyle>);

    fn fill_circle(&mut self, center: Point, radius: f64, style: &FillStyle);

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// Deterministic text width estimate for headless rendering.
///
/// Every character advances `0.6 × font size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMetrics;

impl TextMeasure for ApproxTextMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        let chars = text.chars().count() as f64;
        let weight = if font.bold { 1.1 } else { 1.0 };
        chars * font.size * APPROX_CHAR_WIDTH * weight
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_width_scales_with_length_and_size() {
        let metrics = ApproxTextMetrics;
        assert_eq!(metrics.measure_text("", &Font::regular(10.0)), 0.0);
        assert_eq!(metrics.measure_text("abcde", &Font::regular(10.0)), 30.0);
        assert_eq!(metrics.measure_text("ab", &Font::regular(20.0)), 24.0);
        assert!(
            metrics.measure_text("abc", &Font::bold(10.0))
                > metrics.measure_text("abc", &Font::regular(10.0))
        );
    }

    #[test]
    fn test_approx_width_counts_chars_not_bytes() {
        let metrics = ApproxTextMetrics;
        assert_eq!(
            metrics.measure_text("été", &Font::regular(10.0)),
            metrics.measure_text("ete", &Font::regular(10.0))
        );
    }
}
