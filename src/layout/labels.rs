//! Axis label placement for polar charts.
//!
//! Placement is a fixed lookup: push the anchor outward along the axis ray,
//! then pick the text alignment from the quadrant band the ray falls in.
//! There is no collision search and no metrics-based nudging.

use crate::render::commands::{Point, TextAlign, TextBaseline};
use crate::types::Geometry;

/// Slack for comparing `|sin|` and `|cos|` on exact diagonals
const BAND_EPSILON: f64 = 1e-9;

/// Which side of the chart a label ray points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelBand {
    Top,
    Right,
    Bottom,
    Left,
}

impl LabelBand {
    /// Classify a ray angle (radians, clockwise from 3 o'clock, y down).
    ///
    /// Top and bottom bands cover angles strictly within ±45° of vertical;
    /// exact diagonals belong to the left/right bands.
    pub fn classify(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        if sin.abs() > cos.abs() + BAND_EPSILON {
            if sin < 0.0 {
                Self::Top
            } else {
                Self::Bottom
            }
        } else if cos < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Text alignment that keeps the label on the outside of the anchor
    pub const fn alignment(self) -> (TextAlign, TextBaseline) {
        match self {
            // Text sits above the point
            Self::Top => (TextAlign::Center, TextBaseline::Bottom),
            // Text hangs below the point
            Self::Bottom => (TextAlign::Center, TextBaseline::Top),
            Self::Left => (TextAlign::Right, TextBaseline::Middle),
            Self::Right => (TextAlign::Left, TextBaseline::Middle),
        }
    }
}

/// Final anchor and alignment for one label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub position: Point,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub band: LabelBand,
}

/// Place the label for an axis endpoint.
///
/// `angle` is the same angle used to place the axis endpoint at `radius`
/// from `center`; the anchor is pushed `offset` further out along that ray
/// and clamped into the canvas.
pub fn place_axis_label(
    angle: f64,
    center: Point,
    radius: f64,
    offset: f64,
    bounds: &Geometry,
) -> LabelPlacement {
    let distance = radius + offset;
    let x = (center.x + distance * angle.cos()).clamp(0.0, bounds.width.max(0.0));
    let y = (center.y + distance * angle.sin()).clamp(0.0, bounds.height.max(0.0));
    let band = LabelBand::classify(angle);
    let (align, baseline) = band.alignment();
    LabelPlacement {
        position: Point::new(x, y),
        align,
        baseline,
        band,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::layout::coords::polar_angle;
    use test_case::test_case;

    fn bounds() -> Geometry {
        Geometry::new(300.0, 300.0, 40.0)
    }

    #[test_case(0, 4, LabelBand::Top ; "north")]
    #[test_case(1, 4, LabelBand::Right ; "east")]
    #[test_case(2, 4, LabelBand::Bottom ; "south")]
    #[test_case(3, 4, LabelBand::Left ; "west")]
    #[test_case(1, 8, LabelBand::Right ; "north east diagonal")]
    #[test_case(3, 8, LabelBand::Right ; "south east diagonal")]
    #[test_case(5, 8, LabelBand::Left ; "south west diagonal")]
    #[test_case(7, 8, LabelBand::Left ; "north west diagonal")]
    #[test_case(1, 6, LabelBand::Right ; "sixty degrees off north")]
    #[test_case(1, 12, LabelBand::Top ; "thirty degrees off north")]
    #[test_case(5, 12, LabelBand::Bottom ; "thirty degrees off south")]
    fn test_band_table(index: usize, count: usize, expected: LabelBand) {
        assert_eq!(LabelBand::classify(polar_angle(index, count)), expected);
    }

    #[test]
    fn test_top_label_is_centered_above() {
        let p = place_axis_label(polar_angle(0, 5), Point::new(150.0, 150.0), 100.0, 10.0, &bounds());
        assert_eq!(p.align, TextAlign::Center);
        assert_eq!(p.baseline, TextBaseline::Bottom);
        assert!((p.position.x - 150.0).abs() < 1e-9);
        assert!((p.position.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_label_is_right_aligned() {
        let p = place_axis_label(polar_angle(3, 4), Point::new(150.0, 150.0), 100.0, 10.0, &bounds());
        assert_eq!(p.align, TextAlign::Right);
        assert_eq!(p.baseline, TextBaseline::Middle);
        assert!((p.position.x - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_anchor_is_clamped_into_canvas() {
        let p = place_axis_label(polar_angle(1, 4), Point::new(150.0, 150.0), 200.0, 50.0, &bounds());
        assert_eq!(p.position.x, 300.0);
    }
}
