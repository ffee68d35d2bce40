//! Data-space to pixel-space mapping for cartesian and polar charts.
//!
//! All functions are total: degenerate inputs (zero categories, zero axes,
//! zero maximum) map to a safe default position instead of failing.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::render::commands::Point;
use crate::types::Geometry;

/// Fraction of a sub-slot covered by the drawn bar
pub const GROUP_FILL: f64 = 0.8;

/// Horizontal layout of grouped bars inside the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianGrid {
    pub geometry: Geometry,
}

impl CartesianGrid {
    pub const fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Width of one category slot
    pub fn slot_width(&self, category_count: usize) -> f64 {
        if category_count == 0 {
            return self.geometry.plot_width();
        }
        self.geometry.plot_width() / count_f64(category_count)
    }

    /// Share of a category slot given to each of `slot_count` bars
    pub fn sub_slot_width(&self, category_count: usize, slot_count: usize) -> f64 {
        if slot_count == 0 {
            return 0.0;
        }
        self.slot_width(category_count) / count_f64(slot_count)
    }

    /// Drawn width of one bar, leaving a gap between neighbours
    pub fn bar_width(&self, category_count: usize, slot_count: usize) -> f64 {
        self.sub_slot_width(category_count, slot_count) * GROUP_FILL
    }

    /// Center of the category tick for `category_index`
    pub fn category_center(&self, category_index: usize, category_count: usize) -> f64 {
        let g = &self.geometry;
        if category_count == 0 {
            return g.padding + g.plot_width() / 2.0;
        }
        g.padding + (count_f64(category_index) + 0.5) * self.slot_width(category_count)
    }

    /// Center x of bar `slot_index` of `slot_count` within category `category_index`.
    ///
    /// Bars are offset by `(slot_index - (slot_count - 1) / 2)` sub-slots, so
    /// each group is centered on its category tick.
    pub fn x(
        &self,
        category_index: usize,
        category_count: usize,
        slot_index: usize,
        slot_count: usize,
    ) -> f64 {
        let center = self.category_center(category_index, category_count);
        if category_count == 0 || slot_count == 0 {
            return center;
        }
        let offset = count_f64(slot_index) - (count_f64(slot_count) - 1.0) / 2.0;
        center + offset * self.sub_slot_width(category_count, slot_count)
    }
}

/// Map `value` to a y offset within the plot area.
///
/// `0` maps to `plot_height` (the baseline) and `max_value` maps to `0`,
/// since pixel y grows downward. A maximum that is not strictly positive maps
/// every value to the baseline.
pub fn cartesian_y(value: f64, max_value: f64, plot_height: f64) -> f64 {
    if max_value.is_nan() || max_value <= 0.0 {
        return plot_height;
    }
    plot_height - (value / max_value) * plot_height
}

/// Angle of axis `angle_index` of `angle_count`, with index 0 at 12 o'clock
/// and indices proceeding clockwise.
pub fn polar_angle(angle_index: usize, angle_count: usize) -> f64 {
    if angle_count == 0 {
        return -FRAC_PI_2;
    }
    count_f64(angle_index) * (2.0 * PI / count_f64(angle_count)) - FRAC_PI_2
}

/// Point on axis `angle_index` at `normalized_radius` (0 = center, 1 = outer ring).
///
/// Returns the center when `angle_count` is zero.
pub fn polar_point(
    angle_index: usize,
    angle_count: usize,
    normalized_radius: f64,
    center_x: f64,
    center_y: f64,
    max_radius: f64,
) -> Point {
    if angle_count == 0 {
        return Point::new(center_x, center_y);
    }
    let angle = polar_angle(angle_index, angle_count);
    let r = max_radius * normalized_radius;
    Point::new(center_x + r * angle.cos(), center_y + r * angle.sin())
}

/// Polar layout for pie and radar charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLayout {
    pub center: Point,
    pub max_radius: f64,
}

impl PolarLayout {
    /// Largest circle that fits the plot area, centered on the canvas
    pub fn fit(geometry: &Geometry) -> Self {
        let (cx, cy) = geometry.center();
        Self {
            center: Point::new(cx, cy),
            max_radius: geometry.plot_width().min(geometry.plot_height()) / 2.0,
        }
    }

    pub fn point(&self, angle_index: usize, angle_count: usize, normalized_radius: f64) -> Point {
        polar_point(
            angle_index,
            angle_count,
            normalized_radius,
            self.center.x,
            self.center.y,
            self.max_radius,
        )
    }

    /// Point at an arbitrary angle and absolute radius
    pub fn at(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }

    /// Closed ring through every axis at `normalized_radius`
    pub fn ring(&self, angle_count: usize, normalized_radius: f64) -> Vec<Point> {
        (0..angle_count)
            .map(|i| self.point(i, angle_count, normalized_radius))
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn grid() -> CartesianGrid {
        CartesianGrid::new(Geometry::new(300.0, 200.0, 40.0))
    }

    #[test]
    fn test_single_bar_is_centered_on_category() {
        let g = grid();
        // 220px plot, 2 categories -> slots of 110px
        assert_eq!(g.x(0, 2, 0, 1), 40.0 + 55.0);
        assert_eq!(g.x(1, 2, 0, 1), 40.0 + 165.0);
    }

    #[test]
    fn test_grouped_bars_are_symmetric() {
        let g = grid();
        let center = g.category_center(1, 3);
        let left = g.x(1, 3, 0, 2);
        let right = g.x(1, 3, 1, 2);
        assert!((center - left - (right - center)).abs() < EPS);
        assert!((right - left - g.sub_slot_width(3, 2)).abs() < EPS);
    }

    #[test]
    fn test_neighbouring_bars_leave_a_gap() {
        let g = grid();
        // 3 categories of 220/3 px, 4 bars each
        let sub = 220.0 / 3.0 / 4.0;
        assert!((g.sub_slot_width(3, 4) - sub).abs() < EPS);
        assert!((g.bar_width(3, 4) - sub * 0.8).abs() < EPS);
        for i in 0..3 {
            let step = g.x(0, 3, i + 1, 4) - g.x(0, 3, i, 4);
            assert!((step - sub).abs() < EPS);
            assert!(step > g.bar_width(3, 4));
        }
        assert_eq!(g.sub_slot_width(3, 0), 0.0);
    }

    #[test]
    fn test_zero_categories_returns_plot_center() {
        assert_eq!(grid().x(0, 0, 0, 1), 150.0);
        assert_eq!(grid().x(0, 3, 0, 0), grid().category_center(0, 3));
    }

    #[test]
    fn test_cartesian_y_endpoints() {
        assert_eq!(cartesian_y(100.0, 100.0, 120.0), 0.0);
        assert_eq!(cartesian_y(0.0, 100.0, 120.0), 120.0);
        assert_eq!(cartesian_y(50.0, 100.0, 120.0), 60.0);
    }

    #[test]
    fn test_cartesian_y_zero_max_is_baseline() {
        assert_eq!(cartesian_y(42.0, 0.0, 120.0), 120.0);
        assert_eq!(cartesian_y(42.0, -5.0, 120.0), 120.0);
        assert_eq!(cartesian_y(42.0, f64::NAN, 120.0), 120.0);
    }

    #[test]
    fn test_polar_point_index_zero_is_north() {
        let p = polar_point(0, 5, 1.0, 150.0, 150.0, 100.0);
        assert!((p.x - 150.0).abs() < EPS);
        assert!((p.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_polar_points_proceed_clockwise() {
        // Index 1 of 4 is due east (3 o'clock)
        let p = polar_point(1, 4, 1.0, 0.0, 0.0, 10.0);
        assert!((p.x - 10.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_polar_point_zero_axes_is_center() {
        assert_eq!(polar_point(3, 0, 1.0, 7.0, 9.0, 50.0), Point::new(7.0, 9.0));
    }

    #[test]
    fn test_fit_uses_smaller_plot_side() {
        let layout = PolarLayout::fit(&Geometry::new(300.0, 200.0, 20.0));
        assert_eq!(layout.center, Point::new(150.0, 100.0));
        assert_eq!(layout.max_radius, 80.0);
    }

    proptest! {
        #[test]
        fn prop_cartesian_y_maps_max_to_top_and_zero_to_baseline(
            max in 0.001f64..1.0e6,
            plot_height in 1.0f64..2000.0,
        ) {
            prop_assert!(cartesian_y(max, max, plot_height).abs() < 1e-9 * plot_height.max(1.0));
            prop_assert_eq!(cartesian_y(0.0, max, plot_height), plot_height);
        }

        #[test]
        fn prop_zero_max_is_always_baseline(v in -1.0e6f64..1.0e6, plot_height in 0.0f64..2000.0) {
            prop_assert_eq!(cartesian_y(v, 0.0, plot_height), plot_height);
        }

        #[test]
        fn prop_bar_centers_stay_inside_plot(
            categories in 1usize..50,
            series in 1usize..8,
            width in 100.0f64..2000.0,
        ) {
            let g = CartesianGrid::new(Geometry::new(width, 200.0, 40.0));
            for c in 0..categories {
                for s in 0..series {
                    let x = g.x(c, categories, s, series);
                    prop_assert!(x >= 40.0 && x <= width - 40.0);
                }
            }
        }

        #[test]
        fn prop_index_zero_is_north_for_any_count(n in 1usize..64, r in 1.0f64..500.0) {
            let p = polar_point(0, n, 1.0, 10.0, 20.0, r);
            prop_assert!((p.x - 10.0).abs() < 1e-9);
            prop_assert!((p.y - (20.0 - r)).abs() < 1e-9);
        }
    }
}
