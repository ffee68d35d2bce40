use serde::{Deserialize, Serialize};

/// Target surface size plus the margin reserved for axis labels.
///
/// Plot dimensions are derived, never stored.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Margin on every side of the plot area
    pub padding: f64,
    /// Extra space above the plot, on top of `padding` (wrapped legend rows)
    #[serde(default)]
    pub top_inset: f64,
}

impl Geometry {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
            top_inset: 0.0,
        }
    }

    /// Push the plot's top edge down by `inset`
    #[must_use]
    pub const fn with_top_inset(mut self, inset: f64) -> Self {
        self.top_inset = inset;
        self
    }

    /// Y coordinate of the plot area's top edge
    pub fn plot_top(&self) -> f64 {
        self.padding + self.top_inset
    }

    /// Width of the plot area (canvas minus padding on both sides)
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    /// Height of the plot area (canvas minus padding and top inset)
    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding - self.top_inset).max(0.0)
    }

    /// Y coordinate of the bar chart baseline
    pub fn baseline_y(&self) -> f64 {
        self.plot_top() + self.plot_height()
    }

    /// Center of the plot area
    pub fn center(&self) -> (f64, f64) {
        (
            self.padding + self.plot_width() / 2.0,
            self.plot_top() + self.plot_height() / 2.0,
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_size_subtracts_padding_twice() {
        let geometry = Geometry::new(300.0, 200.0, 40.0);
        assert_eq!(geometry.plot_width(), 220.0);
        assert_eq!(geometry.plot_height(), 120.0);
        assert_eq!(geometry.baseline_y(), 160.0);
    }

    #[test]
    fn test_plot_size_never_negative() {
        let geometry = Geometry::new(50.0, 30.0, 40.0);
        assert_eq!(geometry.plot_width(), 0.0);
        assert_eq!(geometry.plot_height(), 0.0);
    }

    #[test]
    fn test_top_inset_shrinks_plot_from_above() {
        let geometry = Geometry::new(300.0, 300.0, 40.0).with_top_inset(32.0);
        assert_eq!(geometry.plot_top(), 72.0);
        assert_eq!(geometry.plot_height(), 188.0);
        assert_eq!(geometry.baseline_y(), 260.0);
        assert_eq!(geometry.center(), (150.0, 166.0));
    }
}
