//! Layout math shared by the chart renderers.
//!
//! This module handles:
//! - Mapping category indices and values to cartesian pixel positions
//! - Polar placement of pie slices and radar axes
//! - Axis label anchoring and alignment around a circle
//! - Packing legend items into centered rows

pub mod coords;
pub mod labels;
pub mod legend;

pub use coords::{cartesian_y, polar_angle, polar_point, CartesianGrid, PolarLayout};
pub use labels::{place_axis_label, LabelBand, LabelPlacement};
pub use legend::{LegendEntry, LegendItem, LegendLayout};
