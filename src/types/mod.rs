//! Chart input types.

mod dataset;
mod geometry;

pub use dataset::{Dataset, Series, SeriesColor, FALLBACK_COLOR};
pub use geometry::Geometry;
