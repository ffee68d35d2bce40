//! Fail-fast dataset validation at the rendering boundary.
//!
//! The renderers themselves trust their input; [`crate::charts::render_chart`]
//! runs this check first so shape mismatches and NaN never reach the geometry.

use crate::error::{ChartError, Result};
use crate::types::Dataset;

/// Check that every series has one finite value per label.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let expected = dataset.category_count();
    for series in &dataset.series {
        if series.values.len() != expected {
            return Err(ChartError::ShapeMismatch {
                series: series.name.clone(),
                expected,
                actual: series.values.len(),
            });
        }
        if let Some(index) = series.values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFiniteValue {
                series: series.name.clone(),
                index,
            });
        }
        if let Some(width) = series.border_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "border width of series '{}' must be a finite non-negative number",
                    series.name
                )));
            }
        }
    }
    Ok(())
}
