use serde::{Deserialize, Serialize};

/// Color used when a series has no color, or when a per-point color array is
/// shorter than the number of values.
pub const FALLBACK_COLOR: &str = "#A5A5A5";

/// Series color: one color for the whole series or one per value
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SeriesColor {
    /// Same color for every value
    Single(String),
    /// One color per value (bar/pie slices)
    PerPoint(Vec<String>),
}

impl SeriesColor {
    /// Color for the value at `index`, or `None` if a per-point array is too short
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(color) => Some(color),
            Self::PerPoint(colors) => colors.get(index).map(String::as_str),
        }
    }

    /// Representative color (legend swatch)
    pub fn primary(&self) -> Option<&str> {
        self.get(0)
    }
}

/// One named sequence of values sharing the dataset's labels
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Series name (legend text)
    pub name: String,
    /// One value per label
    pub values: Vec<f64>,
    /// Fill color(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SeriesColor>,
    /// Outline color (radar polygon stroke)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Outline width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Translucent area fill (radar polygon)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Series {
    /// Create a series without colors
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            ..Self::default()
        }
    }

    /// Set a single color for the whole series
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(SeriesColor::Single(color.into()));
        self
    }

    /// Set one color per value
    #[must_use]
    pub fn with_point_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color = Some(SeriesColor::PerPoint(
            colors.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Color for the value at `index`, falling back to [`FALLBACK_COLOR`]
    pub fn color_at(&self, index: usize) -> &str {
        self.color
            .as_ref()
            .and_then(|c| c.get(index))
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Legend swatch / line color for the whole series
    pub fn primary_color(&self) -> &str {
        self.color
            .as_ref()
            .and_then(SeriesColor::primary)
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// The full input to one chart render
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Category / axis names
    pub labels: Vec<String>,
    /// Data series, all with `labels.len()` values
    #[serde(alias = "datasets")]
    pub series: Vec<Series>,
}

impl Dataset {
    /// Create a dataset from labels and series
    pub fn new<I, S>(labels: I, series: Vec<Series>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series,
        }
    }

    /// Number of categories (N)
    pub fn category_count(&self) -> usize {
        self.labels.len()
    }
}
