//! Chart configuration surface.
//!
//! Sizes default per chart kind; colors always come from the dataset.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Kind of chart to render
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Grouped vertical bars
    #[default]
    Bar,
    /// Pie or donut
    Pie,
    /// Radar / spider
    Radar,
}

impl ChartKind {
    /// Default canvas size (width, height) for this kind
    pub const fn default_size(self) -> (u32, u32) {
        match self {
            Self::Bar => (300, 200),
            Self::Pie | Self::Radar => (300, 300),
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "pie" | "donut" | "doughnut" => Ok(Self::Pie),
            "radar" | "spider" => Ok(Self::Radar),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown chart kind '{other}'"
            ))),
        }
    }
}

/// Render configuration for one chart
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Which renderer to use
    #[serde(default)]
    pub kind: ChartKind,
    /// Canvas width in pixels (defaults per kind)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height in pixels (defaults per kind)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Donut hole as a fraction of the pie radius (0 = plain pie)
    #[serde(default)]
    pub cutout: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::for_kind(ChartKind::default())
    }
}

impl ChartConfig {
    /// Configuration with the default size for `kind`
    pub const fn for_kind(kind: ChartKind) -> Self {
        Self {
            kind,
            width: None,
            height: None,
            cutout: 0.0,
        }
    }

    /// Override the canvas size
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Turn a pie into a donut
    #[must_use]
    pub const fn with_cutout(mut self, cutout: f64) -> Self {
        self.cutout = cutout;
        self
    }

    /// Effective canvas size, falling back to the kind's default
    pub fn size(&self) -> (u32, u32) {
        let (w, h) = self.kind.default_size();
        (self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    /// Check sizes and cutout are in range
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidConfig(format!(
                "canvas size must be positive, got {width}x{height}"
            )));
        }
        if !(0.0..1.0).contains(&self.cutout) {
            return Err(ChartError::InvalidConfig(format!(
                "cutout must be in [0, 1), got {}",
                self.cutout
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes_per_kind() {
        assert_eq!(ChartConfig::for_kind(ChartKind::Bar).size(), (300, 200));
        assert_eq!(ChartConfig::for_kind(ChartKind::Pie).size(), (300, 300));
        assert_eq!(ChartConfig::for_kind(ChartKind::Radar).size(), (300, 300));
    }

    #[test]
    fn test_explicit_size_wins() {
        let config = ChartConfig::for_kind(ChartKind::Radar).with_size(640, 480);
        assert_eq!(config.size(), (640, 480));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!("donut".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!("spider".parse::<ChartKind>().unwrap(), ChartKind::Radar);
        assert!("line".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let config = ChartConfig::for_kind(ChartKind::Bar).with_size(0, 200);
        assert!(matches!(
            config.validate(),
            Err(ChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_full_cutout() {
        let config = ChartConfig::for_kind(ChartKind::Pie).with_cutout(1.0);
        assert!(config.validate().is_err());
        assert!(config.with_cutout(0.5).validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"kind": "pie", "width": 400, "cutout": 0.5}"#).unwrap();
        assert_eq!(config.kind, ChartKind::Pie);
        assert_eq!(config.size(), (400, 300));
        assert_eq!(config.cutout, 0.5);
    }
}
