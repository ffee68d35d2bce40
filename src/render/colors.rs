//! Color utilities for chart rendering.
//!
//! Colors travel through the draw list as CSS color strings, which Canvas 2D
//! accepts directly. Parsing is only needed for color math such as picking a
//! readable label color on top of a pie slice.

/// A CSS color string (e.g., "#FF0000", "rgba(255, 0, 0, 0.5)")
pub type CssColor = String;

/// RGB color with u8 components for color math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #), `RGB` or `RRGGBB`.
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        match hex.len() {
            3 => {
                let r = expand_nibble(hex.get(0..1)?)?;
                let g = expand_nibble(hex.get(1..2)?)?;
                let b = expand_nibble(hex.get(2..3)?)?;
                Some(Self { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    /// Calculate relative luminance (0.0 to 1.0).
    /// Uses simplified formula: 0.299*R + 0.587*G + 0.114*B
    pub fn luminance(self) -> f64 {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        (0.299 * r + 0.587 * g + 0.114 * b) / 255.0
    }

    /// Check if this is a light color (luminance > 0.5).
    pub fn is_light(self) -> bool {
        self.luminance() > 0.5
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

fn expand_nibble(s: &str) -> Option<u8> {
    let v = u8::from_str_radix(s, 16).ok()?;
    Some(v * 17)
}

/// Parse a CSS color and return RGBA components (0-255 for RGB, 0.0-1.0 for alpha)
///
/// Supports formats:
/// - "#RGB", "#RRGGBB", "#RRGGBBAA"
/// - "rgb(r, g, b)" and "rgba(r, g, b, a)"
/// - a handful of CSS color keywords
pub fn parse_color_rgba(s: &str) -> Option<(u8, u8, u8, f64)> {
    let s = s.trim();

    if s.starts_with('#') {
        parse_hex_rgba(s)
    } else if s.starts_with("rgba(") {
        parse_rgba_string(s)
    } else if s.starts_with("rgb(") {
        parse_rgb_string(s)
    } else {
        named_color(s).map(|c| (c.r, c.g, c.b, 1.0))
    }
}

fn parse_hex_rgba(s: &str) -> Option<(u8, u8, u8, f64)> {
    let hex = s.strip_prefix('#')?;

    match hex.len() {
        3 | 6 => Rgb::from_hex(hex).map(|c| (c.r, c.g, c.b, 1.0)),
        8 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            let a = u8::from_str_radix(hex.get(6..8)?, 16).ok()?;
            Some((r, g, b, f64::from(a) / 255.0))
        }
        _ => None,
    }
}

fn parse_rgb_string(s: &str) -> Option<(u8, u8, u8, f64)> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b, 1.0))
}

fn parse_rgba_string(s: &str) -> Option<(u8, u8, u8, f64)> {
    let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b, a))
}

fn named_color(s: &str) -> Option<Rgb> {
    let rgb = match s.to_ascii_lowercase().as_str() {
        "black" => Rgb::new(0, 0, 0),
        "white" => Rgb::new(255, 255, 255),
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "blue" => Rgb::new(0, 0, 255),
        "yellow" => Rgb::new(255, 255, 0),
        "orange" => Rgb::new(255, 165, 0),
        "purple" => Rgb::new(128, 0, 128),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        _ => return None,
    };
    Some(rgb)
}

/// Readable text color for labels drawn on top of `background`.
///
/// Unparseable backgrounds are treated as dark.
pub fn contrast_text_color(background: &str) -> &'static str {
    match parse_color_rgba(background) {
        Some((r, g, b, a)) if a > 0.5 && Rgb::new(r, g, b).is_light() => palette::BLACK,
        _ => palette::WHITE,
    }
}

/// Colors for chart chrome (CSS format)
pub mod palette {
    pub const WHITE: &str = "#FFFFFF";
    pub const BLACK: &str = "#000000";

    /// Horizontal gridlines and radar rings
    pub const GRID_LINE: &str = "#E0E0E0";

    /// Radar spokes
    pub const SPOKE: &str = "#BFBFBF";

    /// Bar chart axis lines
    pub const AXIS: &str = "#808080";

    /// Category and axis labels
    pub const AXIS_LABEL: &str = "#404040";

    /// Value labels above bars
    pub const VALUE_LABEL: &str = "#606060";

    /// Legend text
    pub const LEGEND_TEXT: &str = "#000000";
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_short_and_long() {
        assert_eq!(Rgb::from_hex("#F80").unwrap(), Rgb::new(255, 136, 0));
        assert_eq!(Rgb::from_hex("FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert!(Rgb::from_hex("#GG0000").is_none());
    }

    #[test]
    fn test_parse_hex_8_is_css_order() {
        let (r, g, b, a) = parse_color_rgba("#FF000080").unwrap();
        assert_eq!((r, g, b), (255, 0, 0));
        assert!((a - 0.502).abs() < 0.001);
    }

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(parse_color_rgba("rgb(255, 128, 64)").unwrap(), (255, 128, 64, 1.0));
        let (_, _, _, a) = parse_color_rgba("rgba(54, 162, 235, 0.2)").unwrap();
        assert_eq!(a, 0.2);
        assert!(parse_color_rgba("rgb(1, 2)").is_none());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color_rgba("Gray").unwrap(), (128, 128, 128, 1.0));
        assert!(parse_color_rgba("chartreuse-ish").is_none());
    }

    #[test]
    fn test_contrast_text_color() {
        assert_eq!(contrast_text_color("#FFC000"), palette::BLACK);
        assert_eq!(contrast_text_color("#4472C4"), palette::WHITE);
        assert_eq!(contrast_text_color("not a color"), palette::WHITE);
        assert_eq!(contrast_text_color("rgba(255, 255, 255, 0.1)"), palette::WHITE);
    }
}
