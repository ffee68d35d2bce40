//! Draw command model.
//!
//! Every chart reduces to an ordered list of these commands. Each command
//! carries its own style, so replaying a list never depends on state left
//! behind by an earlier command.

use serde::{Deserialize, Serialize};

use super::backend::DrawSurface;
use super::colors::CssColor;

/// Font family stack used for all chart text
pub const FONT_FAMILY: &str = "Calibri, Arial, sans-serif";

/// A point in canvas pixels
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Flip negative width/height so the rect is anchored at its top-left corner
    #[must_use]
    pub fn normalized(self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas 2D `textAlign` value
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text alignment relative to the anchor point
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl TextBaseline {
    /// Canvas 2D `textBaseline` value
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Font size and weight
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Font {
    /// Size in pixels
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }

    /// CSS font shorthand, e.g. `bold 12px Calibri, Arial, sans-serif`
    pub fn to_css(self) -> String {
        if self.bold {
            format!("bold {}px {}", self.size, FONT_FAMILY)
        } else {
            format!("{}px {}", self.size, FONT_FAMILY)
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::regular(10.0)
    }
}

/// Solid fill
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FillStyle {
    pub color: CssColor,
    /// Global alpha applied on top of the color (1.0 = opaque)
    pub alpha: f64,
}

impl FillStyle {
    pub fn solid(color: impl Into<CssColor>) -> Self {
        Self {
            color: color.into(),
            alpha: 1.0,
        }
    }

    pub fn translucent(color: impl Into<CssColor>, alpha: f64) -> Self {
        Self {
            color: color.into(),
            alpha,
        }
    }
}

/// Line stroke
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: CssColor,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: impl Into<CssColor>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Everything needed to draw one run of text
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub color: CssColor,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn new(font: Font, color: impl Into<CssColor>) -> Self {
        Self {
            font,
            color: color.into(),
            align: TextAlign::Left,
            baseline: TextBaseline::Middle,
        }
    }

    #[must_use]
    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }
}

/// Circular sector (pie slice) or annular sector (donut slice).
///
/// Angles are in radians, clockwise from 3 o'clock.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub center: Point,
    pub radius: f64,
    /// 0 for a pie slice
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    /// Angular span in radians
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// A single drawing primitive with its explicit style
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    /// Erase a region to transparent
    Clear { rect: Rect },
    FillRect { rect: Rect, style: FillStyle },
    StrokeRect { rect: Rect, style: StrokeStyle },
    /// Polyline, optionally closed back to its first point
    StrokePath {
        points: Vec<Point>,
        closed: bool,
        style: StrokeStyle,
    },
    /// Filled closed polygon
    FillPath { points: Vec<Point>, style: FillStyle },
    FillSector {
        sector: Sector,
        style: FillStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<StrokeStyle>,
    },
    FillCircle {
        center: Point,
        radius: f64,
        style: FillStyle,
    },
    FillText {
        text: String,
        position: Point,
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Execute this command against a surface
    pub fn apply(&self, surface: &mut dyn DrawSurface) {
        match self {
            Self::Clear { rect } => surface.clear_rect(*rect),
            Self::FillRect { rect, style } => surface.fill_rect(*rect, style),
            Self::StrokeRect { rect, style } => surface.stroke_rect(*rect, style),
            Self::StrokePath {
                points,
                closed,
                style,
            } => surface.stroke_path(points, *closed, style),
            Self::FillPath { points, style } => surface.fill_path(points, style),
            Self::FillSector {
                sector,
                style,
                stroke,
            } => surface.fill_sector(sector, style, stroke.as_ref()),
            Self::FillCircle {
                center,
                radius,
                style,
            } => surface.fill_circle(*center, *radius, style),
            Self::FillText {
                text,
                position,
                style,
            } => surface.fill_text(text, *position, style),
        }
    }

    /// Text content if this is a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::FillText { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Ordered output of one draw pass
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self, rect: Rect) {
        self.push(DrawCommand::Clear { rect });
    }

    pub fn fill_rect(&mut self, rect: Rect, style: FillStyle) {
        self.push(DrawCommand::FillRect {
            rect: rect.normalized(),
            style,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle) {
        self.push(DrawCommand::StrokeRect {
            rect: rect.normalized(),
            style,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.push(DrawCommand::StrokePath {
            points: vec![from, to],
            closed: false,
            style,
        });
    }

    pub fn stroke_polygon(&mut self, points: Vec<Point>, style: StrokeStyle) {
        self.push(DrawCommand::StrokePath {
            points,
            closed: true,
            style,
        });
    }

    pub fn fill_polygon(&mut self, points: Vec<Point>, style: FillStyle) {
        self.push(DrawCommand::FillPath { points, style });
    }

    pub fn fill_sector(&mut self, sector: Sector, style: FillStyle, stroke: Option<StrokeStyle>) {
        self.push(DrawCommand::FillSector {
            sector,
            style,
            stroke,
        });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, style: FillStyle) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            style,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, position: Point, style: TextStyle) {
        self.push(DrawCommand::FillText {
            text: text.into(),
            position,
            style,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// All text runs in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }

    /// Replay every command, in order, onto a surface
    pub fn replay(&self, surface: &mut dyn DrawSurface) {
        for command in &self.commands {
            command.apply(surface);
        }
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    #[test]
    fn test_negative_height_rect_is_flipped() {
        let rect = Rect::new(10.0, 100.0, 20.0, -30.0).normalized();
        assert_eq!(rect, Rect::new(10.0, 70.0, 20.0, 30.0));
        assert_eq!(rect.bottom(), 100.0);
    }

    #[test]
    fn test_font_css() {
        assert_eq!(Font::regular(10.0).to_css(), "10px Calibri, Arial, sans-serif");
        assert_eq!(Font::bold(12.0).to_css(), "bold 12px Calibri, Arial, sans-serif");
    }

    #[test]
    fn test_draw_command_json_is_tagged() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), FillStyle::solid("#FF0000"));
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["op"], "fillRect");
        assert_eq!(json[0]["style"]["color"], "#FF0000");
    }

    #[test]
    fn test_texts_in_draw_order() {
        let style = TextStyle::new(Font::default(), "#000000");
        let mut list = DrawList::new();
        list.text("first", Point::new(0.0, 0.0), style.clone());
        list.clear(Rect::new(0.0, 0.0, 1.0, 1.0));
        list.text("second", Point::new(0.0, 0.0), style);
        assert_eq!(list.texts(), vec!["first", "second"]);
    }

    #[test]
    fn test_stroke_rect_is_normalized_and_replayed() {
        let mut list = DrawList::new();
        list.stroke_rect(Rect::new(50.0, 20.0, -30.0, 10.0), StrokeStyle::new("#808080", 1.0));

        let mut surface = RecordingSurface::new(100.0, 100.0);
        list.replay(&mut surface);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::StrokeRect {
                rect: Rect::new(20.0, 20.0, 30.0, 10.0),
                style: StrokeStyle::new("#808080", 1.0),
            }]
        );
    }
}
