//! In-memory drawing surface that records every call.
//!
//! Used for headless testing and for the CLI, which serializes the recorded
//! commands to JSON.

use super::backend::{ApproxTextMetrics, DrawSurface, TextMeasure};
use super::commands::{
    DrawCommand, FillStyle, Font, Point, Rect, Sector, StrokeStyle, TextStyle,
};

/// A surface that records draw calls as [`DrawCommand`]s
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty surface of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the surface empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in call order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }

    /// Filled rectangles, in call order
    pub fn filled_rects(&self) -> Vec<(Rect, &FillStyle)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, style } => Some((*rect, style)),
                _ => None,
            })
            .collect()
    }

    /// Filled sectors, in call order
    pub fn sectors(&self) -> Vec<&Sector> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillSector { sector, .. } => Some(sector),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        ApproxTextMetrics.measure_text(text, font)
    }
}

impl DrawSurface for RecordingSurface {
    fn metrics(&self) -> &dyn TextMeasure {
        self
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        // A full clear starts a new frame
        if rect.x <= 0.0 && rect.y <= 0.0 && rect.right() >= self.width && rect.bottom() >= self.height
        {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear { rect });
    }

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            style: style.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            style: style.clone(),
        });
    }

    fn stroke_path(&mut self, points: &[Point], closed: bool, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            closed,
            style: style.clone(),
        });
    }

    fn fill_path(&mut self, points: &[Point], style: &FillStyle) {
        self.commands.push(DrawCommand::FillPath {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn fill_sector(&mut self, sector: &Sector, style: &FillStyle, stroke: Option<&StrokeStyle>) {
        self.commands.push(DrawCommand::FillSector {
            sector: *sector,
            style: style.clone(),
            stroke: stroke.cloned(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, style: &FillStyle) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            style: style.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_call_order() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &FillStyle::solid("#FF0000"));
        surface.fill_text(
            "hi",
            Point::new(5.0, 5.0),
            &TextStyle::new(Font::default(), "#000000"),
        );
        assert_eq!(surface.command_count(), 2);
        assert_eq!(surface.texts(), vec!["hi"]);
        assert_eq!(surface.filled_rects()[0].1.color, "#FF0000");
    }

    #[test]
    fn test_full_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &FillStyle::solid("#FF0000"));
        surface.clear_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(surface.command_count(), 1);
        assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn test_partial_clear_keeps_history() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &FillStyle::solid("#FF0000"));
        surface.clear_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(surface.command_count(), 2);
    }

    #[test]
    fn test_take_commands_empties_surface() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.fill_circle(Point::new(1.0, 1.0), 2.0, &FillStyle::solid("#000000"));
        let commands = surface.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(surface.is_empty());
        assert_eq!(surface.width(), 10.0);
    }
}
