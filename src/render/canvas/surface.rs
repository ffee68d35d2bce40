//! [`DrawSurface`] over the HTML Canvas 2D API via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{ChartError, Result};
use crate::render::backend::{ApproxTextMetrics, DrawSurface, TextMeasure};
use crate::render::commands::{FillStyle, Font, Point, Rect, Sector, StrokeStyle, TextStyle};

const FULL_CIRCLE: f64 = std::f64::consts::PI * 2.0;

/// Canvas 2D drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap the 2D context of a canvas element, using its pixel size
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| ChartError::Render("getContext('2d') failed".to_string()))?
            .ok_or_else(|| ChartError::Render("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Render("context is not CanvasRenderingContext2d".to_string()))?;

        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }

    fn apply_fill(&self, style: &FillStyle) {
        self.ctx.set_global_alpha(style.alpha);
        self.ctx.set_fill_style_str(&style.color);
    }

    fn apply_stroke(&self, style: &StrokeStyle) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.width);
    }

    fn trace_polygon(&self, points: &[Point], closed: bool) {
        self.ctx.begin_path();
        if let Some((first, rest)) = points.split_first() {
            self.ctx.move_to(first.x, first.y);
            for p in rest {
                self.ctx.line_to(p.x, p.y);
            }
        }
        if closed {
            self.ctx.close_path();
        }
    }
}

impl TextMeasure for CanvasSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.ctx.set_font(&font.to_css());
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or_else(|_| ApproxTextMetrics.measure_text(text, font))
    }
}

impl DrawSurface for CanvasSurface {
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
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) {
        self.apply_fill(style);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        self.apply_stroke(style);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_path(&mut self, points: &[Point], closed: bool, style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        self.apply_stroke(style);
        self.trace_polygon(points, closed);
        self.ctx.stroke();
    }

    fn fill_path(&mut self, points: &[Point], style: &FillStyle) {
        if points.len() < 3 {
            return;
        }
        self.apply_fill(style);
        self.trace_polygon(points, true);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_sector(&mut self, sector: &Sector, style: &FillStyle, stroke: Option<&StrokeStyle>) {
        let Point { x: cx, y: cy } = sector.center;
        self.apply_fill(style);
        self.ctx.begin_path();
        if sector.inner_radius > 0.0 {
            // Donut: outer arc forward, inner arc back
            let _ = self
                .ctx
                .arc(cx, cy, sector.radius, sector.start_angle, sector.end_angle);
            let _ = self.ctx.arc_with_anticlockwise(
                cx,
                cy,
                sector.inner_radius,
                sector.end_angle,
                sector.start_angle,
                true,
            );
        } else {
            self.ctx.move_to(cx, cy);
            let _ = self
                .ctx
                .arc(cx, cy, sector.radius, sector.start_angle, sector.end_angle);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);

        if let Some(stroke) = stroke {
            self.apply_stroke(stroke);
            self.ctx.stroke();
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, style: &FillStyle) {
        self.apply_fill(style);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, FULL_CIRCLE);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_font(&style.font.to_css());
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
        let _ = self.ctx.fill_text(text, position.x, position.y);
    }
}
