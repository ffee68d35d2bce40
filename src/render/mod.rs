//! Rendering with pluggable surfaces.
//!
//! This module provides:
//! - Draw commands and draw lists produced by the chart renderers
//! - The surface traits every backend implements
//! - Canvas 2D surface (browser)
//! - Recording surface (headless, tests and CLI)
//! - Color parsing utilities

pub mod backend;
pub mod canvas;
pub mod colors;
pub mod commands;
pub mod recording;

pub use backend::{ApproxTextMetrics, DrawSurface, TextMeasure};
pub use canvas::CanvasSurface;
pub use colors::{palette, parse_color_rgba, CssColor};
pub use commands::{DrawCommand, DrawList, FillStyle, Font, Point, Rect, StrokeStyle, TextStyle};
pub use recording::RecordingSurface;
