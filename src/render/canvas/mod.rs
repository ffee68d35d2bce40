//! Canvas 2D rendering backend.
//!
//! Replays draw lists onto an HTML canvas via web-sys.

mod surface;

pub use surface::CanvasSurface;
