//! Font metrics.
//!
//! The widget layer never rasterizes glyphs itself; it only needs to know how
//! wide a string is and how tall a line is. Drawing a string is the canvas's
//! job (see [`crate::scene::Canvas::draw_string`]).

mod font_system;
mod metrics;

pub use font_system::{FontLoadError, FontdueMetrics};
pub use metrics::{FontMetrics, MonoMetrics};
