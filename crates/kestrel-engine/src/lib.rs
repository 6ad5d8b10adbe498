//! Kestrel engine crate.
//!
//! This crate owns the host-boundary pieces used by the widget layer:
//! geometry, colors, input vocabulary, font metrics, the drawing canvas and
//! the surface / timer / clipboard collaborators.

pub mod coords;
pub mod host;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
