//! Color model shared between widgets and the drawing canvas.
//!
//! Scope:
//! - straight-alpha RGBA values
//! - host-provided named colors, resolved by the host at draw time
//! - the 4-float wire convention used to pass either of them through one slot

pub mod color;

pub use color::{Color, HostColor, Rgba};
