//! Integer geometry shared by layout, hit-testing and drawing.
//!
//! Canonical space:
//! - whole pixels
//! - +X right, +Y up (host convention)
//! - container-local coordinates put the origin at the top-left of the
//!   inner area, so everything below it has a negative `y`

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
