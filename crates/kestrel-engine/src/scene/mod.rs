//! Drawing surface abstraction and a recording implementation of it.
//!
//! Responsibilities:
//! - define the primitive set widgets draw with ([`Canvas`])
//! - record those primitives in order for headless hosts and tests ([`DrawList`])

mod canvas;
mod cmd;
mod list;

pub use canvas::Canvas;
pub use cmd::DrawCmd;
pub use list::DrawList;
