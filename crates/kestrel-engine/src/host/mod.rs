//! Host collaborators.
//!
//! The widget layer talks to the outside world only through these traits:
//! the window surface it lives on, the periodic timer, and the clipboard.
//! Each comes with an in-memory implementation for headless use.

pub mod clipboard;
mod surface;
mod timer;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use surface::{HeadlessSurface, Surface};
pub use timer::{ManualTimer, TimerHost};
