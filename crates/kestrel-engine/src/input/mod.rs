//! Input vocabulary.
//!
//! Host-agnostic: the host translates its own key codes, pointer states and
//! wheel clicks into these types before handing them to a container.

mod types;

pub use types::{
    CursorShape,
    Key,
    KeyEvent,
    KeyState,
    Modifiers,
    MouseButton,
    MouseStatus,
};
