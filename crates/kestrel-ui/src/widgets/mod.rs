//! Widget kinds other than the list box.
//!
//! Each kind holds only its own state; the shared parts (caption, colors,
//! flags, bounds) live in [`crate::widget::WidgetBase`] and are passed to
//! the kind's handlers alongside it.

mod button;
mod button_array;
mod edit;
mod label;
mod line;

pub use button::{ButtonPush, PushState};
pub use button_array::{ArrayStyle, ButtonArray, ButtonElem, ElemState, Orientation};
pub use edit::{EditField, EditFieldMut, DEFAULT_MAX_LEN};
pub use label::Label;
pub use line::Line;
