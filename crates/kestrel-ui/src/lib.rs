//! Kestrel UI: retained widgets inside a host window.
//!
//! A [`Container`] owns one host [`Surface`](kestrel_engine::host::Surface)
//! and an ordered list of widgets. Each widget carries a [`Placement`] that
//! the container resolves into a rectangle whenever the window size changes.
//! Input arrives through the container, which routes pointer events by hit
//! test and capture, and key events through the keyboard focus.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kestrel_ui::prelude::*;
//!
//! let metrics = SharedMetrics::new(MonoMetrics::default());
//! let surface = Box::new(HeadlessSurface::new(Rect::new(100, 500, 400, 200)));
//! let mut window = Container::new("Example", surface, metrics);
//!
//! let ok = window.add(Placement::new(), Widget::button("OK"))?;
//! window.set_default_button(ok)?;
//!
//! // in the host's event callbacks:
//! window.key(&KeyEvent::pressed(Key::Return));
//! for msg in window.drain_messages() {
//!     // react to UiMessage::ButtonClicked { id } ...
//! }
//! ```

pub mod config;
pub mod container;
pub mod cropped;
pub mod error;
pub mod event;
pub mod focus;
pub mod ident;
pub mod layout;
pub mod list;
pub mod metrics;
pub mod painter;
pub mod placement;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use config::{ConfigError, UiConfig};
pub use container::Container;
pub use error::UiError;
pub use event::UiMessage;
pub use ident::{RefCon, WidgetId};
pub use widget::Widget;

/// Everything needed to build a window: import this in application code.
pub mod prelude {
    pub use crate::config::{ConfigError, UiConfig};
    pub use crate::container::Container;
    pub use crate::cropped::CroppedString;
    pub use crate::error::UiError;
    pub use crate::event::{EventCtx, UiMessage};
    pub use crate::focus::{FocusChange, Focusable};
    pub use crate::ident::{RefCon, WidgetId};
    pub use crate::list::{ColumnDef, DataType, ListBox, ListItem, ListRow, Sorting};
    pub use crate::metrics::SharedMetrics;
    pub use crate::placement::{Axis, Edge, EdgeRule, Placement};
    pub use crate::theme::{Theme, ThemeColor};
    pub use crate::widget::{Widget, WidgetBase, WidgetKind};
    pub use crate::widgets::{
        ArrayStyle, ButtonArray, ButtonElem, ButtonPush, EditField, EditFieldMut, ElemState, Label, Line,
        Orientation, PushState,
    };

    // Engine primitives every application touches.
    pub use kestrel_engine::coords::{Point, Rect};
    pub use kestrel_engine::host::{
        Clipboard, ClipboardError, HeadlessSurface, ManualTimer, MemoryClipboard, Surface, SystemClipboard,
    };
    pub use kestrel_engine::input::{CursorShape, Key, KeyEvent, KeyState, Modifiers, MouseButton, MouseStatus};
    pub use kestrel_engine::paint::{Color, HostColor};
    pub use kestrel_engine::scene::{Canvas, DrawList};
    pub use kestrel_engine::text::{FontMetrics, FontdueMetrics, MonoMetrics};
}
