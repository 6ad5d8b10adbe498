use kestrel_engine::host::Clipboard;

use crate::ident::{RefCon, WidgetId};

/// Notifications widgets post to their container.
///
/// The container queues them; the application collects them with
/// [`crate::container::Container::drain_messages`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    /// A push button completed a click, or the default button was confirmed.
    ButtonClicked { id: WidgetId },
    /// A button array element was clicked. `selected` is its state afterwards.
    ButtonArrayClicked { id: WidgetId, elem: RefCon, selected: bool },
    /// The user selected a list row.
    ListSelectionChanged { id: WidgetId, row: RefCon },
    /// An edit field lost focus with text different from when it gained it.
    EditFieldChanged { id: WidgetId, text: String },
}

impl UiMessage {
    /// The widget that posted the message.
    pub fn source(&self) -> WidgetId {
        match self {
            UiMessage::ButtonClicked { id }
            | UiMessage::ButtonArrayClicked { id, .. }
            | UiMessage::ListSelectionChanged { id, .. }
            | UiMessage::EditFieldChanged { id, .. } => *id,
        }
    }
}

/// Per-dispatch context handed to widget input handlers.
///
/// Carries the handling widget's id, the container's message queue and the
/// clipboard. Built fresh for every dispatch, never stored.
pub struct EventCtx<'a> {
    source: WidgetId,
    messages: &'a mut Vec<UiMessage>,
    clipboard: &'a mut dyn Clipboard,
}

impl<'a> EventCtx<'a> {
    pub fn new(source: WidgetId, messages: &'a mut Vec<UiMessage>, clipboard: &'a mut dyn Clipboard) -> Self {
        Self { source, messages, clipboard }
    }

    #[inline]
    pub fn source(&self) -> WidgetId {
        self.source
    }

    pub fn post(&mut self, msg: UiMessage) {
        log::debug!("post {msg:?}");
        self.messages.push(msg);
    }

    #[inline]
    pub fn clipboard(&mut self) -> &mut dyn Clipboard {
        &mut *self.clipboard
    }
}
