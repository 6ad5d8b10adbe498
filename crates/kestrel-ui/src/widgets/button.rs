use kestrel_engine::coords::Rect;
use kestrel_engine::input::{Key, KeyEvent, KeyState, MouseButton, MouseStatus};
use kestrel_engine::paint::Color;

use crate::event::{EventCtx, UiMessage};
use crate::focus::FocusChange;
use crate::painter::{Painter, TextAlign};
use crate::theme::ThemeColor;
use crate::widget::{WidgetBase, WidgetColors};

/// Overlay that lightens a pressed button.
const PRESSED_OVERLAY: Color = Color::rgba(1.0, 1.0, 1.0, 0.1);

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PushState {
    #[default]
    Normal,
    Down,
}

/// Push button. Goes down on pointer-down or Space-down and completes the
/// click on the matching up event, posting [`UiMessage::ButtonClicked`].
#[derive(Debug, Clone, Default)]
pub struct ButtonPush {
    state: PushState,
}

impl ButtonPush {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> PushState {
        self.state
    }

    pub(crate) fn focus_change(&mut self, change: FocusChange) -> bool {
        matches!(change, FocusChange::First | FocusChange::Last)
    }

    pub(crate) fn mouse_click(&mut self, button: MouseButton, status: MouseStatus, ctx: &mut EventCtx) {
        if button != MouseButton::Left {
            return;
        }
        match status {
            MouseStatus::Down => self.state = PushState::Down,
            MouseStatus::Up => self.clicked(ctx),
            MouseStatus::Drag => {}
        }
    }

    pub(crate) fn key(&mut self, ev: &KeyEvent, ctx: &mut EventCtx) {
        if ev.key != Key::Space || ev.modifiers.any() {
            return;
        }
        match ev.state {
            KeyState::Pressed | KeyState::Repeat => self.state = PushState::Down,
            KeyState::Released => self.clicked(ctx),
        }
    }

    fn clicked(&mut self, ctx: &mut EventCtx) {
        let id = ctx.source();
        ctx.post(UiMessage::ButtonClicked { id });
        self.state = PushState::Normal;
    }

    pub(crate) fn draw(&self, base: &WidgetBase, colors: &WidgetColors, painter: &mut Painter, r: Rect, focused: bool) {
        let text = colors.text(base.is_enabled());
        painter.fill_rect(r, colors.bg);
        if self.state == PushState::Down {
            painter.fill_rect(r, PRESSED_OVERLAY);
        }
        let frame = if focused { painter.role(ThemeColor::FocusBorder) } else { text };
        painter.frame_rect(r, frame);
        painter.aligned_text(text, r, TextAlign::Center, base.caption().cropped());
    }
}
