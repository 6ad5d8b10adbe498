//! Single-line text entry.

use std::borrow::Cow;

use kestrel_engine::coords::{Point, Rect};
use kestrel_engine::host::{Clipboard, ClipboardError};
use kestrel_engine::input::{CursorShape, Key, KeyEvent, Modifiers, MouseButton, MouseStatus};

use crate::cropped::CroppedString;
use crate::event::UiMessage;
use crate::focus::FocusChange;
use crate::painter::{Painter, TextAlign};
use crate::theme::ThemeColor;
use crate::widget::{WidgetBase, WidgetColors};

/// Characters the view jumps by when the caret leaves the visible part.
const SCROLL_STEP: usize = 5;

pub const DEFAULT_MAX_LEN: usize = 1024;

/// Edit-specific state. The text itself is the widget caption.
///
/// Positions (caret, start offset) count characters.
#[derive(Debug, Clone)]
pub struct EditField {
    /// Accepted characters; empty accepts every printable character.
    allowed: String,
    max_len: usize,
    password: bool,
    caret: usize,
    /// Text when focus was last gained, for change detection.
    prev_text: String,
    caret_on: bool,
}

impl Default for EditField {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}

impl EditField {
    pub fn new(max_len: usize) -> Self {
        Self {
            allowed: String::new(),
            max_len,
            password: false,
            caret: 0,
            prev_text: String::new(),
            caret_on: true,
        }
    }

    pub fn allowed_chars(mut self, allowed: impl Into<String>) -> Self {
        self.allowed = allowed.into();
        self
    }

    /// Shows asterisks instead of the text.
    pub fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
    }

    #[inline]
    pub fn allowed(&self) -> &str {
        &self.allowed
    }

    pub fn set_allowed(&mut self, allowed: impl Into<String>) {
        self.allowed = allowed.into();
    }

    #[inline]
    pub fn is_password(&self) -> bool {
        self.password
    }

    pub fn set_password(&mut self, password: bool) {
        self.password = password;
    }

    #[inline]
    pub fn caret(&self) -> usize {
        self.caret
    }

    fn accepts(&self, ch: char) -> bool {
        !ch.is_control() && (self.allowed.is_empty() || self.allowed.contains(ch))
    }

    /// Called once the widget is built: caret at the end, text as baseline.
    pub(crate) fn init(&mut self, base: &WidgetBase) {
        self.caret = base.caption().len();
        self.prev_text = base.caption().full().to_owned();
    }

    // ── text helpers ──────────────────────────────────────────────────────

    fn masked<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.password {
            Cow::Owned("*".repeat(s.chars().count()))
        } else {
            Cow::Borrowed(s)
        }
    }

    /// Pixel offset of the caret from the left edge of the visible text.
    fn caret_x(&self, caption: &CroppedString) -> i32 {
        let Some(m) = caption.metrics() else { return 0 };
        let start = caption.start_pos();
        if self.caret <= start {
            return 0;
        }
        let visible: String = caption.full().chars().skip(start).take(self.caret - start).collect();
        m.text_width(&self.masked(&visible))
    }

    /// Shifts the start offset in steps until the caret is inside the
    /// visible width with at least one character of margin.
    fn scroll_to_caret(&self, caption: &mut CroppedString) {
        let (Some(width), Some(cw)) = (caption.width(), caption.metrics().map(|m| m.char_width())) else {
            return;
        };
        let len = caption.len();
        let mut x = self.caret_x(caption);
        if x >= width - cw {
            while x >= width - cw && caption.start_pos() + 1 < len {
                caption.set_start_pos(caption.start_pos() + SCROLL_STEP);
                x = self.caret_x(caption);
            }
        } else if x <= cw {
            while x <= cw && caption.start_pos() > 0 {
                caption.set_start_pos(caption.start_pos().saturating_sub(SCROLL_STEP));
                x = self.caret_x(caption);
            }
        }
    }

    fn insert_str(&mut self, caption: &mut CroppedString, s: &str) {
        self.caret = self.caret.min(caption.len());
        caption.insert_str(self.caret, s);
        self.caret += s.chars().count();
    }

    // ── clipboard ─────────────────────────────────────────────────────────

    /// Copies the whole text.
    pub(crate) fn copy(&self, base: &WidgetBase, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard.set_text(base.caption().full())
    }

    pub(crate) fn cut(&mut self, base: &mut WidgetBase, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        self.copy(base, clipboard)?;
        base.caption_mut().clear();
        self.caret = 0;
        Ok(())
    }

    /// Inserts clipboard text at the caret, as much as fits.
    pub(crate) fn paste(&mut self, base: &mut WidgetBase, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        let text = clipboard.get_text()?;
        let room = self.max_len.saturating_sub(base.caption().len());
        let clip: String = text.chars().take(room).collect();
        if !clip.is_empty() {
            self.insert_str(base.caption_mut(), &clip);
        }
        Ok(())
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub(crate) fn key(&mut self, base: &mut WidgetBase, ev: &KeyEvent, clipboard: &mut dyn Clipboard) {
        let caption = base.caption_mut();
        let len = caption.len();
        self.caret = self.caret.min(len);

        if ev.state.is_down() {
            let handled = match ev.key {
                Key::Backspace => {
                    if self.caret > 0 {
                        self.caret -= 1;
                        caption.remove(self.caret);
                    }
                    true
                }
                Key::Delete => {
                    caption.remove(self.caret);
                    true
                }
                Key::Clear => {
                    caption.clear();
                    self.caret = 0;
                    true
                }
                Key::ArrowLeft => {
                    self.caret = self.caret.saturating_sub(1);
                    true
                }
                Key::ArrowRight => {
                    self.caret = (self.caret + 1).min(len);
                    true
                }
                Key::Home => {
                    self.caret = 0;
                    true
                }
                Key::End => {
                    self.caret = len;
                    true
                }
                _ => false,
            };
            if handled {
                self.scroll_to_caret(caption);
                return;
            }
        }

        if !ev.state.is_down() {
            return;
        }

        let ch = ev.ch.map(|c| c.to_ascii_lowercase());
        let result = if ev.modifiers.only(Modifiers::CTRL) {
            match (ev.key, ch) {
                (Key::Insert, _) | (Key::Char, Some('c')) => Some(self.copy(base, clipboard)),
                (Key::Char, Some('x')) => Some(self.cut(base, clipboard)),
                (Key::Char, Some('v')) => Some(self.paste(base, clipboard)),
                _ => None,
            }
        } else if ev.modifiers.only(Modifiers::SHIFT) && ev.key == Key::Insert {
            Some(self.paste(base, clipboard))
        } else {
            None
        };
        if let Some(result) = result {
            if let Err(e) = result {
                log::warn!("edit field {}: clipboard failed: {e}", base.id());
            }
            self.scroll_to_caret(base.caption_mut());
            return;
        }

        if ev.modifiers.ctrl || ev.modifiers.alt {
            return;
        }
        if let Some(c) = ev.ch {
            if self.accepts(c) && base.caption().len() < self.max_len {
                let caption = base.caption_mut();
                self.caret = self.caret.min(caption.len());
                caption.insert(self.caret, c);
                self.caret += 1;
                self.scroll_to_caret(caption);
            }
        }
    }

    /// Pointer-down places the caret before the character under the pointer.
    pub(crate) fn mouse_click(&mut self, base: &mut WidgetBase, p: Point, button: MouseButton, status: MouseStatus) {
        if button != MouseButton::Left || status != MouseStatus::Down {
            return;
        }
        let caption = base.caption();
        let Some(m) = caption.metrics() else { return };
        let shown = self.masked(caption.cropped());
        let ends: Vec<usize> = shown.char_indices().map(|(b, _)| b).chain([shown.len()]).collect();
        let pos = ends
            .iter()
            .position(|&end| m.text_width(&shown[..end]) > p.x)
            .unwrap_or(ends.len());
        self.caret = caption.start_pos() + pos.saturating_sub(1);
    }

    /// Negative clicks scroll towards the start, positive towards the end
    /// while text is hidden on the right.
    pub(crate) fn mouse_wheel(&mut self, base: &mut WidgetBase, clicks: i32) {
        let caption = base.caption_mut();
        let start = caption.start_pos();
        if clicks < 0 {
            caption.set_start_pos(start.saturating_sub(clicks.unsigned_abs() as usize));
        } else if caption.chars_cropped_right() > 0 {
            caption.set_start_pos(start + clicks as usize);
        }
    }

    pub(crate) fn focus_change(&mut self, base: &WidgetBase, change: FocusChange, out: &mut Vec<UiMessage>) -> bool {
        let gains = matches!(change, FocusChange::First | FocusChange::Last);
        if !gains && base.caption().full() != self.prev_text {
            self.prev_text = base.caption().full().to_owned();
            out.push(UiMessage::EditFieldChanged { id: base.id(), text: self.prev_text.clone() });
        }
        gains
    }

    pub(crate) fn timer(&mut self) {
        self.caret_on = !self.caret_on;
    }

    pub(crate) fn cursor(&self) -> CursorShape {
        CursorShape::IBeam
    }

    pub(crate) fn draw(&self, base: &WidgetBase, colors: &WidgetColors, painter: &mut Painter, r: Rect, focused: bool) {
        painter.fill_rect(r, colors.bg);
        let caption = base.caption();
        let shown = self.masked(caption.cropped());
        painter.aligned_text(colors.text(base.is_enabled()), r, TextAlign::Left, &shown);

        if focused {
            if self.caret_on {
                let x = r.left() + self.caret_x(caption);
                let c = painter.role(ThemeColor::Selection);
                painter.line(Point::new(x, r.top() - 1), Point::new(x, r.bottom() + 3), c, 1.0);
            }
            let c = painter.role(ThemeColor::FocusBorder);
            painter.frame_rect(r, c);
        }
    }
}

// ── EditFieldMut ──────────────────────────────────────────────────────────

/// Mutable view of an attached edit field: its widget base (holding the
/// text) together with its edit state.
pub struct EditFieldMut<'a> {
    base: &'a mut WidgetBase,
    field: &'a mut EditField,
}

impl<'a> EditFieldMut<'a> {
    pub(crate) fn new(base: &'a mut WidgetBase, field: &'a mut EditField) -> Self {
        Self { base, field }
    }

    pub fn text(&self) -> &str {
        self.base.caption().full()
    }

    /// Replaces the text and moves the caret to its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.base.caption_mut().set(text);
        self.field.caret = self.base.caption().len();
        self.field.scroll_to_caret(self.base.caption_mut());
    }

    pub fn set_int(&mut self, v: i64) {
        self.set_text(v.to_string());
    }

    /// Formats with `precision` decimal places.
    pub fn set_float(&mut self, v: f64, precision: usize) {
        self.set_text(format!("{v:.precision$}"));
    }

    pub fn int(&self) -> Option<i64> {
        self.text().trim().parse().ok()
    }

    pub fn float(&self) -> Option<f64> {
        self.text().trim().parse().ok()
    }

    pub fn caret(&self) -> usize {
        self.field.caret
    }

    pub fn set_caret(&mut self, pos: usize) {
        self.field.caret = pos.min(self.base.caption().len());
        self.field.scroll_to_caret(self.base.caption_mut());
    }

    pub fn field(&self) -> &EditField {
        &*self.field
    }

    pub fn field_mut(&mut self) -> &mut EditField {
        &mut *self.field
    }

    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        self.field.copy(&*self.base, clipboard)
    }

    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        self.field.cut(&mut *self.base, clipboard)
    }

    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        self.field.paste(&mut *self.base, clipboard)?;
        self.field.scroll_to_caret(self.base.caption_mut());
        Ok(())
    }
}
