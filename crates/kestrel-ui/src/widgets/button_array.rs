//! Groups of check boxes or radio buttons.
//!
//! A [`ButtonArray`] lays out its [`ButtonElem`]s in a row or a column,
//! keeps an internal focus element that arrow keys move without ever
//! leaving the array, and tracks the element pressed by the pointer until
//! the pointer is released.

use kestrel_engine::coords::{Point, Rect};
use kestrel_engine::input::{Key, KeyEvent, KeyState, MouseButton, MouseStatus};
use kestrel_engine::paint::Color;

use crate::cropped::CroppedString;
use crate::event::{EventCtx, UiMessage};
use crate::focus::FocusChange;
use crate::ident::RefCon;
use crate::metrics::SharedMetrics;
use crate::painter::{checkbox_square, Painter, TextAlign};
use crate::theme::ThemeColor;
use crate::widget::{WidgetBase, WidgetColors};

/// Gap between the glyph and the caption.
const GLYPH_GAP: i32 = 3;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ArrayStyle {
    /// Exactly one element selected at a time.
    #[default]
    Radio,
    /// Every element toggles independently.
    CheckBoxes,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

// ── ButtonElem ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ElemState {
    #[default]
    Normal,
    Down,
    Selected,
    DownSelected,
}

/// One check box or radio button inside a [`ButtonArray`].
#[derive(Debug, Clone)]
pub struct ButtonElem {
    refcon: RefCon,
    caption: CroppedString,
    state: ElemState,
    /// Position relative to the array's top-left corner.
    rect: Rect,
}

impl ButtonElem {
    pub fn new(refcon: RefCon, caption: impl Into<String>) -> Self {
        Self {
            refcon,
            caption: CroppedString::new(caption),
            state: ElemState::Normal,
            rect: Rect::default(),
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.set_selected(selected);
        self
    }

    #[inline]
    pub fn refcon(&self) -> RefCon {
        self.refcon
    }

    #[inline]
    pub fn caption(&self) -> &CroppedString {
        &self.caption
    }

    #[inline]
    pub fn state(&self) -> ElemState {
        self.state
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_selected(&self) -> bool {
        matches!(self.state, ElemState::Selected | ElemState::DownSelected)
    }

    pub fn is_down(&self) -> bool {
        matches!(self.state, ElemState::Down | ElemState::DownSelected)
    }

    /// Changes the selected bit, keeping the down bit.
    pub fn set_selected(&mut self, selected: bool) {
        self.state = match (selected, self.is_down()) {
            (true, true) => ElemState::DownSelected,
            (true, false) => ElemState::Selected,
            (false, true) => ElemState::Down,
            (false, false) => ElemState::Normal,
        };
    }

    /// Changes the down bit, keeping the selected bit.
    pub fn set_down(&mut self, down: bool) {
        self.state = match (down, self.is_selected()) {
            (true, true) => ElemState::DownSelected,
            (true, false) => ElemState::Down,
            (false, true) => ElemState::Selected,
            (false, false) => ElemState::Normal,
        };
    }

    fn set_rect(&mut self, r: Rect) {
        self.rect = r;
        self.caption.set_width((r.width() - r.height() - GLYPH_GAP).max(0));
    }

    fn draw(&self, painter: &mut Painter, array: Rect, style: ArrayStyle, color: Color, focus: bool) {
        let dr = self.rect + array.tl();
        if focus && array.contains_rect(&dr) {
            let c = painter.role(ThemeColor::FocusBorder);
            painter.frame_rect(dr, c);
        }

        let mut text = dr;
        text.set_left(dr.left() + dr.height() + GLYPH_GAP);
        if array.contains_rect(&text) {
            painter.aligned_text(color, text, TextAlign::Left, self.caption.cropped());
        }

        let glyph = checkbox_square(self.rect) + array.tl();
        if array.contains_rect(&glyph) {
            match style {
                ArrayStyle::CheckBoxes => painter.check_box(glyph, color, self.is_selected(), self.is_down()),
                ArrayStyle::Radio => painter.radio_button(glyph, color, self.is_selected(), self.is_down()),
            }
        }
    }
}

// ── ButtonArray ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ButtonArray {
    style: ArrayStyle,
    orientation: Orientation,
    elems: Vec<ButtonElem>,
    /// Element with keyboard focus inside the array.
    focus: Option<usize>,
    /// Element pressed by the pointer, until pointer-up.
    capture: Option<usize>,
    line_height: i32,
    /// Last geometry, relative to the container's layout origin.
    geometry: Option<Rect>,
    metrics: Option<SharedMetrics>,
}

impl Default for ButtonArray {
    fn default() -> Self {
        Self::new(ArrayStyle::default(), Orientation::default())
    }
}

impl ButtonArray {
    pub fn new(style: ArrayStyle, orientation: Orientation) -> Self {
        Self {
            style,
            orientation,
            elems: Vec::new(),
            focus: None,
            capture: None,
            line_height: 15,
            geometry: None,
            metrics: None,
        }
    }

    /// Builder form of [`ButtonArray::add_button`]; refused elements are dropped.
    pub fn with(mut self, elem: ButtonElem) -> Self {
        self.add_button(elem);
        self
    }

    #[inline]
    pub fn style(&self) -> ArrayStyle {
        self.style
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn elems(&self) -> &[ButtonElem] {
        &self.elems
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Index of the element with keyboard focus.
    #[inline]
    pub fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    /// Appends an element. Refuses a null or duplicate refcon.
    pub fn add_button(&mut self, mut elem: ButtonElem) -> bool {
        if elem.refcon.is_null() || self.index_of(elem.refcon).is_some() {
            log::warn!("button array: refused element {} (null or duplicate)", elem.refcon);
            return false;
        }
        if let Some(m) = &self.metrics {
            elem.caption.bind_metrics(m.clone());
        }
        self.elems.push(elem);
        if self.geometry.is_some() {
            self.set_geometry(self.geometry);
        }
        true
    }

    pub fn find(&self, refcon: RefCon) -> Option<&ButtonElem> {
        self.index_of(refcon).map(|i| &self.elems[i])
    }

    pub fn index_of(&self, refcon: RefCon) -> Option<usize> {
        if refcon.is_null() {
            return None;
        }
        self.elems.iter().position(|e| e.refcon == refcon)
    }

    pub fn get(&self, idx: usize) -> Option<&ButtonElem> {
        self.elems.get(idx)
    }

    /// First selected element.
    pub fn selected(&self) -> Option<&ButtonElem> {
        self.elems.iter().find(|e| e.is_selected())
    }

    /// All selected elements, in order.
    pub fn selected_all(&self) -> impl Iterator<Item = &ButtonElem> {
        self.elems.iter().filter(|e| e.is_selected())
    }

    /// Clicks the element with `refcon`, as the user would. Radio arrays
    /// select it; check box arrays toggle it.
    pub fn set_selected(&mut self, refcon: RefCon, ctx: &mut EventCtx) -> bool {
        match self.index_of(refcon) {
            Some(i) => {
                self.clicked(i, ctx);
                true
            }
            None => false,
        }
    }

    /// Sets the selected bit directly, without notification. For radio
    /// arrays selecting one element clears the others.
    pub fn select(&mut self, refcon: RefCon, selected: bool) -> bool {
        let Some(i) = self.index_of(refcon) else { return false };
        if self.style == ArrayStyle::Radio && selected {
            for e in &mut self.elems {
                e.set_selected(false);
            }
        }
        self.elems[i].set_selected(selected);
        true
    }

    pub(crate) fn bind(&mut self, metrics: SharedMetrics, line_height: i32) {
        for e in &mut self.elems {
            e.caption.bind_metrics(metrics.clone());
        }
        self.metrics = Some(metrics);
        self.line_height = line_height.max(1);
    }

    pub(crate) fn set_geometry(&mut self, r: Option<Rect>) {
        self.geometry = r;
        let Some(r) = r else { return };

        let w = r.width();
        let n = self.elems.len() as i32;
        let step_x = match self.orientation {
            Orientation::Horizontal if n > 1 => w / n,
            _ => w,
        };
        let mut btn = Rect::new(0, 0, step_x, -self.line_height);
        for e in &mut self.elems {
            e.set_rect(btn);
            match self.orientation {
                Orientation::Vertical => btn -= Point::new(0, self.line_height),
                Orientation::Horizontal => btn += Point::new(step_x, 0),
            }
        }
    }

    fn elem_at(&self, p: Point) -> Option<usize> {
        self.elems.iter().position(|e| e.rect.contains(p))
    }

    fn clicked(&mut self, idx: usize, ctx: &mut EventCtx) {
        match self.style {
            ArrayStyle::CheckBoxes => {
                let sel = self.elems[idx].is_selected();
                self.elems[idx].set_selected(!sel);
            }
            ArrayStyle::Radio => {
                for (i, e) in self.elems.iter_mut().enumerate() {
                    e.set_selected(i == idx);
                }
            }
        }
        let elem = &self.elems[idx];
        let id = ctx.source();
        ctx.post(UiMessage::ButtonArrayClicked { id, elem: elem.refcon, selected: elem.is_selected() });
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub(crate) fn focus_change(&mut self, change: FocusChange) -> bool {
        let n = self.elems.len();
        if n == 0 {
            return false;
        }
        match change {
            FocusChange::First => self.focus = Some(0),
            FocusChange::Next => self.focus = self.focus.map(|i| i + 1).filter(|&i| i < n),
            FocusChange::Last | FocusChange::Prev => {
                let from = if change == FocusChange::Last { n } else { self.focus.unwrap_or(n) };
                self.focus = from.checked_sub(1);
            }
            FocusChange::Lose => self.focus = None,
        }
        self.focus.is_some()
    }

    pub(crate) fn mouse_click(&mut self, p: Point, button: MouseButton, status: MouseStatus, ctx: &mut EventCtx) {
        if button != MouseButton::Left {
            return;
        }
        if status == MouseStatus::Down {
            self.capture = self.elem_at(p);
            if self.capture.is_some() {
                self.focus = self.capture;
            }
        }
        let Some(idx) = self.capture else { return };

        let inside = self.elems[idx].rect.contains(p);
        match status {
            MouseStatus::Down => self.elems[idx].set_down(true),
            MouseStatus::Drag => self.elems[idx].set_down(inside),
            MouseStatus::Up => {
                self.elems[idx].set_down(false);
                self.capture = None;
                if inside {
                    self.clicked(idx, ctx);
                }
            }
        }
    }

    pub(crate) fn key(&mut self, ev: &KeyEvent, ctx: &mut EventCtx) {
        match ev.key {
            Key::Space => {
                let Some(idx) = self.focus else { return };
                if ev.modifiers.any() {
                    return;
                }
                if ev.state == KeyState::Released {
                    self.elems[idx].set_down(false);
                    self.clicked(idx, ctx);
                } else {
                    self.elems[idx].set_down(true);
                }
            }
            Key::ArrowLeft | Key::ArrowUp if ev.state.is_down() => {
                if !self.focus_change(FocusChange::Prev) && !self.elems.is_empty() {
                    self.focus = Some(0);
                }
            }
            Key::ArrowRight | Key::ArrowDown if ev.state.is_down() => {
                if !self.focus_change(FocusChange::Next) && !self.elems.is_empty() {
                    self.focus = Some(self.elems.len() - 1);
                }
            }
            _ => {}
        }
    }

    pub(crate) fn draw(&self, base: &WidgetBase, colors: &WidgetColors, painter: &mut Painter, r: Rect) {
        let color = colors.text(base.is_enabled());
        for (i, e) in self.elems.iter().enumerate() {
            e.draw(painter, r, self.style, color, self.focus == Some(i));
        }
    }
}
