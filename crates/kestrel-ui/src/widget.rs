//! Widget base record and the closed set of widget kinds.
//!
//! Every attached widget is a [`Widget`]: a [`WidgetBase`] holding what all
//! widgets share (id, visibility, enabled flag, caption, colors, bounds) plus
//! a [`WidgetKind`] holding the kind-specific state. The container calls the
//! dispatch methods here; each forwards to the kind's handler and passes the
//! base alongside it.

use kestrel_engine::coords::{Point, Rect};
use kestrel_engine::input::{CursorShape, KeyEvent, MouseButton, MouseStatus};
use kestrel_engine::paint::Color;

use crate::cropped::CroppedString;
use crate::event::{EventCtx, UiMessage};
use crate::focus::{FocusChange, Focusable};
use crate::ident::WidgetId;
use crate::list::ListBox;
use crate::metrics::SharedMetrics;
use crate::painter::Painter;
use crate::theme::{Theme, ThemeColor};
use crate::widgets::{ArrayStyle, ButtonArray, ButtonPush, EditField, EditFieldMut, Label, Line, Orientation};

// ── WidgetBase ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WidgetBase {
    id: WidgetId,
    visible: bool,
    enabled: bool,
    caption: CroppedString,
    bg: Option<Color>,
    fg: Option<Color>,
    fg_disabled: Option<Color>,
    /// Resolved rectangle relative to the layout origin; `None` while the
    /// placement does not resolve.
    bounds: Option<Rect>,
}

impl WidgetBase {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            id: WidgetId::CONTAINER,
            visible: true,
            enabled: true,
            caption: CroppedString::new(caption),
            bg: None,
            fg: None,
            fg_disabled: None,
            bounds: None,
        }
    }

    pub(crate) fn attach(&mut self, id: WidgetId, metrics: SharedMetrics) {
        self.id = id;
        self.caption.bind_metrics(metrics);
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn caption(&self) -> &CroppedString {
        &self.caption
    }

    /// Replaces the caption text; the crop width is kept.
    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.caption.set(text);
    }

    pub(crate) fn caption_mut(&mut self) -> &mut CroppedString {
        &mut self.caption
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Explicit colors; `None` means "use the theme role for this kind".
    pub fn colors(&self) -> (Option<Color>, Option<Color>, Option<Color>) {
        (self.bg, self.fg, self.fg_disabled)
    }

    pub fn set_background(&mut self, color: Color) {
        self.bg = Some(color);
    }

    pub fn set_foreground(&mut self, enabled: Color, disabled: Color) {
        self.fg = Some(enabled);
        self.fg_disabled = Some(disabled);
    }

    /// Sets the resolved rectangle; the caption is cropped to its width.
    pub(crate) fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
        self.caption.set_width(bounds.map_or(0, |r| r.width()));
    }

    #[inline]
    pub(crate) fn accepts_input(&self) -> bool {
        self.visible && self.enabled
    }
}

/// A widget's colors after falling back to the theme.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WidgetColors {
    pub bg: Color,
    pub fg: Color,
    pub fg_disabled: Color,
}

impl WidgetColors {
    #[inline]
    pub fn text(&self, enabled: bool) -> Color {
        if enabled { self.fg } else { self.fg_disabled }
    }
}

// ── WidgetKind ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum WidgetKind {
    Label(Label),
    Line(Line),
    ButtonPush(ButtonPush),
    ButtonArray(ButtonArray),
    EditField(EditField),
    ListBox(ListBox),
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Label(_) => "label",
            WidgetKind::Line(_) => "line",
            WidgetKind::ButtonPush(_) => "push button",
            WidgetKind::ButtonArray(_) => "button array",
            WidgetKind::EditField(_) => "edit field",
            WidgetKind::ListBox(_) => "list box",
        }
    }

    /// Theme roles for background, foreground and disabled foreground.
    fn roles(&self) -> (ThemeColor, ThemeColor, ThemeColor) {
        match self {
            WidgetKind::Line(_) => (ThemeColor::StdBg, ThemeColor::Line, ThemeColor::StdFgDisabled),
            WidgetKind::ButtonPush(_) => (ThemeColor::ButtonBg, ThemeColor::ButtonFg, ThemeColor::StdFgDisabled),
            WidgetKind::EditField(_) => (ThemeColor::EditBg, ThemeColor::EditFg, ThemeColor::StdFgDisabled),
            WidgetKind::Label(_) | WidgetKind::ButtonArray(_) | WidgetKind::ListBox(_) => {
                (ThemeColor::StdBg, ThemeColor::StdFg, ThemeColor::StdFgDisabled)
            }
        }
    }
}

/// What the container hands every widget when attaching it.
#[derive(Debug, Clone)]
pub struct WidgetEnv {
    pub metrics: SharedMetrics,
    pub list_line_height_pct: u32,
    pub button_line_height: i32,
}

// ── Widget ────────────────────────────────────────────────────────────────

/// A widget ready to be attached to a container.
///
/// ```rust,ignore
/// let ok = Widget::button("OK").enabled(false);
/// let name = Widget::edit_field("", EditField::new(80));
/// ```
#[derive(Debug, Clone)]
pub struct Widget {
    base: WidgetBase,
    kind: WidgetKind,
}

impl Widget {
    pub fn new(caption: impl Into<String>, kind: WidgetKind) -> Self {
        let mut w = Self { base: WidgetBase::new(caption), kind };
        if let WidgetKind::EditField(f) = &mut w.kind {
            f.init(&w.base);
        }
        w
    }

    pub fn label(caption: impl Into<String>) -> Self {
        Self::new(caption, WidgetKind::Label(Label::new()))
    }

    pub fn bold_label(caption: impl Into<String>) -> Self {
        Self::new(caption, WidgetKind::Label(Label::new().bold(true)))
    }

    pub fn line() -> Self {
        Self::new("", WidgetKind::Line(Line::new()))
    }

    pub fn button(caption: impl Into<String>) -> Self {
        Self::new(caption, WidgetKind::ButtonPush(ButtonPush::new()))
    }

    pub fn button_array(style: ArrayStyle, orientation: Orientation) -> Self {
        Self::new("", WidgetKind::ButtonArray(ButtonArray::new(style, orientation)))
    }

    pub fn edit_field(text: impl Into<String>, field: EditField) -> Self {
        Self::new(text, WidgetKind::EditField(field))
    }

    pub fn list_box(list: ListBox) -> Self {
        Self::new("", WidgetKind::ListBox(list))
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn visible(mut self, visible: bool) -> Self {
        self.base.visible = visible;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.base.enabled = enabled;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.base.set_background(color);
        self
    }

    pub fn foreground(mut self, enabled: Color, disabled: Color) -> Self {
        self.base.set_foreground(enabled, disabled);
        self
    }

    // ── access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.base.id
    }

    #[inline]
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    #[inline]
    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        match &mut self.kind {
            WidgetKind::EditField(f) => EditFieldMut::new(&mut self.base, f).set_text(text),
            _ => self.base.set_caption(text),
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match &mut self.kind {
            WidgetKind::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_button_push(&self) -> Option<&ButtonPush> {
        match &self.kind {
            WidgetKind::ButtonPush(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_button_array(&self) -> Option<&ButtonArray> {
        match &self.kind {
            WidgetKind::ButtonArray(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_button_array_mut(&mut self) -> Option<&mut ButtonArray> {
        match &mut self.kind {
            WidgetKind::ButtonArray(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_list_box(&self) -> Option<&ListBox> {
        match &self.kind {
            WidgetKind::ListBox(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_box_mut(&mut self) -> Option<&mut ListBox> {
        match &mut self.kind {
            WidgetKind::ListBox(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_edit_field(&self) -> Option<&EditField> {
        match &self.kind {
            WidgetKind::EditField(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_edit_field_mut(&mut self) -> Option<EditFieldMut<'_>> {
        match &mut self.kind {
            WidgetKind::EditField(f) => Some(EditFieldMut::new(&mut self.base, f)),
            _ => None,
        }
    }

    // ── container hooks ───────────────────────────────────────────────────

    pub(crate) fn attach(&mut self, id: WidgetId, env: &WidgetEnv) {
        self.base.attach(id, env.metrics.clone());
        match &mut self.kind {
            WidgetKind::ButtonArray(a) => a.bind(env.metrics.clone(), env.button_line_height),
            WidgetKind::ListBox(l) => l.bind(env.metrics.clone(), env.list_line_height_pct),
            _ => {}
        }
    }

    pub(crate) fn set_geometry(&mut self, bounds: Option<Rect>) {
        self.base.set_bounds(bounds);
        match &mut self.kind {
            WidgetKind::ButtonArray(a) => a.set_geometry(bounds),
            WidgetKind::ListBox(l) => l.set_geometry(bounds),
            _ => {}
        }
    }

    pub(crate) fn resolve_colors(&self, theme: &Theme) -> WidgetColors {
        let (bg, fg, dis) = self.kind.roles();
        WidgetColors {
            bg: self.base.bg.unwrap_or_else(|| theme.color(bg)),
            fg: self.base.fg.unwrap_or_else(|| theme.color(fg)),
            fg_disabled: self.base.fg_disabled.unwrap_or_else(|| theme.color(dis)),
        }
    }

    /// Draws into `rect`, the bounds translated to host coordinates.
    pub(crate) fn draw(&self, painter: &mut Painter, rect: Rect, focused: bool) {
        let colors = self.resolve_colors(painter.theme());
        let base = &self.base;
        match &self.kind {
            WidgetKind::Label(l) => l.draw(base, &colors, painter, rect),
            WidgetKind::Line(l) => l.draw(&colors, painter, rect),
            WidgetKind::ButtonPush(b) => b.draw(base, &colors, painter, rect, focused),
            WidgetKind::ButtonArray(a) => a.draw(base, &colors, painter, rect),
            WidgetKind::EditField(f) => f.draw(base, &colors, painter, rect, focused),
            WidgetKind::ListBox(l) => l.draw(base, &colors, painter, rect, focused),
        }
    }

    /// `p` is relative to the widget's top-left corner.
    pub(crate) fn mouse_click(&mut self, p: Point, button: MouseButton, status: MouseStatus, ctx: &mut EventCtx) {
        match &mut self.kind {
            WidgetKind::ButtonPush(b) => b.mouse_click(button, status, ctx),
            WidgetKind::ButtonArray(a) => a.mouse_click(p, button, status, ctx),
            WidgetKind::EditField(f) => f.mouse_click(&mut self.base, p, button, status),
            WidgetKind::ListBox(l) => l.mouse_click(p, button, status, ctx),
            WidgetKind::Label(_) | WidgetKind::Line(_) => {}
        }
    }

    pub(crate) fn mouse_wheel(&mut self, clicks: i32) {
        match &mut self.kind {
            WidgetKind::EditField(f) => f.mouse_wheel(&mut self.base, clicks),
            WidgetKind::ListBox(l) => l.scroll_by(clicks),
            _ => {}
        }
    }

    pub(crate) fn key(&mut self, ev: &KeyEvent, ctx: &mut EventCtx) {
        match &mut self.kind {
            WidgetKind::ButtonPush(b) => b.key(ev, ctx),
            WidgetKind::ButtonArray(a) => a.key(ev, ctx),
            WidgetKind::EditField(f) => f.key(&mut self.base, ev, ctx.clipboard()),
            WidgetKind::ListBox(l) => l.key(ev, ctx),
            WidgetKind::Label(_) | WidgetKind::Line(_) => {}
        }
    }

    pub(crate) fn cursor(&self) -> CursorShape {
        match &self.kind {
            WidgetKind::EditField(f) => f.cursor(),
            _ => CursorShape::Default,
        }
    }

    pub(crate) fn timer(&mut self) {
        if let WidgetKind::EditField(f) = &mut self.kind {
            f.timer();
        }
    }
}

impl Focusable for Widget {
    fn can_focus(&self) -> bool {
        self.base.accepts_input()
    }

    fn focus_change(&mut self, change: FocusChange, out: &mut Vec<UiMessage>) -> bool {
        match &mut self.kind {
            WidgetKind::ButtonPush(b) => b.focus_change(change),
            WidgetKind::ButtonArray(a) => a.focus_change(change),
            WidgetKind::EditField(f) => f.focus_change(&self.base, change, out),
            WidgetKind::ListBox(l) => l.focus_change(change),
            WidgetKind::Label(_) | WidgetKind::Line(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_engine::paint::HostColor;
    use kestrel_engine::text::MonoMetrics;

    fn env() -> WidgetEnv {
        WidgetEnv {
            metrics: SharedMetrics::new(MonoMetrics::new(6, 10)),
            list_line_height_pct: 200,
            button_line_height: 15,
        }
    }

    #[test]
    fn colors_fall_back_to_kind_roles() {
        let theme = Theme::default();
        let button = Widget::button("OK").resolve_colors(&theme);
        assert_eq!(button.bg, theme.color(ThemeColor::ButtonBg));
        let line = Widget::line().resolve_colors(&theme);
        assert_eq!(line.fg, theme.color(ThemeColor::Line));

        let custom = Widget::label("x").background(Color::RED).resolve_colors(&theme);
        assert_eq!(custom.bg, Color::RED);
        assert_eq!(custom.fg, Color::Host(HostColor::MenuText));
    }

    #[test]
    fn geometry_crops_caption_to_width() {
        let mut w = Widget::label("Standard Text");
        w.attach(WidgetId(1), &env());
        w.set_geometry(Some(Rect::new(0, 0, 30, -15)));
        assert_eq!(w.base().caption().cropped(), "Stand");
        w.set_geometry(None);
        assert_eq!(w.base().caption().cropped(), "");
        assert_eq!(w.base().bounds(), None);
    }

    #[test]
    fn labels_and_lines_never_take_focus() {
        let mut out = Vec::new();
        assert!(!Widget::label("x").focus_change(FocusChange::First, &mut out));
        assert!(!Widget::line().focus_change(FocusChange::Last, &mut out));
        assert!(Widget::button("x").focus_change(FocusChange::First, &mut out));
    }

    #[test]
    fn disabled_or_hidden_widgets_cannot_focus() {
        assert!(!Widget::button("x").enabled(false).can_focus());
        assert!(!Widget::button("x").visible(false).can_focus());
    }

    #[test]
    fn set_caption_moves_edit_caret_to_end() {
        let mut w = Widget::edit_field("ab", EditField::default());
        w.attach(WidgetId(2), &env());
        w.set_caption("hello");
        let f = w.as_edit_field_mut().expect("edit field");
        assert_eq!(f.caret(), 5);
        assert_eq!(f.text(), "hello");
    }
}
