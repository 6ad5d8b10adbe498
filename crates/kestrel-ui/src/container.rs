//! The top-level window.
//!
//! A [`Container`] owns its widgets in attachment order, lays them out,
//! draws them, and routes every host event: pointer events go through the
//! hit test and the capture target, keys go to the focus widget after the
//! container's own shortcuts (Tab, Escape, Return/Enter) had their turn.
//!
//! Host-facing coordinates are absolute and y-up. Widget rectangles are
//! relative to the usable area, which is the container rectangle inset by
//! the frame thickness.

use kestrel_engine::coords::{Point, Rect};
use kestrel_engine::host::{Clipboard, MemoryClipboard, ManualTimer, Surface, TimerHost};
use kestrel_engine::input::{CursorShape, Key, KeyEvent, KeyState, Modifiers, MouseButton, MouseStatus};
use kestrel_engine::scene::Canvas;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::event::{EventCtx, UiMessage};
use crate::focus::{FocusChange, FocusRouter, Focusable, Traverse};
use crate::ident::{RefCon, WidgetId};
use crate::layout;
use crate::list::ListBox;
use crate::metrics::SharedMetrics;
use crate::painter::Painter;
use crate::placement::Placement;
use crate::theme::{Theme, ThemeColor};
use crate::widget::{Widget, WidgetBase, WidgetEnv, WidgetKind};
use crate::widgets::{ButtonArray, EditFieldMut, Label};

/// Timer intervals at or below this count as "off".
const TIMER_EPSILON: f32 = 0.01;

/// A widget together with its placement.
#[derive(Debug, Clone)]
struct Slot {
    placement: Placement,
    widget: Widget,
}

impl Focusable for Slot {
    fn can_focus(&self) -> bool {
        self.widget.can_focus()
    }

    fn focus_change(&mut self, change: FocusChange, out: &mut Vec<UiMessage>) -> bool {
        self.widget.focus_change(change, out)
    }
}

pub struct Container {
    base: WidgetBase,
    surface: Box<dyn Surface>,
    timer: Box<dyn TimerHost>,
    clipboard: Box<dyn Clipboard>,
    metrics: SharedMetrics,
    config: UiConfig,

    /// Container rectangle at the last layout pass.
    geometry: Rect,
    slots: Vec<Slot>,
    next_id: u32,
    layout_dirty: bool,

    focus: FocusRouter,
    /// Slot receiving every pointer event until pointer-up.
    capture: Option<usize>,
    default_button: Option<WidgetId>,
    timer_interval: f32,
    messages: Vec<UiMessage>,
}

impl Container {
    pub fn new(title: impl Into<String>, mut surface: Box<dyn Surface>, metrics: SharedMetrics) -> Self {
        let mut base = WidgetBase::new(title);
        base.attach(WidgetId::CONTAINER, metrics.clone());
        surface.set_title(base.caption().full());
        let geometry = surface.geometry();

        Self {
            base,
            surface,
            timer:          Box::new(ManualTimer::default()),
            clipboard:      Box::new(MemoryClipboard::default()),
            metrics,
            config:         UiConfig::default(),
            geometry,
            slots:          Vec::new(),
            next_id:        1,
            layout_dirty:   true,
            focus:          FocusRouter::new(),
            capture:        None,
            default_button: None,
            timer_interval: 0.0,
            messages:       Vec::new(),
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    /// Replaces the configuration. Use before adding widgets: attached
    /// widgets keep the line heights they were attached with.
    pub fn with_config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self.layout_dirty = true;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_timer(mut self, timer: Box<dyn TimerHost>) -> Self {
        self.timer = timer;
        self
    }

    // ── widgets ───────────────────────────────────────────────────────────

    /// Attaches `widget` after all previously attached ones and returns its
    /// id. Placements with both edges of one axis fixed-length are refused.
    pub fn add(&mut self, placement: Placement, mut widget: Widget) -> Result<WidgetId, UiError> {
        if let Err(e) = placement.validate() {
            log::warn!("container: refused {} \"{}\": {e}", widget.kind().name(), widget.base().caption());
            return Err(e);
        }

        let id = WidgetId(self.next_id);
        self.next_id += 1;
        let env = WidgetEnv {
            metrics:              self.metrics.clone(),
            list_line_height_pct: self.config.list_line_height_pct,
            button_line_height:   self.config.button_array_line_height,
        };
        widget.attach(id, &env);
        log::debug!("container: attached {} {id}", widget.kind().name());

        let blinks = matches!(widget.kind(), WidgetKind::EditField(_));
        self.slots.push(Slot { placement, widget });
        self.layout_dirty = true;

        if blinks && self.timer_interval <= TIMER_EPSILON {
            self.set_timer(self.config.caret_blink_interval);
        }
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn index_of(&self, id: WidgetId) -> Option<usize> {
        self.slots.iter().position(|s| s.widget.id() == id)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.index_of(id).map(|i| &self.slots[i].widget)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.index_of(id).map(|i| &mut self.slots[i].widget)
    }

    fn try_widget_mut(&mut self, id: WidgetId) -> Result<&mut Widget, UiError> {
        self.widget_mut(id).ok_or(UiError::UnknownWidget(id))
    }

    pub fn label_mut(&mut self, id: WidgetId) -> Result<&mut Label, UiError> {
        self.try_widget_mut(id)?
            .as_label_mut()
            .ok_or(UiError::WrongWidgetKind { id, expected: "label" })
    }

    pub fn list_box(&self, id: WidgetId) -> Result<&ListBox, UiError> {
        self.widget(id)
            .ok_or(UiError::UnknownWidget(id))?
            .as_list_box()
            .ok_or(UiError::WrongWidgetKind { id, expected: "list box" })
    }

    pub fn list_box_mut(&mut self, id: WidgetId) -> Result<&mut ListBox, UiError> {
        self.try_widget_mut(id)?
            .as_list_box_mut()
            .ok_or(UiError::WrongWidgetKind { id, expected: "list box" })
    }

    pub fn button_array(&self, id: WidgetId) -> Result<&ButtonArray, UiError> {
        self.widget(id)
            .ok_or(UiError::UnknownWidget(id))?
            .as_button_array()
            .ok_or(UiError::WrongWidgetKind { id, expected: "button array" })
    }

    pub fn button_array_mut(&mut self, id: WidgetId) -> Result<&mut ButtonArray, UiError> {
        self.try_widget_mut(id)?
            .as_button_array_mut()
            .ok_or(UiError::WrongWidgetKind { id, expected: "button array" })
    }

    /// Clicks element `elem` of a button array as the user would, posting
    /// the usual message. `Ok(false)` if the array has no such element.
    pub fn click_button_elem(&mut self, id: WidgetId, elem: RefCon) -> Result<bool, UiError> {
        let i = self.index_of(id).ok_or(UiError::UnknownWidget(id))?;
        let array = self.slots[i]
            .widget
            .as_button_array_mut()
            .ok_or(UiError::WrongWidgetKind { id, expected: "button array" })?;
        let mut ctx = EventCtx::new(id, &mut self.messages, &mut *self.clipboard);
        Ok(array.set_selected(elem, &mut ctx))
    }

    pub fn edit_field_mut(&mut self, id: WidgetId) -> Result<EditFieldMut<'_>, UiError> {
        self.try_widget_mut(id)?
            .as_edit_field_mut()
            .ok_or(UiError::WrongWidgetKind { id, expected: "edit field" })
    }

    /// Resolved rectangle of a widget, relative to the usable area.
    pub fn bounds(&mut self, id: WidgetId) -> Option<Rect> {
        self.update_layout();
        self.widget(id).and_then(|w| w.base().bounds())
    }

    // ── window state ──────────────────────────────────────────────────────

    #[inline]
    pub fn caption(&self) -> &str {
        self.base.caption().full()
    }

    /// Sets the caption; the window title follows.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.base.set_caption(caption);
        self.surface.set_title(self.base.caption().full());
    }

    #[inline]
    pub fn surface(&self) -> &dyn Surface {
        &*self.surface
    }

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn is_visible(&self) -> bool {
        self.surface.is_visible()
    }

    /// Shows or hides the window. Hiding first takes focus away from the
    /// focus widget.
    pub fn set_visible(&mut self, visible: bool) {
        if !visible {
            self.focus.notify_lost(&mut self.slots, &mut self.messages);
        }
        self.surface.set_visible(visible);
        self.surface.take_keyboard_focus(visible);
    }

    /// The whole window lost keyboard focus. The focus widget is told, but
    /// stays the focus target for when the window gets focus back.
    pub fn keyboard_focus_lost(&mut self) {
        self.focus.notify_lost(&mut self.slots, &mut self.messages);
    }

    /// Widget holding keyboard focus.
    pub fn focus_widget(&self) -> Option<WidgetId> {
        self.focus.current().map(|i| self.slots[i].widget.id())
    }

    /// Makes `id` the button that Return/Enter clicks.
    pub fn set_default_button(&mut self, id: WidgetId) -> Result<(), UiError> {
        let w = self.widget(id).ok_or(UiError::UnknownWidget(id))?;
        if w.as_button_push().is_none() {
            return Err(UiError::WrongWidgetKind { id, expected: "push button" });
        }
        self.default_button = Some(id);
        Ok(())
    }

    pub fn clear_default_button(&mut self) {
        self.default_button = None;
    }

    /// Takes every message posted since the last call.
    pub fn drain_messages(&mut self) -> Vec<UiMessage> {
        std::mem::take(&mut self.messages)
    }

    // ── timer ─────────────────────────────────────────────────────────────

    /// Registers, changes or (with 0) cancels the periodic timer.
    pub fn set_timer(&mut self, interval: f32) {
        let active = self.timer_interval > TIMER_EPSILON;
        if interval > TIMER_EPSILON {
            log::debug!("container: timer {}every {interval}s", if active { "now " } else { "" });
            self.timer.register(interval);
        } else if active {
            log::debug!("container: timer off");
            self.timer.unregister();
        }
        self.timer_interval = interval;
    }

    #[inline]
    pub fn timer_interval(&self) -> f32 {
        self.timer_interval
    }

    /// Timer callback: ticks every widget and returns the next interval.
    pub fn on_timer(&mut self) -> f32 {
        for slot in &mut self.slots {
            slot.widget.timer();
        }
        self.timer_interval
    }

    // ── layout & drawing ──────────────────────────────────────────────────

    /// Marks the layout stale; the next draw or event re-resolves it.
    pub fn invalidate_layout(&mut self) {
        self.layout_dirty = true;
    }

    fn update_layout(&mut self) {
        let geo = self.surface.geometry();
        if geo != self.geometry {
            self.geometry = geo;
            self.layout_dirty = true;
        }
        if !self.layout_dirty {
            return;
        }

        let frame = self.config.frame_thickness;
        let placements: Vec<Placement> = self.slots.iter().map(|s| s.placement).collect();
        let rects = layout::resolve(geo.width() - 2 * frame, geo.height() - 2 * frame, &placements);

        let mut invalid = 0;
        for (slot, r) in self.slots.iter_mut().zip(rects) {
            if r.is_none() {
                invalid += 1;
                log::debug!("layout: {} {} has no valid rectangle", slot.widget.kind().name(), slot.widget.id());
            }
            slot.widget.set_geometry(r);
        }
        if invalid > 0 {
            log::warn!("layout: {invalid} of {} widgets do not fit into {geo:?}", self.slots.len());
        }
        log::debug!("layout: resolved {} widgets for {geo:?}", self.slots.len());
        self.layout_dirty = false;
    }

    /// Draws the window and every visible widget that fits completely.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.update_layout();

        let geo = self.geometry;
        let frame = self.config.frame_thickness;
        let mut painter = Painter::new(canvas, &self.config.theme, &*self.metrics);
        let bg = self.base.colors().0.unwrap_or_else(|| painter.role(ThemeColor::StdBg));
        painter.fill_rect(geo, bg);

        let origin = geo.tl() + Point::new(frame, -frame);
        for (i, slot) in self.slots.iter().enumerate() {
            let w = &slot.widget;
            let Some(bounds) = w.base().bounds().filter(|_| w.base().is_visible()) else { continue };
            let r = bounds + origin;
            if geo.contains_rect(&r) {
                w.draw(&mut painter, r, self.focus.is_focused(i));
            }
        }
    }

    // ── pointer ───────────────────────────────────────────────────────────

    /// Absolute point to usable-area coordinates.
    fn localize(&self, p: Point) -> Point {
        let frame = self.config.frame_thickness;
        let p = p - self.geometry.tl();
        Point::new(p.x - frame, p.y + frame)
    }

    /// First visible, enabled widget containing `local`.
    fn hit_test(&self, local: Point) -> Option<usize> {
        self.slots.iter().position(|s| {
            let b = s.widget.base();
            b.is_visible() && b.is_enabled() && b.bounds().is_some_and(|r| r.contains(local))
        })
    }

    /// Point relative to slot `i`'s top-left corner.
    fn widget_local(&self, i: usize, p: Point) -> Point {
        let local = self.localize(p);
        match self.slots[i].widget.base().bounds() {
            Some(r) => local - r.tl(),
            None => local,
        }
    }

    /// Pointer event at absolute `p`. Pointer-down picks the capture
    /// target; drag and up go to it wherever the pointer is, and are
    /// dropped when the down hit nothing.
    pub fn mouse_click(&mut self, p: Point, button: MouseButton, status: MouseStatus) {
        self.surface.take_keyboard_focus(true);
        self.update_layout();

        if status == MouseStatus::Down {
            self.capture = self.hit_test(self.localize(p));
            if let Some(i) = self.capture {
                self.focus.pointer_down(&mut self.slots, i, &mut self.messages);
            }
        }

        if let Some(i) = self.capture {
            let local = self.widget_local(i, p);
            let widget = &mut self.slots[i].widget;
            let mut ctx = EventCtx::new(widget.id(), &mut self.messages, &mut *self.clipboard);
            widget.mouse_click(local, button, status, &mut ctx);
        }

        if status == MouseStatus::Up {
            self.capture = None;
        }
    }

    /// Wheel at absolute `p`; positive `clicks` scroll toward later content.
    pub fn mouse_wheel(&mut self, p: Point, clicks: i32) {
        self.update_layout();
        if let Some(i) = self.hit_test(self.localize(p)) {
            self.slots[i].widget.mouse_wheel(clicks);
        }
    }

    /// Cursor shape for absolute `p`.
    pub fn cursor(&mut self, p: Point) -> CursorShape {
        self.update_layout();
        match self.hit_test(self.localize(p)) {
            Some(i) => self.slots[i].widget.cursor(),
            None => CursorShape::Default,
        }
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    pub fn key(&mut self, ev: &KeyEvent) {
        let pressed = ev.state == KeyState::Pressed;
        match ev.key {
            Key::Tab => {
                if pressed && !ev.modifiers.any() {
                    self.focus.traverse(&mut self.slots, Traverse::Forward, &mut self.messages);
                } else if pressed && ev.modifiers.only(Modifiers::SHIFT) {
                    self.focus.traverse(&mut self.slots, Traverse::Backward, &mut self.messages);
                }
            }
            Key::Escape => self.focus.drop_focus(&mut self.slots, &mut self.messages),
            Key::Return | Key::Enter => {
                if pressed && !ev.modifiers.any() {
                    self.click_default_button();
                }
            }
            _ => {
                if let Some(i) = self.focus.current() {
                    let widget = &mut self.slots[i].widget;
                    let mut ctx = EventCtx::new(widget.id(), &mut self.messages, &mut *self.clipboard);
                    widget.key(ev, &mut ctx);
                }
            }
        }
    }

    fn click_default_button(&mut self) {
        let Some(id) = self.default_button else { return };
        if self.widget(id).is_some_and(|w| w.base().is_enabled()) {
            log::debug!("container: default button {id}");
            self.messages.push(UiMessage::ButtonClicked { id });
        }
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("caption", &self.caption())
            .field("geometry", &self.geometry)
            .field("widgets", &self.slots.len())
            .field("focus", &self.focus.current())
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::EdgeRule;
    use crate::widgets::{ArrayStyle, ButtonElem, EditField, Orientation, PushState};
    use kestrel_engine::host::HeadlessSurface;
    use kestrel_engine::scene::DrawList;
    use kestrel_engine::text::MonoMetrics;

    /// 300×300 window at (100, 500); usable area starts at (105, 495).
    fn window() -> Container {
        let surface = HeadlessSurface::new(Rect::new(100, 500, 400, 200));
        Container::new("Test", Box::new(surface), SharedMetrics::new(MonoMetrics::new(6, 10)))
    }

    fn at(left: i32, top: i32, w: i32, h: i32) -> Placement {
        Placement::new()
            .left(EdgeRule::Absolute, left)
            .top(EdgeRule::Absolute, -top)
            .right(EdgeRule::FixedLen, w)
            .bottom(EdgeRule::FixedLen, h)
    }

    /// Absolute point for usable-area coordinates (x right, y down).
    fn abs(x: i32, y: i32) -> Point {
        Point::new(105 + x, 495 - y)
    }

    fn tab(c: &mut Container) {
        c.key(&KeyEvent::pressed(Key::Tab));
    }

    // ── attach / layout ───────────────────────────────────────────────────

    #[test]
    fn ids_follow_attachment_order() {
        let mut c = window();
        let a = c.add(Placement::default(), Widget::label("a")).expect("attach");
        let b = c.add(Placement::default(), Widget::label("b")).expect("attach");
        assert_eq!((a, b), (WidgetId(1), WidgetId(2)));
        assert_eq!(c.bounds(b), Some(Rect::new(0, -15, 290, -30)));
    }

    #[test]
    fn circular_fixed_length_is_refused() {
        let mut c = window();
        let p = Placement::new().left(EdgeRule::FixedLen, 10).right(EdgeRule::FixedLen, 10);
        assert!(matches!(c.add(p, Widget::line()), Err(UiError::CircularFixedLength { .. })));
        assert!(c.is_empty());
    }

    #[test]
    fn resize_triggers_relayout() {
        let surface = HeadlessSurface::new(Rect::new(0, 100, 100, 0));
        let mut c = Container::new("T", Box::new(surface), SharedMetrics::new(MonoMetrics::new(6, 10)));
        let id = c.add(Placement::default(), Widget::line()).expect("attach");
        assert_eq!(c.bounds(id).map(|r| r.width()), Some(90));
        // the headless surface stands in for a host that resized the window
        let resized = HeadlessSurface::new(Rect::new(0, 100, 200, 0));
        c.surface = Box::new(resized);
        assert_eq!(c.bounds(id).map(|r| r.width()), Some(190));
    }

    #[test]
    fn draw_skips_widgets_that_do_not_fit() {
        let mut c = window();
        c.add(at(0, 0, 50, 20), Widget::button("in")).expect("attach");
        c.add(at(280, 0, 50, 20), Widget::button("out")).expect("attach");
        let mut list = DrawList::new();
        c.draw(&mut list);
        let texts: Vec<String> = list.texts().map(str::to_owned).collect();
        assert_eq!(texts, vec!["in".to_owned()]);
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_wraps_around_once() {
        let mut c = window();
        let a = c.add(at(0, 0, 50, 20), Widget::button("A")).expect("attach");
        c.add(at(0, 30, 50, 20), Widget::label("not focusable")).expect("attach");
        let b = c.add(at(0, 60, 50, 20), Widget::button("B")).expect("attach");
        let cc = c.add(at(0, 90, 50, 20), Widget::button("C")).expect("attach");

        tab(&mut c);
        assert_eq!(c.focus_widget(), Some(a));
        tab(&mut c);
        tab(&mut c);
        assert_eq!(c.focus_widget(), Some(cc));
        tab(&mut c);
        assert_eq!(c.focus_widget(), Some(a));

        c.key(&KeyEvent::pressed(Key::Tab).with_modifiers(Modifiers::SHIFT));
        assert_eq!(c.focus_widget(), Some(cc));
        c.key(&KeyEvent::pressed(Key::Tab).with_modifiers(Modifiers::SHIFT));
        assert_eq!(c.focus_widget(), Some(b));
    }

    #[test]
    fn escape_drops_focus() {
        let mut c = window();
        c.add(at(0, 0, 50, 20), Widget::button("A")).expect("attach");
        tab(&mut c);
        c.key(&KeyEvent::pressed(Key::Escape));
        assert_eq!(c.focus_widget(), None);
    }

    #[test]
    fn any_escape_takes_focus_from_the_widget_too() {
        let radio = || {
            ButtonArray::new(ArrayStyle::Radio, Orientation::Horizontal)
                .with(ButtonElem::new(RefCon(1), "x"))
                .with(ButtonElem::new(RefCon(2), "y"))
        };
        let escapes = [
            KeyEvent::pressed(Key::Escape).with_modifiers(Modifiers::SHIFT),
            KeyEvent::released(Key::Escape),
        ];
        for esc in escapes {
            let mut c = window();
            let id = c.add(at(0, 0, 100, 20), Widget::new("", WidgetKind::ButtonArray(radio()))).expect("attach");
            tab(&mut c);
            assert_eq!(c.button_array(id).map(ButtonArray::focus_index), Ok(Some(0)));

            c.key(&esc);
            assert_eq!(c.focus_widget(), None);
            assert_eq!(c.button_array(id).map(ButtonArray::focus_index), Ok(None), "{esc:?}");
        }
    }

    #[test]
    fn keys_reach_only_the_focus_widget() {
        let mut c = window();
        let a = c.add(at(0, 0, 50, 20), Widget::button("A")).expect("attach");
        c.add(at(0, 30, 50, 20), Widget::button("B")).expect("attach");
        c.key(&KeyEvent::typed(' '));
        c.key(&KeyEvent::released(Key::Space));
        assert!(c.drain_messages().is_empty());

        tab(&mut c);
        c.key(&KeyEvent::typed(' '));
        c.key(&KeyEvent::released(Key::Space));
        assert_eq!(c.drain_messages(), vec![UiMessage::ButtonClicked { id: a }]);
    }

    #[test]
    fn edit_field_reports_change_on_focus_loss() {
        let mut c = window();
        let e = c.add(at(0, 0, 100, 20), Widget::edit_field("ab", EditField::default())).expect("attach");
        c.add(at(0, 30, 50, 20), Widget::button("B")).expect("attach");
        assert!(c.timer_interval() > 0.0);

        tab(&mut c);
        c.key(&KeyEvent::typed('c'));
        tab(&mut c);
        assert_eq!(c.drain_messages(), vec![UiMessage::EditFieldChanged { id: e, text: "abc".into() }]);
        assert_eq!(c.edit_field_mut(e).map(|f| f.text().to_owned()), Ok("abc".to_owned()));
    }

    #[test]
    fn hiding_the_window_takes_focus_away() {
        let mut c = window();
        let e = c.add(at(0, 0, 100, 20), Widget::edit_field("x", EditField::default())).expect("attach");
        tab(&mut c);
        c.key(&KeyEvent::typed('y'));
        c.set_visible(false);
        assert!(!c.is_visible());
        assert_eq!(c.drain_messages(), vec![UiMessage::EditFieldChanged { id: e, text: "xy".into() }]);
        // still the focus target for when the window comes back
        assert_eq!(c.focus_widget(), Some(e));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn capture_holds_across_drag() {
        let mut c = window();
        let a = c.add(at(0, 0, 50, 20), Widget::button("A")).expect("attach");
        let b = c.add(at(60, 0, 50, 20), Widget::button("B")).expect("attach");

        c.mouse_click(abs(80, 10), MouseButton::Left, MouseStatus::Down);
        c.mouse_click(abs(20, 10), MouseButton::Left, MouseStatus::Drag);
        c.mouse_click(abs(20, 10), MouseButton::Left, MouseStatus::Up);

        assert_eq!(c.drain_messages(), vec![UiMessage::ButtonClicked { id: b }]);
        assert_eq!(c.focus_widget(), Some(b));
        assert!(c.widget(a).and_then(Widget::as_button_push).is_some_and(|p| p.state() == PushState::Normal));
        assert!(c.surface().has_keyboard_focus());
    }

    #[test]
    fn drag_from_empty_space_onto_a_button_does_not_click_it() {
        let mut c = window();
        c.add(at(0, 0, 50, 20), Widget::button("A")).expect("attach");
        c.add(at(60, 0, 50, 20), Widget::button("B")).expect("attach");

        c.mouse_click(abs(200, 200), MouseButton::Left, MouseStatus::Down);
        c.mouse_click(abs(80, 10), MouseButton::Left, MouseStatus::Drag);
        c.mouse_click(abs(80, 10), MouseButton::Left, MouseStatus::Up);

        assert!(c.drain_messages().is_empty());
        assert_eq!(c.focus_widget(), None);
    }

    #[test]
    fn pointer_down_outside_widgets_hits_nothing() {
        let mut c = window();
        c.add(at(0, 0, 50, 20), Widget::button("A")).expect("attach");
        c.mouse_click(abs(200, 200), MouseButton::Left, MouseStatus::Down);
        c.mouse_click(abs(200, 200), MouseButton::Left, MouseStatus::Up);
        assert!(c.drain_messages().is_empty());
        assert_eq!(c.focus_widget(), None);
    }

    #[test]
    fn disabled_widgets_are_not_hit() {
        let mut c = window();
        c.add(at(0, 0, 50, 20), Widget::button("A").enabled(false)).expect("attach");
        c.mouse_click(abs(10, 10), MouseButton::Left, MouseStatus::Down);
        c.mouse_click(abs(10, 10), MouseButton::Left, MouseStatus::Up);
        assert!(c.drain_messages().is_empty());
    }

    #[test]
    fn cursor_follows_hit_test() {
        let mut c = window();
        c.add(at(0, 0, 100, 20), Widget::edit_field("", EditField::default())).expect("attach");
        assert_eq!(c.cursor(abs(10, 10)), CursorShape::IBeam);
        assert_eq!(c.cursor(abs(10, 100)), CursorShape::Default);
    }

    // ── default button / accessors ────────────────────────────────────────

    #[test]
    fn return_clicks_enabled_default_button() {
        let mut c = window();
        let ok = c.add(at(0, 0, 50, 20), Widget::button("OK")).expect("attach");
        let label = c.add(at(0, 30, 50, 20), Widget::label("l")).expect("attach");
        assert!(c.set_default_button(label).is_err());
        c.set_default_button(ok).expect("push button");

        c.key(&KeyEvent::pressed(Key::Return));
        c.key(&KeyEvent::pressed(Key::Enter));
        assert_eq!(c.drain_messages().len(), 2);

        if let Some(w) = c.widget_mut(ok) {
            w.base_mut().set_enabled(false);
        }
        c.key(&KeyEvent::pressed(Key::Return));
        assert!(c.drain_messages().is_empty());
    }

    #[test]
    fn typed_accessors_check_kind() {
        let mut c = window();
        let l = c.add(at(0, 0, 50, 20), Widget::label("l")).expect("attach");
        assert!(c.label_mut(l).is_ok());
        assert_eq!(c.list_box_mut(l).err(), Some(UiError::WrongWidgetKind { id: l, expected: "list box" }));
        assert_eq!(c.list_box(WidgetId(99)).err(), Some(UiError::UnknownWidget(WidgetId(99))));
    }

    #[test]
    fn caption_mirrors_title() {
        let mut c = window();
        assert_eq!(c.surface().title(), "Test");
        c.set_caption("Renamed");
        assert_eq!(c.surface().title(), "Renamed");
        assert_eq!(c.caption(), "Renamed");
    }

    #[test]
    fn timer_ticks_and_cancels() {
        let mut c = window();
        c.set_timer(0.25);
        assert_eq!(c.on_timer(), 0.25);
        c.set_timer(0.0);
        assert_eq!(c.on_timer(), 0.0);
    }
}
