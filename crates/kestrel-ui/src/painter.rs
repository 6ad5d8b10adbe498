use kestrel_engine::coords::{Point, Rect};
use kestrel_engine::paint::Color;
use kestrel_engine::scene::Canvas;
use kestrel_engine::text::FontMetrics;

use crate::theme::{Theme, ThemeColor};

/// Pixels from the vertically centered line box down to the baseline.
const BASELINE_OFFSET: i32 = 3;

/// Horizontal placement of a string inside a rectangle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Drawing surface passed to widget draw handlers.
///
/// Wraps the host [`Canvas`] with the container's theme and font metrics and
/// adds the composite shapes widgets share: aligned strings, check boxes and
/// radio buttons.
pub struct Painter<'a> {
    canvas: &'a mut dyn Canvas,
    theme: &'a Theme,
    metrics: &'a dyn FontMetrics,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, theme: &'a Theme, metrics: &'a dyn FontMetrics) -> Self {
        Self { canvas, theme, metrics }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    #[inline]
    pub fn role(&self, role: ThemeColor) -> Color {
        self.theme.color(role)
    }

    #[inline]
    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Sets the current color; returns `false` if nothing would be drawn.
    pub fn set_color(&mut self, color: Color) -> bool {
        self.canvas.set_color(color);
        color.is_visible()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if self.set_color(color) {
            self.canvas.fill_rect(rect);
        }
    }

    pub fn frame_rect(&mut self, rect: Rect, color: Color) {
        if self.set_color(color) {
            self.canvas.frame_rect(rect);
        }
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        if self.set_color(color) {
            self.canvas.set_line_width(width);
            self.canvas.draw_lines(&[from, to]);
            self.canvas.set_line_width(1.0);
        }
    }

    pub fn text(&mut self, color: Color, origin: Point, text: &str) {
        if !text.is_empty() && color.is_visible() {
            self.canvas.draw_string(color, origin, text);
        }
    }

    // ── composites ────────────────────────────────────────────────────────

    /// Draws `text` vertically centered in `rect` and aligned horizontally.
    pub fn aligned_text(&mut self, color: Color, rect: Rect, align: TextAlign, text: &str) {
        let c = rect.center();
        let y = c.y - self.metrics.line_height() / 2 + BASELINE_OFFSET;
        let x = match align {
            TextAlign::Left => rect.left(),
            TextAlign::Center => c.x - self.metrics.text_width(text) / 2,
            TextAlign::Right => rect.right() - self.metrics.text_width(text),
        };
        self.text(color, Point::new(x, y), text);
    }

    /// Square frame, with an X if `selected`. `thick` doubles the frame.
    pub fn check_box(&mut self, rect: Rect, color: Color, selected: bool, thick: bool) {
        if !self.set_color(color) {
            return;
        }
        if thick {
            self.canvas.set_line_width(2.0);
        }
        self.canvas.frame_rect(rect);
        self.canvas.set_line_width(1.0);

        if selected {
            self.canvas.draw_lines(&[
                rect.bl() + Point::new(2, 2),
                rect.tr() + Point::new(-2, -2),
                rect.tl() + Point::new(2, -2),
                rect.br() + Point::new(-2, 2),
            ]);
        }
    }

    /// Diamond outline, with a filled inner diamond if `selected`.
    pub fn radio_button(&mut self, rect: Rect, color: Color, selected: bool, thick: bool) {
        if !self.set_color(color) {
            return;
        }
        let c = rect.center();
        if thick {
            self.canvas.set_line_width(2.0);
        }
        self.canvas.draw_line_strip(&[
            Point::new(rect.left(), c.y),
            Point::new(c.x, rect.top()),
            Point::new(rect.right(), c.y),
            Point::new(c.x, rect.bottom()),
            Point::new(rect.left(), c.y),
        ]);
        self.canvas.set_line_width(1.0);

        if selected {
            self.canvas.fill_polygon(&[
                Point::new(rect.left() + 3, c.y),
                Point::new(c.x, rect.top() - 3),
                Point::new(rect.right() - 3, c.y),
                Point::new(c.x, rect.bottom() + 3),
            ]);
        }
    }
}

/// Square glyph box at the left end of a line-high rectangle.
///
/// Nudged one pixel in from the top and left, and trimmed at the bottom to
/// an even side length.
pub fn checkbox_square(r: Rect) -> Rect {
    let top = r.top() - 1;
    let left = r.left() + 1;
    let bottom = if (top - r.bottom()) % 2 != 0 { r.bottom() + 1 } else { r.bottom() + 2 };
    let side = (top - bottom).max(0);
    Rect::new(left, top, left + side, top - side)
}
