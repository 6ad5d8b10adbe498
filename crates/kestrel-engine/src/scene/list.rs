use crate::coords::{Point, Rect};
use crate::paint::Color;

use super::{Canvas, DrawCmd};

/// Recorded draw stream for one pass.
///
/// Implements [`Canvas`] by appending a [`DrawCmd`] per primitive, in call
/// order. Primitives drawn while the current color is transparent are not
/// recorded.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    color: Color,
    line_width: f32,
}

impl Default for DrawList {
    fn default() -> Self {
        Self { items: Vec::new(), color: Color::Transparent, line_width: 1.0 }
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and resets the sticky state. Keeps capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.color = Color::Transparent;
        self.line_width = 1.0;
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All strings drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(DrawCmd::text)
    }

    fn push(&mut self, cmd: DrawCmd) {
        if cmd.color().is_visible() {
            self.items.push(cmd);
        }
    }
}

impl Canvas for DrawList {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_lines(&mut self, points: &[Point]) {
        let cmd = DrawCmd::Lines { color: self.color, width: self.line_width, points: points.to_vec() };
        self.push(cmd);
    }

    fn draw_line_strip(&mut self, points: &[Point]) {
        let cmd = DrawCmd::LineStrip { color: self.color, width: self.line_width, points: points.to_vec() };
        self.push(cmd);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.push(DrawCmd::FillRect { color: self.color, rect });
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.push(DrawCmd::Polygon { color: self.color, points: points.to_vec() });
    }

    fn draw_string(&mut self, color: Color, origin: Point, text: &str) {
        self.push(DrawCmd::Text { color, origin, text: text.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_color_records_nothing() {
        let mut dl = DrawList::new();
        dl.fill_rect(Rect::new(0, 10, 10, 0));
        assert!(dl.is_empty());
        dl.set_color(Color::WHITE);
        dl.fill_rect(Rect::new(0, 10, 10, 0));
        assert_eq!(dl.len(), 1);
    }

    #[test]
    fn frame_rect_is_closed_strip() {
        let mut dl = DrawList::new();
        dl.set_color(Color::RED);
        dl.frame_rect(Rect::new(0, 10, 20, 0));
        match &dl.items()[0] {
            DrawCmd::LineStrip { points, .. } => {
                assert_eq!(points.len(), 5);
                assert_eq!(points.first(), points.last());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn line_width_is_captured_per_command() {
        let mut dl = DrawList::new();
        dl.set_color(Color::WHITE);
        dl.set_line_width(2.0);
        dl.draw_lines(&[Point::new(0, 0), Point::new(1, 1)]);
        dl.set_line_width(1.0);
        dl.draw_lines(&[Point::new(0, 0), Point::new(1, 1)]);
        let widths: Vec<f32> = dl
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Lines { width, .. } => *width,
                _ => 0.0,
            })
            .collect();
        assert_eq!(widths, vec![2.0, 1.0]);
    }

    #[test]
    fn texts_in_order() {
        let mut dl = DrawList::new();
        dl.draw_string(Color::WHITE, Point::zero(), "a");
        dl.draw_string(Color::Transparent, Point::zero(), "hidden");
        dl.draw_string(Color::BLACK, Point::zero(), "b");
        assert_eq!(dl.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
