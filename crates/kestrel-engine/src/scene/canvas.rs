use crate::coords::{Point, Rect};
use crate::paint::Color;

/// Low-level drawing primitives provided by the host.
///
/// Color and line width are sticky state, like a classic immediate-mode
/// pipeline. A [`Color::Transparent`] current color turns every primitive
/// into a no-op.
pub trait Canvas {
    fn set_color(&mut self, color: Color);

    /// `1.0` is a normal line.
    fn set_line_width(&mut self, width: f32);

    /// Independent segments between consecutive pairs of points.
    fn draw_lines(&mut self, points: &[Point]);

    /// One connected polyline through all points.
    fn draw_line_strip(&mut self, points: &[Point]);

    fn fill_rect(&mut self, rect: Rect);

    /// Filled convex polygon.
    fn fill_polygon(&mut self, points: &[Point]);

    /// Draws `text` left-anchored on the baseline at `origin`, in `color`.
    fn draw_string(&mut self, color: Color, origin: Point, text: &str);

    /// Unfilled rectangle outline.
    fn frame_rect(&mut self, rect: Rect) {
        self.draw_line_strip(&[rect.tl(), rect.tr(), rect.br(), rect.bl(), rect.tl()]);
    }
}
