use kestrel_engine::coords::Rect;

use crate::painter::Painter;
use crate::widget::WidgetColors;

/// Divider drawn from the top-left to the bottom-right corner of its
/// rectangle. A zero-height rectangle gives a horizontal line.
#[derive(Debug, Clone)]
pub struct Line {
    width: f32,
}

impl Default for Line {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.width
    }

    pub(crate) fn draw(&self, colors: &WidgetColors, painter: &mut Painter, r: Rect) {
        painter.line(r.tl(), r.br(), colors.fg, self.width);
    }
}
