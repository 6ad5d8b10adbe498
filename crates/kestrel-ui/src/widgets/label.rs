use kestrel_engine::coords::{Point, Rect};

use crate::painter::{Painter, TextAlign};
use crate::widget::{WidgetBase, WidgetColors};

/// Static, left-aligned text.
#[derive(Debug, Clone, Default)]
pub struct Label {
    bold: bool,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold is faked by drawing the text twice, 1 px apart.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub(crate) fn draw(&self, base: &WidgetBase, colors: &WidgetColors, painter: &mut Painter, r: Rect) {
        painter.fill_rect(r, colors.bg);
        let color = colors.text(base.is_enabled());
        painter.aligned_text(color, r, TextAlign::Left, base.caption().cropped());
        if self.bold {
            painter.aligned_text(color, r + Point::new(1, 0), TextAlign::Left, base.caption().cropped());
        }
    }
}
