/// Font measurements the widget layer relies on.
///
/// All values are whole pixels.
pub trait FontMetrics {
    /// Height of one text line.
    fn line_height(&self) -> i32;

    /// Average character width, used for cropping guesses, caret margins and
    /// column gaps.
    fn char_width(&self) -> i32;

    /// Pixel width of `text` when drawn on one line.
    fn text_width(&self, text: &str) -> i32;
}

/// Fixed-width metrics: every character is `char_width` wide.
///
/// Used headless and in tests, where results must not depend on a font file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonoMetrics {
    pub char_width: i32,
    pub line_height: i32,
}

impl MonoMetrics {
    pub const fn new(char_width: i32, line_height: i32) -> Self {
        Self { char_width, line_height }
    }
}

impl Default for MonoMetrics {
    fn default() -> Self {
        Self::new(6, 10)
    }
}

impl FontMetrics for MonoMetrics {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn char_width(&self) -> i32 {
        self.char_width
    }

    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }
}
