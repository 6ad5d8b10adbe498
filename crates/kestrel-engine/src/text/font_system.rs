use super::FontMetrics;

/// Error returned by [`FontdueMetrics::from_bytes`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Metrics taken from a real TrueType / OpenType font at a fixed pixel size.
pub struct FontdueMetrics {
    font: fontdue::Font,
    size: f32,
    line_height: i32,
    char_width: i32,
}

impl FontdueMetrics {
    /// Parses a font from raw bytes and measures it at `size` pixels.
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let size = size.max(1.0);

        let line_height = font
            .horizontal_line_metrics(size)
            .map(|m| m.new_line_size.ceil() as i32)
            .unwrap_or_else(|| (size * 1.2).ceil() as i32);
        // Average width is taken from the digit zero, matching how numeric
        // columns line up.
        let char_width = font.metrics('0', size).advance_width.round().max(1.0) as i32;

        log::debug!("font measured: size={size} line_height={line_height} char_width={char_width}");
        Ok(Self { font, size, line_height, char_width })
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl FontMetrics for FontdueMetrics {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn char_width(&self) -> i32 {
        self.char_width
    }

    fn text_width(&self, text: &str) -> i32 {
        let w: f32 = text
            .chars()
            .map(|c| self.font.metrics(c, self.size).advance_width)
            .sum();
        w.round() as i32
    }
}
