//! Text that keeps a width-limited view of itself.
//!
//! [`CroppedString`] stores the full text, a start offset and a pixel width,
//! and caches the longest run of characters beginning at the start offset
//! that fits in that width. Every mutation recomputes the cache, so the
//! cropped view is always consistent with the full text.
//!
//! All positions are character indices, never byte offsets.

use std::fmt;

use kestrel_engine::text::FontMetrics;

use crate::metrics::SharedMetrics;

/// Fallback average character width when no metrics are bound or the bound
/// metrics report zero.
const FALLBACK_CHAR_WIDTH: i32 = 8;

// ── crop ──────────────────────────────────────────────────────────────────

/// Returns the longest prefix of `text[start..]` (in characters) whose
/// rendered width does not exceed `width`.
///
/// Starts from a guess based on the average character width and walks one
/// character at a time towards the answer.
pub fn crop_to_width<'s>(metrics: &dyn FontMetrics, text: &'s str, width: i32, start: usize) -> &'s str {
    let tail = match text.char_indices().nth(start) {
        Some((byte, _)) => &text[byte..],
        None => return "",
    };
    if width < 1 {
        return "";
    }

    // byte offset of every prefix length 0..=max
    let mut ends: Vec<usize> = tail.char_indices().map(|(b, _)| b).collect();
    ends.push(tail.len());
    let max = ends.len() - 1;
    let prefix = move |n: usize| -> &'s str { &tail[..ends[n]] };

    let avg = match metrics.char_width() {
        w if w > 0 => w,
        _ => FALLBACK_CHAR_WIDTH,
    };
    let mut n = ((width / avg) as usize).min(max);

    if metrics.text_width(prefix(n)) > width {
        while n > 0 {
            n -= 1;
            if metrics.text_width(prefix(n)) <= width {
                break;
            }
        }
    } else {
        while n < max && metrics.text_width(prefix(n + 1)) <= width {
            n += 1;
        }
    }
    prefix(n)
}

// ── CroppedString ─────────────────────────────────────────────────────────

/// A string plus the part of it that fits into a pixel width.
///
/// Width `None` means "unlimited": the cropped view is everything from the
/// start offset on. Without bound metrics the view is uncropped as well; the
/// container binds its metrics when the owning widget is attached.
#[derive(Clone, Default)]
pub struct CroppedString {
    full: String,
    cropped: String,
    width: Option<i32>,
    start: usize,
    metrics: Option<SharedMetrics>,
}

impl CroppedString {
    pub fn new(text: impl Into<String>) -> Self {
        let mut s = Self { full: text.into(), ..Self::default() };
        s.update();
        s
    }

    pub fn with_width(text: impl Into<String>, width: i32) -> Self {
        let mut s = Self::new(text);
        s.set_width(width);
        s
    }

    /// Binds the font metrics used for measuring and recomputes the crop.
    pub fn bind_metrics(&mut self, metrics: SharedMetrics) {
        self.metrics = Some(metrics);
        self.update();
    }

    pub fn metrics(&self) -> Option<&SharedMetrics> {
        self.metrics.as_ref()
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// The part of the text that fits.
    #[inline]
    pub fn cropped(&self) -> &str {
        &self.cropped
    }

    #[inline]
    pub fn width(&self) -> Option<i32> {
        self.width
    }

    #[inline]
    pub fn start_pos(&self) -> usize {
        self.start
    }

    /// Length of the full text in characters.
    pub fn len(&self) -> usize {
        self.full.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Characters hidden to the right of the cropped view.
    pub fn chars_cropped_right(&self) -> usize {
        self.len()
            .saturating_sub(self.start)
            .saturating_sub(self.cropped.chars().count())
    }

    // ── mutation ──────────────────────────────────────────────────────────

    pub fn set(&mut self, text: impl Into<String>) {
        self.full = text.into();
        self.update();
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = Some(width);
        self.update();
    }

    pub fn set_unlimited(&mut self) {
        self.width = None;
        self.update();
    }

    /// Moves the start offset, clamped to the last character.
    pub fn set_start_pos(&mut self, pos: usize) {
        self.start = pos;
        self.update();
    }

    pub fn clear(&mut self) {
        self.full.clear();
        self.update();
    }

    pub fn push(&mut self, ch: char) {
        self.full.push(ch);
        self.update();
    }

    pub fn push_str(&mut self, s: &str) {
        self.full.push_str(s);
        self.update();
    }

    /// Inserts `ch` before character `idx` (appends if past the end).
    pub fn insert(&mut self, idx: usize, ch: char) {
        let at = self.byte_offset(idx);
        self.full.insert(at, ch);
        self.update();
    }

    pub fn insert_str(&mut self, idx: usize, s: &str) {
        let at = self.byte_offset(idx);
        self.full.insert_str(at, s);
        self.update();
    }

    /// Removes the character at `idx`. Returns it, or `None` if out of range.
    pub fn remove(&mut self, idx: usize) -> Option<char> {
        if idx >= self.len() {
            return None;
        }
        let at = self.byte_offset(idx);
        let ch = self.full.remove(at);
        self.update();
        Some(ch)
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.full.char_indices().nth(idx).map_or(self.full.len(), |(b, _)| b)
    }

    fn update(&mut self) {
        self.start = self.start.min(self.len().saturating_sub(1));
        let skip = self.byte_offset(self.start);
        self.cropped = match (&self.metrics, self.width) {
            (Some(m), Some(w)) => crop_to_width(&**m, &self.full, w, self.start).to_owned(),
            _ => self.full[skip..].to_owned(),
        };
    }
}

impl PartialEq for CroppedString {
    fn eq(&self, other: &Self) -> bool {
        self.full == other.full
    }
}

impl Eq for CroppedString {}

impl PartialEq<str> for CroppedString {
    fn eq(&self, other: &str) -> bool {
        self.full == other
    }
}

impl PartialEq<&str> for CroppedString {
    fn eq(&self, other: &&str) -> bool {
        self.full == *other
    }
}

impl fmt::Debug for CroppedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CroppedString")
            .field("full", &self.full)
            .field("cropped", &self.cropped)
            .field("width", &self.width)
            .field("start", &self.start)
            .finish()
    }
}

impl fmt::Display for CroppedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl From<&str> for CroppedString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CroppedString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────
