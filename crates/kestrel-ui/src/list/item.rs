use kestrel_engine::paint::Color;

use crate::cropped::CroppedString;

/// Decimals used when a double is converted without an explicit precision.
pub const DEFAULT_PRECISION: usize = 2;

/// One cell of a list row.
///
/// Always carries display text. The numeric value that matters is the one
/// the column's [`DataType`](super::DataType) names; the others are left
/// at whatever the last setter produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    text: CroppedString,
    int: i64,
    double: f64,
    /// Check box cells only: can the user toggle it?
    enabled: bool,
    color: Option<Color>,
}

impl ListItem {
    pub fn text(s: impl Into<String>) -> Self {
        Self { text: CroppedString::new(s), int: 0, double: 0.0, enabled: true, color: None }
    }

    pub fn int(v: i64) -> Self {
        let mut item = Self::text("");
        item.set_int(v);
        item
    }

    pub fn check(v: bool) -> Self {
        let mut item = Self::text("");
        item.set_checked(v);
        item
    }

    pub fn double(v: f64, precision: usize) -> Self {
        let mut item = Self::text("");
        item.set_double(v, precision);
        item
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    // ── values ────────────────────────────────────────────────────────────

    pub fn set_text(&mut self, s: impl Into<String>) {
        self.text.set(s);
    }

    pub fn set_int(&mut self, v: i64) {
        self.int = v;
        self.text.set(v.to_string());
    }

    /// Check box value; displayed as "X" or a blank.
    pub fn set_checked(&mut self, v: bool) {
        self.int = i64::from(v);
        self.text.set(if v { "X" } else { " " });
    }

    pub fn set_double(&mut self, v: f64, precision: usize) {
        self.double = v;
        self.text.set(format!("{v:.precision$}"));
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.full()
    }

    /// Text cut to the column width.
    #[inline]
    pub fn cropped(&self) -> &str {
        self.text.cropped()
    }

    #[inline]
    pub fn as_int(&self) -> i64 {
        self.int
    }

    #[inline]
    pub fn as_double(&self) -> f64 {
        self.double
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.int != 0
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn text_color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub(crate) fn cell_text_mut(&mut self) -> &mut CroppedString {
        &mut self.text
    }
}

impl From<&str> for ListItem {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for ListItem {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<i64> for ListItem {
    fn from(v: i64) -> Self {
        Self::int(v)
    }
}

impl From<i32> for ListItem {
    fn from(v: i32) -> Self {
        Self::int(i64::from(v))
    }
}

impl From<bool> for ListItem {
    fn from(v: bool) -> Self {
        Self::check(v)
    }
}

impl From<f64> for ListItem {
    fn from(v: f64) -> Self {
        Self::double(v, DEFAULT_PRECISION)
    }
}

impl PartialEq<str> for ListItem {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ListItem {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_fill_text() {
        assert_eq!(ListItem::from(186).as_str(), "186");
        assert_eq!(ListItem::from(186).as_int(), 186);
        assert_eq!(ListItem::from(true).as_str(), "X");
        assert_eq!(ListItem::from(false).as_str(), " ");
        assert_eq!(ListItem::from(1.5).as_str(), "1.50");
        assert_eq!(ListItem::double(2.0 / 3.0, 3).as_str(), "0.667");
        assert_eq!(ListItem::from("Cessna"), "Cessna");
    }

    #[test]
    fn check_state_follows_int() {
        let mut item = ListItem::check(false);
        assert!(!item.is_checked());
        item.set_checked(true);
        assert!(item.is_checked());
        assert_eq!(item.as_int(), 1);
        assert!(item.is_enabled());
        assert!(!ListItem::check(true).enabled(false).is_enabled());
    }
}
