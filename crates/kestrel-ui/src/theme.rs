//! Per-container color roles.
//!
//! Widgets never hold global colors. Each [`Theme`] maps a [`ThemeColor`]
//! role to a [`Color`]; widgets without an explicit color fall back to the
//! role matching their kind.

use std::fmt;

use kestrel_engine::paint::{Color, HostColor};

/// Color roles used by the built-in widgets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ThemeColor {
    StdBg,
    StdFg,
    StdFgDisabled,
    FocusBorder,
    ButtonBg,
    ButtonFg,
    ColumnHeader,
    Selection,
    AlternateRow,
    ScrollbarBg,
    ScrollbarFg,
    EditBg,
    EditFg,
    Line,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 14] = [
        ThemeColor::StdBg,
        ThemeColor::StdFg,
        ThemeColor::StdFgDisabled,
        ThemeColor::FocusBorder,
        ThemeColor::ButtonBg,
        ThemeColor::ButtonFg,
        ThemeColor::ColumnHeader,
        ThemeColor::Selection,
        ThemeColor::AlternateRow,
        ThemeColor::ScrollbarBg,
        ThemeColor::ScrollbarFg,
        ThemeColor::EditBg,
        ThemeColor::EditFg,
        ThemeColor::Line,
    ];

    /// Key used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ThemeColor::StdBg => "std_bg",
            ThemeColor::StdFg => "std_fg",
            ThemeColor::StdFgDisabled => "std_fg_disabled",
            ThemeColor::FocusBorder => "focus_border",
            ThemeColor::ButtonBg => "button_bg",
            ThemeColor::ButtonFg => "button_fg",
            ThemeColor::ColumnHeader => "column_header",
            ThemeColor::Selection => "selection",
            ThemeColor::AlternateRow => "alternate_row",
            ThemeColor::ScrollbarBg => "scrollbar_bg",
            ThemeColor::ScrollbarFg => "scrollbar_fg",
            ThemeColor::EditBg => "edit_bg",
            ThemeColor::EditFg => "edit_fg",
            ThemeColor::Line => "line",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: [Color; ThemeColor::ALL.len()],
}

impl Default for Theme {
    fn default() -> Self {
        let mut t = Self { colors: [Color::Transparent; ThemeColor::ALL.len()] };
        t.set(ThemeColor::StdBg, Color::Transparent);
        t.set(ThemeColor::StdFg, Color::Host(HostColor::MenuText));
        t.set(ThemeColor::StdFgDisabled, Color::Host(HostColor::MenuTextDisabled));
        t.set(ThemeColor::FocusBorder, Color::rgba(0.0, 0.0, 0.5, 1.0));
        t.set(ThemeColor::ButtonBg, Color::rgba(0.0, 0.0, 0.0, 0.5));
        t.set(ThemeColor::ButtonFg, Color::Host(HostColor::MenuText));
        t.set(ThemeColor::ColumnHeader, Color::Host(HostColor::ListText));
        t.set(ThemeColor::Selection, Color::rgba(0.5, 0.5, 0.5, 0.5));
        t.set(ThemeColor::AlternateRow, Color::rgba(1.0, 1.0, 1.0, 0.1));
        t.set(ThemeColor::ScrollbarBg, Color::rgba(0.0, 0.0, 0.0, 0.3));
        t.set(ThemeColor::ScrollbarFg, Color::rgba(1.0, 1.0, 1.0, 0.5));
        t.set(ThemeColor::EditBg, Color::rgba(0.0, 0.0, 0.0, 0.3));
        t.set(ThemeColor::EditFg, Color::Host(HostColor::MenuText));
        t.set(ThemeColor::Line, Color::Host(HostColor::MenuText));
        t
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn color(&self, role: ThemeColor) -> Color {
        self.colors[role.index()]
    }

    pub fn set(&mut self, role: ThemeColor, color: Color) {
        self.colors[role.index()] = color;
    }

    pub fn with(mut self, role: ThemeColor, color: Color) -> Self {
        self.set(role, color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for role in ThemeColor::ALL {
            assert_eq!(ThemeColor::from_name(role.name()), Some(role));
        }
        assert_eq!(ThemeColor::from_name("nope"), None);
    }

    #[test]
    fn default_palette() {
        let t = Theme::default();
        assert_eq!(t.color(ThemeColor::StdBg), Color::Transparent);
        assert_eq!(t.color(ThemeColor::StdFg), Color::Host(HostColor::MenuText));
        assert_eq!(t.color(ThemeColor::AlternateRow), Color::rgba(1.0, 1.0, 1.0, 0.1));
    }

    #[test]
    fn override_one_role() {
        let t = Theme::new().with(ThemeColor::Selection, Color::RED);
        assert_eq!(t.color(ThemeColor::Selection), Color::RED);
        assert_eq!(t.color(ThemeColor::FocusBorder), Color::rgba(0.0, 0.0, 0.5, 1.0));
    }
}
