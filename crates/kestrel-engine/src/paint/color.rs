use std::fmt;
use std::str::FromStr;

/// Straight-alpha RGBA color, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Named colors supplied by the host.
///
/// The discriminant is the id carried in the first wire component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HostColor {
    BackgroundRgb = 0,
    MenuDark,
    MenuHilite,
    MenuLite,
    MenuText,
    MenuTextDisabled,
    SubtitleText,
    TabFront,
    TabBack,
    CaptionText,
    ListText,
    GlassText,
    PlanePath1,
    PlanePath2,
}

impl HostColor {
    pub const ALL: [HostColor; 14] = [
        HostColor::BackgroundRgb,
        HostColor::MenuDark,
        HostColor::MenuHilite,
        HostColor::MenuLite,
        HostColor::MenuText,
        HostColor::MenuTextDisabled,
        HostColor::SubtitleText,
        HostColor::TabFront,
        HostColor::TabBack,
        HostColor::CaptionText,
        HostColor::ListText,
        HostColor::GlassText,
        HostColor::PlanePath1,
        HostColor::PlanePath2,
    ];

    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Snake-case name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            HostColor::BackgroundRgb => "background_rgb",
            HostColor::MenuDark => "menu_dark",
            HostColor::MenuHilite => "menu_hilite",
            HostColor::MenuLite => "menu_lite",
            HostColor::MenuText => "menu_text",
            HostColor::MenuTextDisabled => "menu_text_disabled",
            HostColor::SubtitleText => "subtitle_text",
            HostColor::TabFront => "tab_front",
            HostColor::TabBack => "tab_back",
            HostColor::CaptionText => "caption_text",
            HostColor::ListText => "list_text",
            HostColor::GlassText => "glass_text",
            HostColor::PlanePath1 => "plane_path1",
            HostColor::PlanePath2 => "plane_path2",
        }
    }
}

impl fmt::Display for HostColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`HostColor`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown host color name: {0}")]
pub struct UnknownHostColor(pub String);

impl FromStr for HostColor {
    type Err = UnknownHostColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownHostColor(s.to_string()))
    }
}

/// A drawable color: a literal value, a host-named color, or nothing at all.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Color {
    /// Drawing with this color is skipped.
    Transparent,
    Rgba(Rgba),
    Host(HostColor),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color::Rgba(Rgba::new(r, g, b, 1.0))
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color::Rgba(Rgba::new(r, g, b, a))
    }

    /// `false` for colors that would not paint anything.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Color::Transparent)
    }

    /// Encodes into the 4-float host convention.
    ///
    /// - literal colors pass through unchanged
    /// - host colors put their id into `r` and zero into `a`
    /// - transparent is `(-1, -1, -1, 0)`
    pub fn to_wire(self) -> [f32; 4] {
        match self {
            Color::Transparent => [-1.0, -1.0, -1.0, 0.0],
            Color::Rgba(c) => c.to_array(),
            Color::Host(h) => [h.id() as f32, 0.0, 0.0, 0.0],
        }
    }

    /// Decodes the 4-float host convention.
    ///
    /// Near-zero alpha with a non-negative first component names a host
    /// color; an unknown id, or a negative first component, decodes as
    /// transparent.
    pub fn from_wire(w: [f32; 4]) -> Color {
        let [r, g, b, a] = w;
        if a < 0.01 {
            if r >= 0.0 {
                if let Some(h) = HostColor::from_id(r as u32) {
                    return Color::Host(h);
                }
            }
            return Color::Transparent;
        }
        Color::rgba(r, g, b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Transparent
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<HostColor> for Color {
    fn from(h: HostColor) -> Self {
        Color::Host(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── wire convention ───────────────────────────────────────────────────

    #[test]
    fn literal_passes_through() {
        let c = Color::rgba(0.0, 0.4, 0.8, 1.0);
        assert_eq!(c.to_wire(), [0.0, 0.4, 0.8, 1.0]);
        assert_eq!(Color::from_wire(c.to_wire()), c);
    }

    #[test]
    fn host_color_encodes_id_in_first_component() {
        let w = Color::Host(HostColor::ListText).to_wire();
        assert_eq!(w, [10.0, 0.0, 0.0, 0.0]);
        assert_eq!(Color::from_wire(w), Color::Host(HostColor::ListText));
    }

    #[test]
    fn negative_first_component_is_transparent() {
        assert_eq!(Color::from_wire([-1.0, -1.0, -1.0, 0.0]), Color::Transparent);
        assert!(!Color::Transparent.is_visible());
    }

    #[test]
    fn unknown_host_id_is_transparent() {
        assert_eq!(Color::from_wire([99.0, 0.0, 0.0, 0.0]), Color::Transparent);
    }

    // ── names ─────────────────────────────────────────────────────────────

    #[test]
    fn host_names_parse_back() {
        for h in HostColor::ALL {
            assert_eq!(h.name().parse::<HostColor>(), Ok(h));
        }
        assert!("chartreuse".parse::<HostColor>().is_err());
    }

    #[test]
    fn ids_are_dense() {
        for (i, h) in HostColor::ALL.iter().enumerate() {
            assert_eq!(h.id() as usize, i);
            assert_eq!(HostColor::from_id(i as u32), Some(*h));
        }
        assert_eq!(HostColor::from_id(14), None);
    }
}
