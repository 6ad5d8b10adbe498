use crate::coords::Rect;

/// The host window a container draws into.
///
/// Creation and destruction belong to the host; a container receives a
/// surface that is already valid.
pub trait Surface {
    /// Current window rectangle in host (y-up) coordinates.
    fn geometry(&self) -> Rect;

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);

    /// Whether the window currently receives keyboard input.
    fn has_keyboard_focus(&self) -> bool;
    fn take_keyboard_focus(&mut self, take: bool);
}

/// In-memory surface with settable geometry.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pub geometry: Rect,
    pub visible: bool,
    pub title: String,
    pub keyboard_focus: bool,
}

impl HeadlessSurface {
    pub fn new(geometry: Rect) -> Self {
        Self { geometry, visible: true, ..Self::default() }
    }
}

impl Surface for HeadlessSurface {
    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn has_keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    fn take_keyboard_focus(&mut self, take: bool) {
        self.keyboard_focus = take;
    }
}
