use std::fmt;

/// Keyboard key identifier.
///
/// Only the keys the widget layer reacts to by name are listed. Everything
/// else arrives as `Key::Char` (printable) or `Key::Unknown` with the host's
/// virtual key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Return,
    /// Enter on the numeric keypad.
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Clear,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// A key producing a printable character; the character itself travels
    /// in [`KeyEvent::ch`].
    Char,

    /// Host key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    /// Auto-repeat while held.
    Repeat,
    Released,
}

impl KeyState {
    /// Pressed or auto-repeated.
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Repeat)
    }
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }

    /// Exactly the given set is held, nothing else.
    pub fn only(&self, other: Modifiers) -> bool {
        *self == other
    }
}

/// A single keyboard event as delivered by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    /// Character produced by the key, if any.
    pub ch: Option<char>,
    pub state: KeyState,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self { key, ch: None, state: KeyState::Pressed, modifiers: Modifiers::NONE }
    }

    pub fn released(key: Key) -> Self {
        Self { key, ch: None, state: KeyState::Released, modifiers: Modifiers::NONE }
    }

    /// Printable character typed (press).
    pub fn typed(ch: char) -> Self {
        let key = if ch == ' ' { Key::Space } else { Key::Char };
        Self { key, ch: Some(ch), state: KeyState::Pressed, modifiers: Modifiers::NONE }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Pressed (or repeated) with no modifier held.
    pub fn is_plain_down(&self) -> bool {
        self.state.is_down() && !self.modifiers.any()
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// Phase of a pointer gesture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseStatus {
    Down,
    Drag,
    Up,
}

/// Cursor shape a widget asks the host for.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CursorShape {
    /// Let the host decide.
    #[default]
    Default,
    Arrow,
    Hidden,
    /// Text insertion beam.
    IBeam,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
