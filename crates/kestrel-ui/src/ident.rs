use std::fmt;

/// Identifier the container assigns to a widget when it is attached.
///
/// `0` is reserved for the container itself.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WidgetId(pub u32);

impl WidgetId {
    pub const CONTAINER: WidgetId = WidgetId(0);

    #[inline]
    pub fn is_container(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque application-supplied identity token for list rows and button
/// elements. [`RefCon::NULL`] never identifies anything.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RefCon(pub u64);

impl RefCon {
    pub const NULL: RefCon = RefCon(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for RefCon {
    fn from(v: u64) -> Self {
        RefCon(v)
    }
}

impl fmt::Display for RefCon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refcon:{}", self.0)
    }
}
