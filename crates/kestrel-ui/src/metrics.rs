use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use kestrel_engine::text::FontMetrics;

/// Shared handle to a container's font metrics.
///
/// Cloned into every cropped string and widget that measures text; all
/// clones see the same metrics.
#[derive(Clone)]
pub struct SharedMetrics(Rc<dyn FontMetrics>);

impl SharedMetrics {
    pub fn new(metrics: impl FontMetrics + 'static) -> Self {
        Self(Rc::new(metrics))
    }

    pub fn from_rc(metrics: Rc<dyn FontMetrics>) -> Self {
        Self(metrics)
    }
}

impl Deref for SharedMetrics {
    type Target = dyn FontMetrics;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for SharedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMetrics")
            .field("line_height", &self.0.line_height())
            .field("char_width", &self.0.char_width())
            .finish()
    }
}
