use crate::ident::WidgetId;
use crate::placement::Axis;

/// Errors reported by container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// Both edges of one axis are fixed-length, so each would be measured
    /// from the other and neither can be resolved.
    #[error("both {axis} edges are fixed-length; the rectangle cannot be resolved")]
    CircularFixedLength { axis: Axis },

    #[error("no widget with id {0}")]
    UnknownWidget(WidgetId),

    #[error("widget {id} is not a {expected}")]
    WrongWidgetKind { id: WidgetId, expected: &'static str },
}
