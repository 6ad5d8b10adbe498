use crate::coords::{Point, Rect};
use crate::paint::Color;

/// One recorded drawing primitive, with the state it was drawn in.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Lines { color: Color, width: f32, points: Vec<Point> },
    LineStrip { color: Color, width: f32, points: Vec<Point> },
    FillRect { color: Color, rect: Rect },
    Polygon { color: Color, points: Vec<Point> },
    Text { color: Color, origin: Point, text: String },
}

impl DrawCmd {
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::Lines { color, .. }
            | DrawCmd::LineStrip { color, .. }
            | DrawCmd::FillRect { color, .. }
            | DrawCmd::Polygon { color, .. }
            | DrawCmd::Text { color, .. } => *color,
        }
    }

    /// The string of a text command.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCmd::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
