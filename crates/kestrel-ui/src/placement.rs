//! Per-edge placement rules.
//!
//! A [`Placement`] says, for each of a widget's four edges, how to derive
//! that edge's coordinate from the container's usable area, the previously
//! attached widget, or the widget's own opposite edge. The container stores
//! one placement per widget and resolves them in [`crate::layout`].

use std::fmt;

use crate::error::UiError;

// ── EdgeRule ──────────────────────────────────────────────────────────────

/// How one edge coordinate is derived.
///
/// Offsets are in pixels and y grows upwards, so "down" is negative. The
/// usable area's top-left corner is the origin.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum EdgeRule {
    /// The offset itself, measured from the origin.
    #[default]
    Absolute,
    /// Offset from the opposite edge of the usable area: right for x,
    /// bottom for y.
    FromOpposite,
    /// Offset from the previous widget's far edge (its right edge for x,
    /// its bottom edge for y). With no previous widget this is the origin.
    AfterPrev,
    /// Offset from the previous widget's same edge.
    SamePrev,
    /// Fixed length measured from this widget's opposite edge.
    FixedLen,
    /// Percent of the usable width (x) or height (y).
    Percent,
}

/// One edge: a rule plus its offset.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Edge {
    pub rule: EdgeRule,
    pub offset: i32,
}

impl Edge {
    #[inline]
    pub const fn new(rule: EdgeRule, offset: i32) -> Self {
        Self { rule, offset }
    }
}

/// Horizontal (left/right) or vertical (top/bottom).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        })
    }
}

// ── Placement ─────────────────────────────────────────────────────────────

/// Four edge rules for one widget.
///
/// The default is a full-width row, 15 px high, directly below the previous
/// widget.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub left: Edge,
    pub top: Edge,
    pub right: Edge,
    pub bottom: Edge,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            left:   Edge::new(EdgeRule::Absolute, 0),
            top:    Edge::new(EdgeRule::AfterPrev, 0),
            right:  Edge::new(EdgeRule::FromOpposite, 0),
            bottom: Edge::new(EdgeRule::FixedLen, 15),
        }
    }
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, rule: EdgeRule, offset: i32) -> Self {
        self.left = Edge::new(rule, offset);
        self
    }

    pub fn top(mut self, rule: EdgeRule, offset: i32) -> Self {
        self.top = Edge::new(rule, offset);
        self
    }

    pub fn right(mut self, rule: EdgeRule, offset: i32) -> Self {
        self.right = Edge::new(rule, offset);
        self
    }

    pub fn bottom(mut self, rule: EdgeRule, offset: i32) -> Self {
        self.bottom = Edge::new(rule, offset);
        self
    }

    /// Rejects placements whose two edges on one axis are both fixed-length.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.left.rule == EdgeRule::FixedLen && self.right.rule == EdgeRule::FixedLen {
            return Err(UiError::CircularFixedLength { axis: Axis::Horizontal });
        }
        if self.top.rule == EdgeRule::FixedLen && self.bottom.rule == EdgeRule::FixedLen {
            return Err(UiError::CircularFixedLength { axis: Axis::Vertical });
        }
        Ok(())
    }
}
