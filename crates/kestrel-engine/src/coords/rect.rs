use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::Point;

/// Axis-aligned integer rectangle in y-up space.
///
/// Invariant: `bl.x <= tr.x` and `bl.y <= tr.y`. Every constructor and setter
/// normalizes by swapping coordinates that ended up on the wrong side.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    bl: Point,
    tr: Point,
}

impl Rect {
    /// Builds a rectangle from its four edges.
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::from_corners(Point::new(left, bottom), Point::new(right, top))
    }

    #[inline]
    pub fn from_corners(bl: Point, tr: Point) -> Self {
        let mut r = Self { bl, tr };
        r.normalize();
        r
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn left(&self) -> i32 {
        self.bl.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bl.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.tr.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.tr.y
    }

    #[inline]
    pub fn bl(&self) -> Point {
        self.bl
    }

    #[inline]
    pub fn tr(&self) -> Point {
        self.tr
    }

    #[inline]
    pub fn tl(&self) -> Point {
        Point::new(self.bl.x, self.tr.y)
    }

    #[inline]
    pub fn br(&self) -> Point {
        Point::new(self.tr.x, self.bl.y)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.tr.x - self.bl.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.tr.y - self.bl.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.bl.x + self.tr.x) / 2, (self.bl.y + self.tr.y) / 2)
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.bl.x <= self.tr.x && self.bl.y <= self.tr.y
    }

    // ── setters (each one re-normalizes) ──────────────────────────────────

    pub fn set_left(&mut self, v: i32) {
        self.bl.x = v;
        self.normalize();
    }

    pub fn set_bottom(&mut self, v: i32) {
        self.bl.y = v;
        self.normalize();
    }

    pub fn set_right(&mut self, v: i32) {
        self.tr.x = v;
        self.normalize();
    }

    pub fn set_top(&mut self, v: i32) {
        self.tr.y = v;
        self.normalize();
    }

    pub fn set_bl(&mut self, p: Point) {
        self.bl = p;
        self.normalize();
    }

    pub fn set_tr(&mut self, p: Point) {
        self.tr = p;
        self.normalize();
    }

    /// Moves the right edge so the rectangle is `w` wide.
    pub fn set_width(&mut self, w: i32) {
        let right = self.left() + w;
        self.set_right(right);
    }

    /// Moves the bottom edge so the rectangle is `h` high.
    pub fn set_height(&mut self, h: i32) {
        let bottom = self.top() - h;
        self.set_bottom(bottom);
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Inclusive containment: all four edges belong to the rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bl.x <= p.x && p.x <= self.tr.x && self.bl.y <= p.y && p.y <= self.tr.y
    }

    /// True if `other` lies completely inside `self` (edges inclusive).
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.bl) && self.contains(other.tr)
    }

    /// Returns a copy shrunk by `d` on every side (never inverted).
    #[must_use]
    pub fn inset(&self, d: i32) -> Rect {
        let cx = self.center();
        let l = (self.left() + d).min(cx.x);
        let r = (self.right() - d).max(cx.x);
        let b = (self.bottom() + d).min(cx.y);
        let t = (self.top() - d).max(cx.y);
        Rect::new(l, t, r, b)
    }

    fn normalize(&mut self) {
        if self.bl.x > self.tr.x {
            core::mem::swap(&mut self.bl.x, &mut self.tr.x);
        }
        if self.bl.y > self.tr.y {
            core::mem::swap(&mut self.bl.y, &mut self.tr.y);
        }
    }
}

impl Add<Point> for Rect {
    type Output = Rect;
    #[inline]
    fn add(self, ofs: Point) -> Rect {
        Rect { bl: self.bl + ofs, tr: self.tr + ofs }
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;
    #[inline]
    fn sub(self, ofs: Point) -> Rect {
        Rect { bl: self.bl - ofs, tr: self.tr - ofs }
    }
}

impl AddAssign<Point> for Rect {
    #[inline]
    fn add_assign(&mut self, ofs: Point) {
        *self = *self + ofs;
    }
}

impl SubAssign<Point> for Rect {
    #[inline]
    fn sub_assign(&mut self, ofs: Point) {
        *self = *self - ofs;
    }
}
