//! Resolves placements into widget rectangles.
//!
//! [`resolve`] is a pure function of the usable size and the ordered
//! placement list, so the same inputs always produce the same rectangles.
//!
//! Coordinates are relative to the usable area's top-left corner with y
//! growing upwards: a widget below the top edge has negative y values.

use kestrel_engine::coords::Rect;

use crate::placement::{EdgeRule, Placement};

/// Reference rectangle that an invalid widget leaves for its successor's
/// `AfterPrev` / `SamePrev` edges.
const INVALID_REF: (i32, i32, i32, i32) = (-1, -1, -1, -1);

/// Resolves every placement in order.
///
/// `width` and `height` are the usable size (container size minus the frame
/// on both sides). Entry `i` is `None` when widget `i` resolves to an
/// inverted rectangle (left > right or bottom > top); such widgets are
/// neither drawn nor hit-tested.
pub fn resolve(width: i32, height: i32, placements: &[Placement]) -> Vec<Option<Rect>> {
    let mut out = Vec::with_capacity(placements.len());
    // (left, top, right, bottom) of the previous widget
    let mut prev: Option<(i32, i32, i32, i32)> = None;

    for p in placements {
        let (pl, pt, pr, pb) = prev.unwrap_or((0, 0, 0, 0));

        let mut left = p.left.offset;
        match p.left.rule {
            EdgeRule::FromOpposite => left += width,
            EdgeRule::AfterPrev => left += pr,
            EdgeRule::SamePrev => left += pl,
            EdgeRule::Percent => left = width * p.left.offset / 100,
            EdgeRule::Absolute | EdgeRule::FixedLen => {}
        }

        let mut top = p.top.offset;
        match p.top.rule {
            EdgeRule::FromOpposite => top -= height,
            EdgeRule::AfterPrev => top += pb,
            EdgeRule::SamePrev => top += pt,
            EdgeRule::Percent => top = -height * p.top.offset / 100,
            EdgeRule::Absolute | EdgeRule::FixedLen => {}
        }

        let mut right = p.right.offset;
        match p.right.rule {
            EdgeRule::FromOpposite => right += width,
            EdgeRule::AfterPrev | EdgeRule::SamePrev => right += pr,
            EdgeRule::FixedLen => right += left,
            EdgeRule::Percent => right = width * p.right.offset / 100,
            EdgeRule::Absolute => {}
        }

        let mut bottom = p.bottom.offset;
        match p.bottom.rule {
            EdgeRule::FromOpposite => bottom -= height,
            EdgeRule::AfterPrev | EdgeRule::SamePrev => bottom += pb,
            EdgeRule::FixedLen => bottom = top - p.bottom.offset,
            EdgeRule::Percent => bottom = -height * p.bottom.offset / 100,
            EdgeRule::Absolute => {}
        }

        // fixed-length near edges hang off the already resolved far edge
        if p.left.rule == EdgeRule::FixedLen {
            left = right - p.left.offset;
        }
        if p.top.rule == EdgeRule::FixedLen {
            top = bottom + p.top.offset;
        }

        if left > right || bottom > top {
            log::trace!("layout: placement {p:?} resolves to an inverted rectangle");
            out.push(None);
            prev = Some(INVALID_REF);
        } else {
            out.push(Some(Rect::new(left, top, right, bottom)));
            prev = Some((left, top, right, bottom));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(r: Option<Rect>) -> (i32, i32, i32, i32) {
        let r = r.expect("valid rect");
        (r.left(), r.top(), r.right(), r.bottom())
    }

    // ── single rules ──────────────────────────────────────────────────────

    #[test]
    fn default_placements_stack_rows() {
        let out = resolve(200, 100, &[Placement::default(), Placement::default()]);
        assert_eq!(rect(out[0]), (0, 0, 200, -15));
        assert_eq!(rect(out[1]), (0, -15, 200, -30));
    }

    #[test]
    fn from_opposite_measures_from_far_edges() {
        let p = Placement::new()
            .left(EdgeRule::FromOpposite, -50)
            .top(EdgeRule::FromOpposite, 20)
            .right(EdgeRule::FromOpposite, 0)
            .bottom(EdgeRule::FromOpposite, 0);
        let out = resolve(200, 100, &[p]);
        assert_eq!(rect(out[0]), (150, -80, 200, -100));
    }

    #[test]
    fn fixed_length_near_edges_hang_off_far_edges() {
        let p = Placement::new()
            .left(EdgeRule::FixedLen, 60)
            .top(EdgeRule::FixedLen, 15)
            .right(EdgeRule::FromOpposite, 0)
            .bottom(EdgeRule::FromOpposite, 0);
        let out = resolve(300, 200, &[p]);
        assert_eq!(rect(out[0]), (240, -185, 300, -200));
    }

    #[test]
    fn percent_scales_usable_size() {
        let p = Placement::new()
            .left(EdgeRule::Absolute, 0)
            .top(EdgeRule::Percent, 10)
            .right(EdgeRule::Percent, 80)
            .bottom(EdgeRule::Percent, 50);
        let out = resolve(250, 200, &[p]);
        assert_eq!(rect(out[0]), (0, -20, 200, -100));
    }

    #[test]
    fn same_prev_and_after_prev_follow_previous_widget() {
        let first = Placement::new()
            .left(EdgeRule::Absolute, 10)
            .top(EdgeRule::Absolute, -5)
            .right(EdgeRule::FixedLen, 40)
            .bottom(EdgeRule::FixedLen, 20);
        let beside = Placement::new()
            .left(EdgeRule::AfterPrev, 5)
            .top(EdgeRule::SamePrev, 0)
            .right(EdgeRule::FixedLen, 30)
            .bottom(EdgeRule::SamePrev, 0);
        let out = resolve(200, 100, &[first, beside]);
        assert_eq!(rect(out[0]), (10, -5, 50, -25));
        assert_eq!(rect(out[1]), (55, -5, 85, -25));
    }

    #[test]
    fn after_prev_without_previous_starts_at_origin() {
        let p = Placement::new().left(EdgeRule::AfterPrev, 4).top(EdgeRule::AfterPrev, -2);
        let out = resolve(100, 100, &[p]);
        assert_eq!(rect(out[0]), (4, -2, 100, -17));
    }

    // ── invalid results ───────────────────────────────────────────────────

    #[test]
    fn inverted_result_is_invalid_and_leaves_sentinel_reference() {
        let bad = Placement::new().left(EdgeRule::Absolute, 150).right(EdgeRule::Absolute, 100);
        let next = Placement::new().left(EdgeRule::SamePrev, 1);
        let out = resolve(200, 100, &[bad, next]);
        assert!(out[0].is_none());
        // left = -1 + 1, top = bottom of sentinel (-1)
        assert_eq!(rect(out[1]), (0, -1, 200, -16));
    }

    #[test]
    fn too_small_area_invalidates_from_opposite_rows() {
        let p = Placement::new()
            .top(EdgeRule::Absolute, -50)
            .bottom(EdgeRule::FromOpposite, 0);
        let out = resolve(200, 20, &[p]);
        assert!(out[0].is_none());
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn identical_inputs_give_identical_rects() {
        let ps = [
            Placement::default(),
            Placement::new().top(EdgeRule::AfterPrev, 20).right(EdgeRule::Percent, 80).bottom(EdgeRule::FromOpposite, 90),
            Placement::new().left(EdgeRule::AfterPrev, 10).top(EdgeRule::SamePrev, 0).right(EdgeRule::FromOpposite, 0),
        ];
        let a = resolve(540, 290, &ps);
        let b = resolve(540, 290, &ps);
        assert_eq!(a, b);
    }
}
