//! Keyboard focus routing.
//!
//! [`FocusRouter`] lives on the container and decides which attached widget
//! receives keyboard input.
//!
//! # How focus moves
//!
//! 1. Each widget answers [`FocusChange`] requests through [`Focusable`].
//!    `First`/`Last` ask it to take focus; `Next`/`Prev` ask it to move its
//!    own internal focus and report whether it still holds focus; `Lose`
//!    takes focus away.
//! 2. On Tab the router first offers `Next` (or `Prev`) to the current
//!    widget. Only when that widget gives focus up does the router walk the
//!    attachment order, wrapping around once, and offer `First` (or `Last`)
//!    to each visible, enabled widget until one accepts.
//! 3. A pointer-down on a widget that does not hold focus offers it `First`;
//!    if it accepts, the old focus widget is told `Lose`, and whatever the
//!    old widget posts is queued ahead of what the new one posts.

use crate::event::UiMessage;

/// Focus transition requested of a widget.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FocusChange {
    Lose,
    First,
    Next,
    Last,
    Prev,
}

/// Direction of a traversal step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Traverse {
    Forward,
    Backward,
}

/// What the router needs from each attached widget.
pub trait Focusable {
    /// Visible and enabled.
    fn can_focus(&self) -> bool;

    /// Applies `change` and returns whether the widget holds focus afterwards.
    fn focus_change(&mut self, change: FocusChange, out: &mut Vec<UiMessage>) -> bool;
}

// ── FocusRouter ───────────────────────────────────────────────────────────

/// Index of the focus widget within the container's attachment order.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct FocusRouter {
    current: Option<usize>,
}

impl FocusRouter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[inline]
    pub fn is_focused(&self, idx: usize) -> bool {
        self.current == Some(idx)
    }

    /// Moves focus one step, delegating to the current widget first.
    pub fn traverse<F: Focusable>(&mut self, items: &mut [F], dir: Traverse, out: &mut Vec<UiMessage>) {
        let n = items.len();
        let order: Vec<usize> = match dir {
            Traverse::Forward => (0..n).collect(),
            Traverse::Backward => (0..n).rev().collect(),
        };
        let (step, landing) = match dir {
            Traverse::Forward => (FocusChange::Next, FocusChange::First),
            Traverse::Backward => (FocusChange::Prev, FocusChange::Last),
        };

        let mut start = n;
        if let Some(cur) = self.current.filter(|&c| c < n) {
            if !items[cur].can_focus() {
                items[cur].focus_change(FocusChange::Lose, out);
            } else if items[cur].focus_change(step, out) {
                return;
            }
            start = order.iter().position(|&i| i == cur).map_or(n, |p| p + 1);
            self.current = None;
        }

        // the rest of the order, then once around from the beginning
        for range in [start..n, 0..n] {
            for &i in &order[range] {
                if items[i].can_focus() && items[i].focus_change(landing, out) {
                    log::debug!("focus → widget {i} ({dir:?})");
                    self.current = Some(i);
                    return;
                }
            }
        }
        log::debug!("focus: no widget accepts focus");
    }

    /// Pointer-down on `idx`: offers it focus if it does not hold it yet.
    pub fn pointer_down<F: Focusable>(&mut self, items: &mut [F], idx: usize, out: &mut Vec<UiMessage>) {
        if self.current == Some(idx) || idx >= items.len() {
            return;
        }
        // the old widget's messages go out before the new one's
        let mut gained = Vec::new();
        if items[idx].focus_change(FocusChange::First, &mut gained) {
            if let Some(old) = self.current.filter(|&o| o < items.len()) {
                items[old].focus_change(FocusChange::Lose, out);
            }
            log::debug!("focus → widget {idx} (pointer)");
            self.current = Some(idx);
        }
        out.append(&mut gained);
    }

    /// Drops focus entirely; the focus widget is always told it lost it.
    pub fn drop_focus<F: Focusable>(&mut self, items: &mut [F], out: &mut Vec<UiMessage>) {
        if let Some(cur) = self.current.take() {
            if cur < items.len() {
                items[cur].focus_change(FocusChange::Lose, out);
            }
            log::debug!("focus dropped from widget {cur}");
        }
    }

    /// Tells the focus widget it lost focus but keeps it as the target,
    /// e.g. when the whole window loses keyboard focus.
    pub fn notify_lost<F: Focusable>(&self, items: &mut [F], out: &mut Vec<UiMessage>) {
        if let Some(cur) = self.current.filter(|&c| c < items.len()) {
            items[cur].focus_change(FocusChange::Lose, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::WidgetId;

    /// Accepts First/Last, gives up on Next/Prev, logs every request.
    #[derive(Default)]
    struct Simple {
        usable: bool,
        log: Vec<FocusChange>,
    }

    impl Simple {
        fn on() -> Self {
            Self { usable: true, log: Vec::new() }
        }
    }

    impl Focusable for Simple {
        fn can_focus(&self) -> bool {
            self.usable
        }
        fn focus_change(&mut self, change: FocusChange, _out: &mut Vec<UiMessage>) -> bool {
            self.log.push(change);
            matches!(change, FocusChange::First | FocusChange::Last)
        }
    }

    /// Holds `fields` internal positions, like a button group.
    struct Group {
        fields: usize,
        at: Option<usize>,
    }

    impl Focusable for Group {
        fn can_focus(&self) -> bool {
            true
        }
        fn focus_change(&mut self, change: FocusChange, _out: &mut Vec<UiMessage>) -> bool {
            self.at = match (change, self.at) {
                (FocusChange::First, _) => Some(0),
                (FocusChange::Last, _) => Some(self.fields - 1),
                (FocusChange::Next, Some(i)) if i + 1 < self.fields => Some(i + 1),
                (FocusChange::Prev, Some(i)) if i > 0 => Some(i - 1),
                _ => None,
            };
            self.at.is_some()
        }
    }

    // ── traversal ─────────────────────────────────────────────────────────

    #[test]
    fn forward_wraps_around_once() {
        let mut items = vec![Simple::on(), Simple::on(), Simple::on()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();

        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), Some(0));
        router.traverse(&mut items, Traverse::Forward, &mut out);
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), Some(2));
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), Some(0));
    }

    #[test]
    fn backward_from_nothing_lands_on_last() {
        let mut items = vec![Simple::on(), Simple::on(), Simple::on()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();

        router.traverse(&mut items, Traverse::Backward, &mut out);
        assert_eq!(router.current(), Some(2));
        assert_eq!(items[2].log, vec![FocusChange::Last]);
        router.traverse(&mut items, Traverse::Backward, &mut out);
        assert_eq!(router.current(), Some(1));
    }

    #[test]
    fn unusable_widgets_are_skipped() {
        let mut items = vec![Simple::on(), Simple::default(), Simple::on()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();

        router.traverse(&mut items, Traverse::Forward, &mut out);
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), Some(2));
        assert!(items[1].log.is_empty());
    }

    #[test]
    fn focus_widget_that_became_unusable_is_told_to_lose() {
        let mut items = vec![Simple::on(), Simple::on()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();

        router.traverse(&mut items, Traverse::Forward, &mut out);
        items[0].usable = false;
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), Some(1));
        assert_eq!(items[0].log, vec![FocusChange::First, FocusChange::Lose]);
    }

    #[test]
    fn nothing_focusable_leaves_no_focus() {
        let mut items = vec![Simple::default(), Simple::default()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), None);
    }

    // ── delegation ────────────────────────────────────────────────────────

    #[test]
    fn group_keeps_focus_until_its_fields_run_out() {
        let mut items = vec![Group { fields: 3, at: None }, Group { fields: 1, at: None }];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();

        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!((router.current(), items[0].at), (Some(0), Some(0)));
        router.traverse(&mut items, Traverse::Forward, &mut out);
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!((router.current(), items[0].at), (Some(0), Some(2)));
        router.traverse(&mut items, Traverse::Forward, &mut out);
        assert_eq!(router.current(), Some(1));
        assert_eq!(items[0].at, None);

        // going back lands on the group's last field
        router.traverse(&mut items, Traverse::Backward, &mut out);
        assert_eq!((router.current(), items[0].at), (Some(0), Some(2)));
    }

    // ── pointer / drop ────────────────────────────────────────────────────

    #[test]
    fn pointer_down_transfers_focus() {
        let mut items = vec![Simple::on(), Simple::on()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();

        router.pointer_down(&mut items, 0, &mut out);
        router.pointer_down(&mut items, 1, &mut out);
        assert_eq!(router.current(), Some(1));
        assert_eq!(items[0].log, vec![FocusChange::First, FocusChange::Lose]);

        // repeated pointer-down on the focus widget asks nothing
        router.pointer_down(&mut items, 1, &mut out);
        assert_eq!(items[1].log, vec![FocusChange::First]);
    }

    /// Posts a message whenever it is told to take or lose focus.
    struct Noisy(WidgetId);

    impl Focusable for Noisy {
        fn can_focus(&self) -> bool {
            true
        }
        fn focus_change(&mut self, change: FocusChange, out: &mut Vec<UiMessage>) -> bool {
            match change {
                FocusChange::First => {
                    out.push(UiMessage::ButtonClicked { id: self.0 });
                    true
                }
                FocusChange::Lose => {
                    out.push(UiMessage::EditFieldChanged { id: self.0, text: "old".into() });
                    false
                }
                _ => false,
            }
        }
    }

    #[test]
    fn old_widget_posts_before_new_one_on_pointer_down() {
        let mut items = vec![Noisy(WidgetId(1)), Noisy(WidgetId(2))];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();
        router.pointer_down(&mut items, 0, &mut out);
        out.clear();

        router.pointer_down(&mut items, 1, &mut out);
        assert_eq!(router.current(), Some(1));
        assert_eq!(
            out,
            vec![
                UiMessage::EditFieldChanged { id: WidgetId(1), text: "old".into() },
                UiMessage::ButtonClicked { id: WidgetId(2) },
            ]
        );
    }

    #[test]
    fn drop_and_notify() {
        let mut items = vec![Simple::on()];
        let mut router = FocusRouter::new();
        let mut out = Vec::new();
        router.pointer_down(&mut items, 0, &mut out);

        router.notify_lost(&mut items, &mut out);
        assert_eq!(router.current(), Some(0));

        router.drop_focus(&mut items, &mut out);
        assert_eq!(router.current(), None);
        assert_eq!(items[0].log, vec![FocusChange::First, FocusChange::Lose, FocusChange::Lose]);
    }
}
