//! Single-open project drawer.
//!
//! One drawer node is shared by every card. On wide viewports it is slotted
//! after the last card in the open card's grid row so the row stays intact;
//! below the breakpoint the grid is one column and the drawer sits directly
//! under the clicked card.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
pub enum DrawerAction {
    Toggle(usize),
    Close,
    /// Card list shrank; drop an open index that no longer exists.
    Retain(usize),
}

impl Reducible for DrawerState {
    type Action = DrawerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            DrawerAction::Toggle(i) if self.open == Some(i) => None,
            DrawerAction::Toggle(i) => Some(i),
            DrawerAction::Close => None,
            DrawerAction::Retain(count) => self.open.filter(|&i| i < count),
        };
        if open == self.open {
            return self;
        }
        Rc::new(DrawerState { open })
    }
}

impl DrawerState {
    pub fn is_open(&self, i: usize) -> bool {
        self.open == Some(i)
    }
}

pub fn layout_columns(viewport_width: f64, breakpoint_px: f64, measured: usize) -> usize {
    if viewport_width < breakpoint_px {
        1
    } else {
        measured.max(1)
    }
}

/// Cards in the first grid row share the first card's top.
pub fn columns_from_tops(tops: &[f64]) -> usize {
    let Some(&first) = tops.first() else {
        return 1;
    };
    tops.iter()
        .take_while(|&&t| (t - first).abs() <= 1.0)
        .count()
        .max(1)
}

/// Index of the card the drawer follows.
pub fn drawer_anchor(open: usize, columns: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let row_end = (open / columns + 1) * columns - 1;
    row_end.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: DrawerState, action: DrawerAction) -> DrawerState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn toggle_opens_then_closes() {
        let s = reduce(DrawerState::default(), DrawerAction::Toggle(2));
        assert_eq!(s.open, Some(2));
        let s = reduce(s, DrawerAction::Toggle(2));
        assert_eq!(s.open, None);
    }

    #[test]
    fn opening_another_card_closes_the_first() {
        let s = reduce(DrawerState::default(), DrawerAction::Toggle(0));
        let s = reduce(s, DrawerAction::Toggle(3));
        assert_eq!(s.open, Some(3));
        assert!(!s.is_open(0));
    }

    #[test]
    fn close_when_closed_keeps_the_same_state() {
        let prev = Rc::new(DrawerState::default());
        let next = prev.clone().reduce(DrawerAction::Close);
        assert!(Rc::ptr_eq(&prev, &next));
    }

    #[test]
    fn retain_drops_stale_index() {
        let s = reduce(DrawerState { open: Some(4) }, DrawerAction::Retain(3));
        assert_eq!(s.open, None);
        let s = reduce(DrawerState { open: Some(1) }, DrawerAction::Retain(3));
        assert_eq!(s.open, Some(1));
    }

    #[test]
    fn narrow_viewport_is_single_column() {
        assert_eq!(layout_columns(600.0, 900.0, 3), 1);
        assert_eq!(layout_columns(1200.0, 900.0, 3), 3);
        assert_eq!(layout_columns(1200.0, 900.0, 0), 1);
    }

    #[test]
    fn columns_counted_from_first_row() {
        assert_eq!(columns_from_tops(&[100.0, 100.0, 100.5, 420.0, 420.0]), 3);
        assert_eq!(columns_from_tops(&[100.0, 400.0]), 1);
        assert_eq!(columns_from_tops(&[]), 1);
    }

    #[test]
    fn anchor_is_row_end() {
        // 3 columns, 7 cards: rows [0,1,2] [3,4,5] [6]
        assert_eq!(drawer_anchor(0, 3, 7), 2);
        assert_eq!(drawer_anchor(4, 3, 7), 5);
        assert_eq!(drawer_anchor(6, 3, 7), 6);
    }

    #[test]
    fn anchor_clamps_to_last_card_in_partial_row() {
        assert_eq!(drawer_anchor(3, 3, 5), 4);
    }

    #[test]
    fn single_column_anchor_is_the_card() {
        assert_eq!(drawer_anchor(4, 1, 7), 4);
    }
}
