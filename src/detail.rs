//! Detail-view navigation.
//!
//! The detail modal shows one item and steps through the list it was opened
//! from. Stepping wraps at both ends.

use crate::layout::ItemId;

/// Keyboard-level commands the modal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    order: Vec<ItemId>,
    index: usize,
}

impl DetailView {
    /// Open on `id` within `order`. `None` if `id` is not in the list.
    pub fn open(id: ItemId, order: Vec<ItemId>) -> Option<Self> {
        let index = order.iter().position(|&i| i == id)?;
        Some(Self { order, index })
    }

    pub fn current(&self) -> ItemId {
        self.order[self.index]
    }

    pub fn next(&mut self) -> ItemId {
        self.index = (self.index + 1) % self.order.len();
        self.current()
    }

    pub fn prev(&mut self) -> ItemId {
        self.index = (self.index + self.order.len() - 1) % self.order.len();
        self.current()
    }

    /// 1-based position and total, for a "3 / 15" caption.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.order.len())
    }

    /// Apply a command. Returns `false` when the modal should close.
    pub fn handle(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => {
                self.next();
                true
            }
            NavCommand::Prev => {
                self.prev();
                true
            }
            NavCommand::Close => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_unknown_id() {
        assert!(DetailView::open(9, vec![1, 2, 3]).is_none());
        assert!(DetailView::open(1, Vec::new()).is_none());
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut view = DetailView::open(3, vec![1, 2, 3]).unwrap();
        assert_eq!(view.position(), (3, 3));
        assert_eq!(view.next(), 1);
        assert_eq!(view.prev(), 3);
        assert_eq!(view.prev(), 2);
    }

    #[test]
    fn test_follows_given_order() {
        let mut view = DetailView::open(14, vec![13, 14, 2]).unwrap();
        assert_eq!(view.next(), 2);
    }

    #[test]
    fn test_handle_close() {
        let mut view = DetailView::open(1, vec![1]).unwrap();
        assert!(view.handle(NavCommand::Next));
        assert_eq!(view.current(), 1);
        assert!(!view.handle(NavCommand::Close));
    }
}
