//! Shared cursor for list-based panes
//!
//! Panes keep one [`ListCursor`] and clamp it against the current row
//! count, which can shrink whenever a refresh lands.

/// Selected row and scroll offset of a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
    scroll: usize,
}

impl ListCursor {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = self.selected.saturating_add(1).min(len - 1);
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.selected = 0;
        self.scroll = 0;
    }

    pub fn bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the selection back inside `0..len`
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll > self.selected {
            self.scroll = self.selected;
        }
    }

    /// Scroll so the selection is inside a window of `visible` rows
    ///
    /// A zero-height window leaves the offset untouched.
    pub fn follow(&mut self, visible: usize) -> usize {
        if visible == 0 {
            return self.scroll;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected - visible + 1;
        }
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_end() {
        let mut c = ListCursor::default();
        c.next(2);
        c.next(2);
        assert_eq!(c.selected(), 1);
    }

    #[test]
    fn test_next_on_empty_list() {
        let mut c = ListCursor::default();
        c.next(0);
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn test_prev_at_zero() {
        let mut c = ListCursor::default();
        c.prev();
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut c = ListCursor::default();
        c.bottom(10);
        c.follow(3);
        c.clamp(4);
        assert_eq!(c.selected(), 3);
        assert!(c.scroll() <= 3);
    }

    #[test]
    fn test_follow_scrolls_down() {
        let mut c = ListCursor::default();
        c.bottom(15);
        assert_eq!(c.follow(10), 5);
    }

    #[test]
    fn test_follow_scrolls_up() {
        let mut c = ListCursor::default();
        c.bottom(15);
        c.follow(10);
        c.top();
        assert_eq!(c.follow(10), 0);
    }

    #[test]
    fn test_follow_zero_height() {
        let mut c = ListCursor::default();
        c.bottom(15);
        assert_eq!(c.follow(0), 0);
    }
}
