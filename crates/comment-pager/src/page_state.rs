//! Page State
//!
//! Current page, page size and total count of the remote comment list.
//! Every transition keeps `current_page` within `1..=last_page()`.

/// Position within the remote comment list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    page_size: u32,
    total_count: u32,
}

/// Pagination controls derived from a `PageState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: u32,
    pub page_count: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageState {
    /// Page 1 of an empty list. A zero page size is treated as 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// Number of pages holding at least one comment (0 for an empty list)
    pub fn page_count(&self) -> u32 {
        self.total_count.div_ceil(self.page_size)
    }

    /// Highest page the pager may sit on
    pub fn last_page(&self) -> u32 {
        self.page_count().max(1)
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        let pages = self.page_count();
        !(self.current_page >= pages || pages <= 1)
    }

    pub fn controls(&self) -> PaginationControls {
        PaginationControls {
            current_page: self.current_page,
            page_count: self.page_count(),
            prev_enabled: self.prev_enabled(),
            next_enabled: self.next_enabled(),
        }
    }

    /// Record the server's total. Returns `true` when the current page fell
    /// past the end and had to be clamped.
    pub fn set_total(&mut self, total: u32) -> bool {
        self.total_count = total;
        self.clamp_to_last()
    }

    /// Pull `current_page` back inside the bound. Returns `true` if it moved.
    pub fn clamp_to_last(&mut self) -> bool {
        let last = self.last_page();
        if self.current_page > last {
            self.current_page = last;
            true
        } else {
            false
        }
    }

    pub fn reset_to_first(&mut self) {
        self.current_page = 1;
    }

    /// Go back one page after deleting the only visible item.
    /// Returns `true` if the page changed.
    pub fn step_back(&mut self, visible_items: usize) -> bool {
        if visible_items == 1 && self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the next page if one exists
    pub fn advance(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous page if one exists
    pub fn retreat(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(page: u32, size: u32, total: u32) -> PageState {
        let mut state = PageState::new(size);
        state.set_total(total);
        while state.current_page() < page {
            assert!(state.advance());
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = PageState::new(3);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_count(), 0);
        assert_eq!(state.page_count(), 0);
        assert_eq!(state.last_page(), 1);
    }

    #[test]
    fn test_zero_page_size_is_normalized() {
        let mut state = PageState::new(0);
        state.set_total(4);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.page_count(), 4);
    }

    #[test]
    fn test_seven_comments_three_per_page() {
        let state = state_at(3, 3, 7);
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.current_page(), 3);
        assert!(!state.next_enabled());
        assert!(state.prev_enabled());

        let middle = state_at(2, 3, 7);
        assert!(middle.next_enabled());
        assert!(middle.prev_enabled());
    }

    #[test]
    fn test_empty_list_disables_both_buttons() {
        let state = PageState::new(3);
        let controls = state.controls();
        assert!(!controls.prev_enabled);
        assert!(!controls.next_enabled);
        assert_eq!(controls.page_count, 0);
    }

    #[test]
    fn test_single_page_disables_next() {
        let state = state_at(1, 3, 3);
        assert_eq!(state.page_count(), 1);
        assert!(!state.next_enabled());
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut state = state_at(3, 3, 7);
        assert!(state.set_total(4));
        assert_eq!(state.current_page(), 2);

        assert!(state.set_total(0));
        assert_eq!(state.current_page(), 1);
        assert!(!state.set_total(0));
    }

    #[test]
    fn test_step_back_only_for_sole_item_past_first_page() {
        let mut state = state_at(2, 3, 4);
        assert!(!state.step_back(2));
        assert!(state.step_back(1));
        assert_eq!(state.current_page(), 1);
        assert!(!state.step_back(1));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = state_at(1, 2, 3);
        assert!(!state.retreat());
        assert!(state.advance());
        assert!(!state.advance());
        assert_eq!(state.current_page(), 2);
        assert!(state.retreat());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_never_exceeds_bound() {
        for size in 1..=5u32 {
            for total in 0..=20u32 {
                let mut state = PageState::new(size);
                state.set_total(total);
                while state.advance() {}
                let bound = total.div_ceil(size).max(1);
                assert!(state.current_page() <= bound);
                assert!(!state.next_enabled());

                for shrunk in (0..total).rev() {
                    state.set_total(shrunk);
                    assert!(state.current_page() <= shrunk.div_ceil(size).max(1));
                }
            }
        }
    }
}
