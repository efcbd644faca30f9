//! Board View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The pager paints
//! into this store through `StoreRenderer`; components only read from it
//! (except the form drafts, which they edit).

use comment_pager::{Comment, Renderer};
use leptos::prelude::*;
use reactive_stores::Store;

/// Everything the board components display
#[derive(Clone, Debug, Store)]
pub struct BoardState {
    /// Comments on the current page
    pub comments: Vec<Comment>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub current_page: u32,
    pub page_count: u32,
    /// Add form submit button
    pub submit_enabled: bool,
    pub draft_author: String,
    pub draft_body: String,
    /// Where comments come from, shown in the footer
    pub source: String,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            comments: Vec::new(),
            prev_enabled: false,
            next_enabled: false,
            current_page: 1,
            page_count: 0,
            submit_enabled: true,
            draft_author: String::new(),
            draft_body: String::new(),
            source: String::new(),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Writes pager output into the board store
#[derive(Clone, Copy)]
pub struct StoreRenderer {
    store: BoardStore,
}

impl StoreRenderer {
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }
}

impl Renderer for StoreRenderer {
    fn paint_list(&self, items: &[Comment]) {
        *self.store.comments().write() = items.to_vec();
    }

    fn set_prev_enabled(&self, enabled: bool) {
        self.store.prev_enabled().set(enabled);
    }

    fn set_next_enabled(&self, enabled: bool) {
        self.store.next_enabled().set(enabled);
    }

    fn set_page_indicator(&self, current: u32, count: u32) {
        self.store.current_page().set(current);
        self.store.page_count().set(count);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.store.submit_enabled().set(enabled);
    }

    fn clear_form(&self) {
        self.store.draft_author().set(String::new());
        self.store.draft_body().set(String::new());
    }
}
