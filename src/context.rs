//! Board Context
//!
//! Shared handle provided via Leptos Context API. Components call these
//! methods from event handlers; each one spawns the matching pager
//! transition on the local task queue.

use std::rc::Rc;

use comment_pager::{CommentId, CommentPager, PagerError, Removal};
use gloo_timers::future::IntervalStream;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use log::{debug, info};

use crate::backend::Backend;
use crate::prompt::BrowserPrompt;
use crate::store::{BoardStateStoreFields, BoardStore, StoreRenderer};

pub type BoardPager = CommentPager<Backend, StoreRenderer, BrowserPrompt>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// View state painted by the pager
    pub state: BoardStore,
    pager: StoredValue<Rc<BoardPager>, LocalStorage>,
}

impl BoardContext {
    pub fn new(state: BoardStore, pager: BoardPager) -> Self {
        Self {
            state,
            pager: StoredValue::new_local(Rc::new(pager)),
        }
    }

    fn pager(&self) -> Rc<BoardPager> {
        self.pager.get_value()
    }

    /// Reload the current page
    pub fn refresh(&self) {
        let pager = self.pager();
        spawn_local(async move {
            pager.refresh().await;
        });
    }

    /// Submit the form drafts as a new comment
    pub fn submit(&self) {
        let author = self.state.draft_author().get_untracked();
        let body = self.state.draft_body().get_untracked();
        let pager = self.pager();
        spawn_local(async move {
            match pager.add(&author, &body).await {
                Ok(()) | Err(PagerError::EmptyInput) => {}
                Err(e) => debug!("Add did not complete: {}", e),
            }
        });
    }

    pub fn remove(&self, id: CommentId) {
        let pager = self.pager();
        spawn_local(async move {
            match pager.remove(id).await {
                Ok(Removal::Declined) => debug!("Delete of {} cancelled", id),
                Ok(Removal::Deleted) => {}
                Err(e) => debug!("Delete of {} did not complete: {}", id, e),
            }
        });
    }

    pub fn next_page(&self) {
        let pager = self.pager();
        spawn_local(async move {
            pager.next_page().await;
        });
    }

    pub fn prev_page(&self) {
        let pager = self.pager();
        spawn_local(async move {
            pager.prev_page().await;
        });
    }

    /// Refresh now and then every `interval_ms`, for the life of the page
    pub fn start_auto_refresh(&self, interval_ms: u32) {
        info!("Auto-refresh every {} ms", interval_ms);
        let pager = self.pager();
        spawn_local(async move {
            pager.run_auto_refresh(IntervalStream::new(interval_ms)).await;
        });
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
