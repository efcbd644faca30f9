//! Comment Pager
//!
//! Keeps the page position in sync with the remote comment list across
//! refresh, add, delete and navigation.
//!
//! All state lives in one `PageState` that is only touched inside the
//! transition methods below, and never while a request is pending. Requests
//! may complete in any order; whichever completes last decides the total.

use std::cell::{Cell, RefCell};
use std::pin::pin;

use futures::stream::{FuturesUnordered, Stream, StreamExt};
use futures::select;
use log::{debug, info, warn};

use crate::error::{PagerError, PagerResult, StoreError};
use crate::model::{Comment, CommentId, CommentPage};
use crate::page_state::{PageState, PaginationControls};
use crate::traits::{CommentStore, Prompt, Renderer};

/// Comments shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Auto-refresh period in milliseconds
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 30_000;

pub const DELETE_CONFIRMATION: &str = "Delete this comment?";

/// Result of a `remove` the user did not abort with an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    /// The user said no; nothing was sent
    Declined,
}

pub struct CommentPager<S, R, P> {
    store: S,
    renderer: R,
    prompt: P,
    state: RefCell<PageState>,
    /// Items on screen after the last paint
    visible: Cell<usize>,
    submitting: Cell<bool>,
}

impl<S, R, P> CommentPager<S, R, P>
where
    S: CommentStore,
    R: Renderer,
    P: Prompt,
{
    pub fn new(store: S, renderer: R, prompt: P, page_size: u32) -> Self {
        Self {
            store,
            renderer,
            prompt,
            state: RefCell::new(PageState::new(page_size)),
            visible: Cell::new(0),
            submitting: Cell::new(false),
        }
    }

    /// Snapshot of the current position
    pub fn state(&self) -> PageState {
        *self.state.borrow()
    }

    pub fn controls(&self) -> PaginationControls {
        self.state.borrow().controls()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Reload the current page.
    ///
    /// A failed load paints the empty state and leaves the position alone.
    /// If the server's total no longer reaches the current page, the page is
    /// clamped and fetched once more.
    pub async fn refresh(&self) {
        let mut listing = self.fetch_page().await;

        if let Some(page) = &listing {
            let clamped = self.state.borrow_mut().set_total(page.total);
            if clamped {
                debug!("Page moved past the end, reloading page {}", self.state().current_page());
                listing = self.fetch_page().await;
                if let Some(page) = &listing {
                    self.state.borrow_mut().set_total(page.total);
                }
            }
        }

        let items = listing.map(|page| page.comments).unwrap_or_default();
        self.paint(&items);
    }

    /// Refresh once, then again on every tick.
    ///
    /// Ticks never wait for earlier refreshes; each one starts a new request
    /// while older ones are still pending. Returns after the tick stream ends
    /// and every started refresh has finished.
    pub async fn run_auto_refresh<T>(&self, ticks: T)
    where
        T: Stream<Item = ()>,
    {
        let mut ticks = pin!(ticks.fuse());
        let mut in_flight = FuturesUnordered::new();
        in_flight.push(self.refresh());

        loop {
            select! {
                tick = ticks.next() => match tick {
                    Some(()) => {
                        debug!("Auto-refresh tick, {} refresh(es) pending", in_flight.len());
                        in_flight.push(self.refresh());
                    }
                    None => break,
                },
                () = in_flight.select_next_some() => {}
                complete => break,
            }
        }

        while in_flight.next().await.is_some() {}
        debug!("Auto-refresh stopped");
    }

    /// Submit a new comment and jump back to the first page
    pub async fn add(&self, author: &str, body: &str) -> PagerResult<()> {
        let author = author.trim();
        let body = body.trim();
        if author.is_empty() || body.is_empty() {
            self.prompt.notify(&PagerError::EmptyInput.to_string());
            return Err(PagerError::EmptyInput);
        }
        if self.submitting.get() {
            debug!("Ignoring add while another is in flight");
            return Err(PagerError::Busy);
        }

        let guard = SubmitGuard::engage(&self.renderer, &self.submitting);
        let result = self.store.add(author, body).await;
        drop(guard);

        match result {
            Ok(()) => {
                info!("Comment added by {}", author);
                self.renderer.clear_form();
                self.state.borrow_mut().reset_to_first();
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to add comment: {}", e);
                self.prompt.notify(&failure_notice("add comment", &e));
                Err(e.into())
            }
        }
    }

    /// Delete a comment after the user confirms.
    ///
    /// When the deleted comment was the only one on screen and this is not
    /// the first page, the pager steps back a page before reloading. Only the
    /// painted count is considered, not what remains on the server.
    pub async fn remove(&self, id: CommentId) -> PagerResult<Removal> {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(Removal::Declined);
        }

        match self.store.delete(id).await {
            Ok(()) => {
                info!("Comment {} deleted", id);
                let visible = self.visible.get();
                let stepped = self.state.borrow_mut().step_back(visible);
                if stepped {
                    debug!("Last comment on page removed, back to page {}", self.state().current_page());
                }
                self.refresh().await;
                Ok(Removal::Deleted)
            }
            Err(e) => {
                warn!("Failed to delete comment {}: {}", id, e);
                self.prompt.notify(&failure_notice("delete comment", &e));
                Err(e.into())
            }
        }
    }

    /// Go to the next page. Returns `false` on the last page.
    pub async fn next_page(&self) -> bool {
        let moved = self.state.borrow_mut().advance();
        if moved {
            self.refresh().await;
        }
        moved
    }

    /// Go to the previous page. Returns `false` on the first page.
    pub async fn prev_page(&self) -> bool {
        let moved = self.state.borrow_mut().retreat();
        if moved {
            self.refresh().await;
        }
        moved
    }

    async fn fetch_page(&self) -> Option<CommentPage> {
        let state = self.state();
        match self.store.list(state.current_page(), state.page_size()).await {
            Ok(page) => Some(page),
            Err(e) => {
                warn!("Failed to load page {}: {}", state.current_page(), e);
                None
            }
        }
    }

    /// An empty paint (failed load or nothing on this page) never offers "next"
    fn paint(&self, items: &[Comment]) {
        self.visible.set(items.len());
        self.renderer.paint_list(items);

        let controls = self.controls();
        self.renderer.set_prev_enabled(controls.prev_enabled);
        self.renderer.set_next_enabled(controls.next_enabled && !items.is_empty());
        self.renderer.set_page_indicator(controls.current_page, controls.page_count);
    }
}

/// Disables the submit button until dropped
struct SubmitGuard<'a, R: Renderer> {
    renderer: &'a R,
    flag: &'a Cell<bool>,
}

impl<'a, R: Renderer> SubmitGuard<'a, R> {
    fn engage(renderer: &'a R, flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        renderer.set_submit_enabled(false);
        Self { renderer, flag }
    }
}

impl<R: Renderer> Drop for SubmitGuard<'_, R> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.renderer.set_submit_enabled(true);
    }
}

fn failure_notice(action: &str, error: &StoreError) -> String {
    match error {
        StoreError::Transport(_) => format!("Network error, could not {}", action),
        StoreError::Application(msg) => format!("Failed to {}: {}", action, msg),
    }
}
