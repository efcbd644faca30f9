//! Collaborator Traits
//!
//! The pager talks to the outside world only through these interfaces.
//! Futures are not `Send`: implementations run on the browser's single thread.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{Comment, CommentId, CommentPage};

/// Remote comment collection
#[async_trait(?Send)]
pub trait CommentStore {
    /// Fetch one page (1-indexed) of `size` comments plus the total count
    async fn list(&self, page: u32, size: u32) -> StoreResult<CommentPage>;

    /// Append a comment
    async fn add(&self, author: &str, body: &str) -> StoreResult<()>;

    /// Delete a comment by ID
    async fn delete(&self, id: CommentId) -> StoreResult<()>;
}

/// Paints pager output
pub trait Renderer {
    /// Replace the visible list. An empty slice means the empty state.
    fn paint_list(&self, items: &[Comment]);

    fn set_prev_enabled(&self, enabled: bool);

    fn set_next_enabled(&self, enabled: bool);

    /// Show "page `current` of `count`"
    fn set_page_indicator(&self, _current: u32, _count: u32) {}

    /// Enable or disable the submit button of the add form
    fn set_submit_enabled(&self, enabled: bool);

    /// Empty the add form after a successful submit
    fn clear_form(&self) {}
}

/// Blocking user interaction
pub trait Prompt {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a notice the user has to dismiss
    fn notify(&self, message: &str);
}
