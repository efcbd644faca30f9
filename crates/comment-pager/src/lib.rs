//! Comment Pager
//!
//! Pagination state sync for a remote, paged comment list:
//! - model: wire types and the response envelope
//! - page_state: current page / total bookkeeping
//! - traits: store, renderer and prompt collaborators
//! - pager: the transition functions tying them together
//! - memory: an in-process `CommentStore`

mod error;
mod memory;
mod model;
mod page_state;
mod pager;
mod traits;


pub use error::{PagerError, PagerResult, StoreError, StoreResult};
pub use memory::{MemoryStore, DEFAULT_LIST_SIZE};
pub use model::{Comment, CommentId, CommentPage, Envelope, NewComment};
pub use page_state::{PageState, PaginationControls};
pub use pager::{
    CommentPager, Removal, DEFAULT_PAGE_SIZE, DEFAULT_REFRESH_INTERVAL_MS, DELETE_CONFIRMATION,
};
pub use traits::{CommentStore, Prompt, Renderer};
