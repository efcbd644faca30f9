//! In-Memory Comment Store
//!
//! A `CommentStore` holding comments in a `Vec`, with the same paging rules
//! as the HTTP backend. Serves as the offline demo backend and test fixture.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::model::{Comment, CommentId, CommentPage};
use crate::traits::CommentStore;

/// Page size used when a request asks for zero items
pub const DEFAULT_LIST_SIZE: u32 = 10;

#[derive(Debug, Default)]
pub struct MemoryStore {
    comments: RefCell<Vec<Comment>>,
    last_id: Cell<u32>,
    calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo comments
    pub fn seeded() -> Self {
        let store = Self::new();
        store.insert("User1", "This is the first comment!");
        store.insert("User2", "Hello World!");
        store.insert("User3", "Looking forward to the holidays");
        store
    }

    /// Store holding `count` generated comments
    pub fn with_generated(count: u32) -> Self {
        let store = Self::new();
        for n in 1..=count {
            store.insert(&format!("User{}", n), &format!("Comment {}", n));
        }
        store
    }

    /// Add without counting as a round-trip
    pub fn insert(&self, author: &str, body: &str) -> CommentId {
        let id = CommentId(self.last_id.get() + 1);
        self.last_id.set(id.0);
        self.comments.borrow_mut().push(Comment {
            id,
            author: author.to_string(),
            body: body.to_string(),
        });
        id
    }

    /// Delete without counting as a round-trip
    pub fn take(&self, id: CommentId) -> Option<Comment> {
        let mut comments = self.comments.borrow_mut();
        let index = comments.iter().position(|c| c.id == id)?;
        Some(comments.remove(index))
    }

    pub fn len(&self) -> usize {
        self.comments.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.borrow().is_empty()
    }

    /// Number of round-trips served so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn count_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[async_trait(?Send)]
impl CommentStore for MemoryStore {
    async fn list(&self, page: u32, size: u32) -> StoreResult<CommentPage> {
        self.count_call();
        let page = page.max(1) as usize;
        let size = (if size == 0 { DEFAULT_LIST_SIZE } else { size }) as usize;

        let comments = self.comments.borrow();
        let total = comments.len();
        // u32 page and size can overflow a 32-bit usize when multiplied
        let start = (page - 1).saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);

        Ok(CommentPage {
            total: total as u32,
            comments: comments[start..end].to_vec(),
        })
    }

    async fn add(&self, author: &str, body: &str) -> StoreResult<()> {
        self.count_call();
        self.insert(author, body);
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> StoreResult<()> {
        self.count_call();
        self.take(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::Application("Comment not found".to_string()))
    }
}
