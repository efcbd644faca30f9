//! Backend Selection
//!
//! The REST API when a host is configured, otherwise the in-memory demo store.

use async_trait::async_trait;
use comment_pager::{CommentId, CommentPage, CommentStore, MemoryStore, StoreResult};

use crate::commands::HttpCommentStore;
use crate::config::AppConfig;

pub enum Backend {
    Http(HttpCommentStore),
    Demo(MemoryStore),
}

impl Backend {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.api_host {
            Some(host) => Backend::Http(HttpCommentStore::new(host.clone())),
            None => Backend::Demo(MemoryStore::seeded()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Backend::Http(store) => store.host().to_string(),
            Backend::Demo(_) => "in-memory demo store".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl CommentStore for Backend {
    async fn list(&self, page: u32, size: u32) -> StoreResult<CommentPage> {
        match self {
            Backend::Http(store) => store.list(page, size).await,
            Backend::Demo(store) => store.list(page, size).await,
        }
    }

    async fn add(&self, author: &str, body: &str) -> StoreResult<()> {
        match self {
            Backend::Http(store) => store.add(author, body).await,
            Backend::Demo(store) => store.add(author, body).await,
        }
    }

    async fn delete(&self, id: CommentId) -> StoreResult<()> {
        match self {
            Backend::Http(store) => store.delete(id).await,
            Backend::Demo(store) => store.delete(id).await,
        }
    }
}
