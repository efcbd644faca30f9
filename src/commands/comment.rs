//! Comment Commands
//!
//! `GET /comment/get`, `POST /comment/add`, `POST /comment/delete`.

use async_trait::async_trait;
use comment_pager::{Comment, CommentId, CommentPage, CommentStore, NewComment, StoreResult};
use log::debug;
use reqwest::Client;

use super::send;

// ========================
// Endpoints
// ========================

fn list_url(host: &str, page: u32, size: u32) -> String {
    format!("{}/comment/get?page={}&size={}", host, page, size)
}

fn add_url(host: &str) -> String {
    format!("{}/comment/add", host)
}

fn delete_url(host: &str, id: CommentId) -> String {
    format!("{}/comment/delete?id={}", host, id)
}

// ========================
// Commands
// ========================

pub async fn list_comments(client: &Client, host: &str, page: u32, size: u32) -> StoreResult<CommentPage> {
    debug!("Fetching page {} (size {})", page, size);
    send::<CommentPage>(client.get(list_url(host, page, size)))
        .await?
        .into_data()
}

/// Returns the comment as stored by the backend
pub async fn add_comment(client: &Client, host: &str, name: &str, content: &str) -> StoreResult<Comment> {
    let request = client.post(add_url(host)).json(&NewComment { name, content });
    send::<Comment>(request).await?.into_data()
}

pub async fn delete_comment(client: &Client, host: &str, id: CommentId) -> StoreResult<()> {
    send::<serde_json::Value>(client.post(delete_url(host, id)))
        .await?
        .into_result()
        .map(|_| ())
}

/// `CommentStore` backed by the REST API at `host`
#[derive(Debug, Clone)]
pub struct HttpCommentStore {
    client: Client,
    host: String,
}

impl HttpCommentStore {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait(?Send)]
impl CommentStore for HttpCommentStore {
    async fn list(&self, page: u32, size: u32) -> StoreResult<CommentPage> {
        list_comments(&self.client, &self.host, page, size).await
    }

    async fn add(&self, author: &str, body: &str) -> StoreResult<()> {
        let created = add_comment(&self.client, &self.host, author, body).await?;
        debug!("Backend stored comment {}", created.id);
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> StoreResult<()> {
        delete_comment(&self.client, &self.host, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_response;
    use comment_pager::{Envelope, StoreError};

    #[test]
    fn test_endpoint_urls() {
        let host = "http://localhost:8080";
        assert_eq!(list_url(host, 2, 3), "http://localhost:8080/comment/get?page=2&size=3");
        assert_eq!(add_url(host), "http://localhost:8080/comment/add");
        assert_eq!(delete_url(host, CommentId(17)), "http://localhost:8080/comment/delete?id=17");
    }

    #[test]
    fn test_not_found_envelope_is_application_error() {
        let body = r#"{"code":1,"msg":"Comment not found","data":null}"#;
        let envelope: Envelope<serde_json::Value> =
            decode_response(false, 404, "Not Found", body).unwrap();

        let err = envelope.into_result().unwrap_err();
        assert_eq!(err, StoreError::Application("Comment not found".to_string()));
    }

    #[test]
    fn test_undecodable_error_status_is_transport_error() {
        let err = decode_response::<CommentPage>(false, 502, "Bad Gateway", "<html>bad gateway</html>")
            .unwrap_err();
        assert_eq!(err, StoreError::Transport("HTTP 502 Bad Gateway".to_string()));
    }

    #[test]
    fn test_undecodable_success_body_is_transport_error() {
        let err = decode_response::<CommentPage>(true, 200, "OK", "not json").unwrap_err();
        match err {
            StoreError::Transport(msg) => assert!(msg.starts_with("Malformed response")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_success_envelope_passes_through() {
        let body = r#"{"code":0,"msg":"success","data":{"total":1,"comments":[{"id":4,"name":"a","content":"b"}]}}"#;
        let page = decode_response::<CommentPage>(true, 200, "OK", body)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.comments[0].id, CommentId(4));
    }
}
