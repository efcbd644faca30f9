//! Wire Models
//!
//! Data structures matching the comment backend's JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Backend-assigned comment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u32);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single comment (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(rename = "name")]
    pub author: String,
    #[serde(rename = "content")]
    pub body: String,
}

/// One page of comments plus the collection size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPage {
    pub total: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Body of an add request
#[derive(Debug, Serialize)]
pub struct NewComment<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Response wrapper used by every backend endpoint.
///
/// `code == 0` means success; anything else is an application failure and
/// `msg` explains it.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from a response body
    pub fn from_json(body: &str) -> Result<Self, StoreError> {
        serde_json::from_str(body)
            .map_err(|e| StoreError::Transport(format!("Malformed response: {}", e)))
    }
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Payload on success, application error otherwise
    pub fn into_result(self) -> Result<Option<T>, StoreError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(StoreError::Application(self.msg))
        }
    }

    /// Like `into_result`, but a successful envelope must carry data
    pub fn into_data(self) -> Result<T, StoreError> {
        self.into_result()?
            .ok_or_else(|| StoreError::Application("Response carried no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_response() {
        let body = r#"{"code":0,"msg":"success","data":{"total":3,"comments":[
            {"id":1,"name":"User1","content":"This is the first comment!"},
            {"id":2,"name":"User2","content":"Hello World!"}]}}"#;

        let page = Envelope::<CommentPage>::from_json(body).unwrap().into_data().unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.comments.len(), 2);
        assert_eq!(page.comments[0].id, CommentId(1));
        assert_eq!(page.comments[1].author, "User2");
        assert_eq!(page.comments[1].body, "Hello World!");
    }

    #[test]
    fn test_application_failure_keeps_message() {
        let body = r#"{"code":1,"msg":"Comment not found","data":null}"#;
        let err = Envelope::<serde_json::Value>::from_json(body).unwrap().into_result().unwrap_err();
        assert_eq!(err, StoreError::Application("Comment not found".to_string()));
    }

    #[test]
    fn test_success_without_data() {
        let body = r#"{"code":0,"msg":"success","data":null}"#;
        let env = Envelope::<serde_json::Value>::from_json(body).unwrap();
        assert!(env.clone().into_result().unwrap().is_none());
        assert!(matches!(env.into_data(), Err(StoreError::Application(_))));
    }

    #[test]
    fn test_garbage_is_transport_error() {
        let err = Envelope::<CommentPage>::from_json("<html>502</html>").unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[test]
    fn test_new_comment_field_names() {
        let json = serde_json::to_string(&NewComment { name: "a", content: "b" }).unwrap();
        assert_eq!(json, r#"{"name":"a","content":"b"}"#);
    }
}
