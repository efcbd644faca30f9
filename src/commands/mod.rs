//! Backend Request Wrappers
//!
//! Frontend bindings to the comment REST endpoints, over `reqwest`
//! (browser `fetch` on wasm32).

mod comment;

use comment_pager::{Envelope, StoreError, StoreResult};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

pub use comment::*;

fn transport_error(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

/// Send a request and decode the `{code, msg, data}` envelope
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> StoreResult<Envelope<T>> {
    let response = request.send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    decode_response(
        status.is_success(),
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        &body,
    )
}

/// Classify a response.
///
/// Error statuses still carry an envelope on this backend (404 on delete),
/// so the body is decoded first and the status only matters when it isn't one.
fn decode_response<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> StoreResult<Envelope<T>> {
    match Envelope::from_json(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => Err(StoreError::Transport(
            format!("HTTP {} {}", status, status_text).trim_end().to_string(),
        )),
        Err(e) => Err(e),
    }
}
