//! REST API helpers for the chat backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: every call fails with [`ApiError::Network`] since there is no
//! `fetch` to issue it with.
//!
//! ERROR HANDLING
//! ==============
//! The transport only reads `(status, body)`; the `decode_*` helpers own every
//! status and shape check so callers always get a typed `Result`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{ChatReply, ChatRequest, ErrorBody, StatusBody};

pub const MODELS_PATH: &str = "/api/models";
pub const CHAT_PATH: &str = "/api/chat";
pub const PROMPT_PATH: &str = "/api/prompt";
pub const HISTORY_PATH: &str = "/api/history";

// =============================================================================
// DECODING
// =============================================================================

/// Decode a JSON body, mapping non-2xx statuses to [`ApiError::Status`].
///
/// # Errors
///
/// `Status` for non-2xx responses, `Protocol` when the body does not parse as `T`.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Protocol(e.to_string()))
}

/// Decode the `/api/models` listing: a JSON array of model names.
///
/// # Errors
///
/// See [`decode_json`]; any body other than an array of strings is `Protocol`.
pub fn decode_models(status: u16, body: &str) -> Result<Vec<String>, ApiError> {
    decode_json(status, body)
}

/// Decode a `{ "status": ... }` acknowledgement.
///
/// # Errors
///
/// See [`decode_json`].
pub fn decode_ack(status: u16, body: &str) -> Result<(), ApiError> {
    decode_json::<StatusBody>(status, body).map(|_| ())
}

fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_default();
    ApiError::Status { status, message }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "csr")]
fn endpoint(path: &str) -> String {
    crate::config::current().endpoint(path)
}

#[cfg(feature = "csr")]
async fn read_body(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<(u16, String), ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Fetch available model names from `GET /api/models`.
///
/// # Errors
///
/// `Network` when the request fails, `Status`/`Protocol` per [`decode_models`].
pub async fn fetch_models() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let sent = gloo_net::http::Request::get(&endpoint(MODELS_PATH))
            .send()
            .await;
        let (status, body) = read_body(sent).await?;
        decode_models(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// Send the transcript to `POST /api/chat` and return the assistant reply.
///
/// # Errors
///
/// `Network` when the request fails, `Status`/`Protocol` per [`decode_json`].
pub async fn send_chat(request: &ChatRequest) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let req = gloo_net::http::Request::post(&endpoint(CHAT_PATH))
            .json(request)
            .map_err(|e| ApiError::Protocol(e.to_string()))?;
        let (status, body) = read_body(req.send().await).await?;
        decode_json(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Fetch the stored system prompt from `GET /api/prompt`.
///
/// # Errors
///
/// `Network` when the request fails, `Status`/`Protocol` per [`decode_json`].
pub async fn fetch_prompt() -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let sent = gloo_net::http::Request::get(&endpoint(PROMPT_PATH))
            .send()
            .await;
        let (status, body) = read_body(sent).await?;
        decode_json::<super::types::PromptBody>(status, &body).map(|b| b.prompt)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// Persist a new system prompt via `POST /api/prompt`.
///
/// # Errors
///
/// `Network` when the request fails, `Status`/`Protocol` per [`decode_ack`].
pub async fn save_prompt(prompt: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = super::types::PromptBody { prompt: prompt.to_owned() };
        let req = gloo_net::http::Request::post(&endpoint(PROMPT_PATH))
            .json(&payload)
            .map_err(|e| ApiError::Protocol(e.to_string()))?;
        let (status, body) = read_body(req.send().await).await?;
        decode_ack(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prompt;
        Err(unavailable())
    }
}

/// Clear the backend's conversation history via `DELETE /api/history`.
///
/// # Errors
///
/// `Network` when the request fails, `Status`/`Protocol` per [`decode_ack`].
pub async fn clear_history() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let sent = gloo_net::http::Request::delete(&endpoint(HISTORY_PATH))
            .send()
            .await;
        let (status, body) = read_body(sent).await?;
        decode_ack(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}
