//! Wire DTOs for the chat backend's REST endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON keys exactly, including its mix of
//! camelCase (`topP`, `webSearch`) and snake_case (`repeat_penalty`,
//! `web_search_results`). Serde renames keep the Rust side idiomatic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single message as exchanged with `/api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    /// `"user"`, `"assistant"` or `"system"`.
    pub role: String,
    pub content: String,
}

/// Sampling options forwarded to the model runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f64,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "topK")]
    pub top_k: u32,
    pub repeat_penalty: f64,
    #[serde(rename = "maxTokens")]
    pub max_tokens: u32,
    #[serde(rename = "contextLength")]
    pub context_length: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.9,
            top_k: 40,
            repeat_penalty: 1.1,
            max_tokens: 2048,
            context_length: 2048,
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub options: GenerationOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(rename = "webSearch")]
    pub web_search: bool,
}

/// A web source the backend consulted while answering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub domain: String,
}

/// Successful `/api/chat` response. Extra runtime fields (timings, token
/// counts) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub message: WireMessage,
    #[serde(default)]
    pub web_search_results: Vec<WebSource>,
    #[serde(default, rename = "webSearchNote")]
    pub web_search_note: Option<String>,
}

/// `{ "prompt": ... }`: both the `GET /api/prompt` response and the
/// `POST /api/prompt` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBody {
    pub prompt: String,
}

/// `{ "status": ... }` acknowledgement returned by mutating endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// `{ "error": ... }` body the backend sends alongside a 4xx/5xx status.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
