//! Chat transcript and the request lifecycle around `/api/chat`.
//!
//! DESIGN
//! ======
//! Every mutation is split into a `prepare_*` step that validates and returns
//! the request to dispatch, and a `finish` step that consumes the result. The
//! component only moves values between the two across an `await`, so the
//! whole lifecycle is testable without a browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;
use crate::net::types::{ChatReply, ChatRequest, GenerationOptions, WebSource, WireMessage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    /// Local failure notice; never sent to the backend.
    Error,
}

impl ChatRole {
    /// Wire role, or `None` for local-only entries.
    #[must_use]
    pub fn wire_name(self) -> Option<&'static str> {
        match self {
            Self::User => Some("user"),
            Self::Assistant => Some("assistant"),
            Self::Error => None,
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Web sources the backend cited for this reply.
    pub sources: Vec<WebSource>,
    pub note: Option<String>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into(), sources: Vec::new(), note: None }
    }
}

/// State for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A chat request is in flight.
    pub pending: bool,
    /// A history clear is in flight.
    pub clearing: bool,
    pub web_search: bool,
    pub options: GenerationOptions,
}

impl ChatState {
    #[must_use]
    pub fn with_options(options: GenerationOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Append a user message and build the request that sends it.
    ///
    /// Returns `None` (and leaves the transcript alone) for blank input or
    /// while another request or a clear is in flight. A missing model is
    /// reported inline.
    pub fn prepare_send(&mut self, text: &str, model: Option<&str>, system: Option<&str>) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() || self.busy() {
            return None;
        }
        let Some(model) = model else {
            self.push_error("Select a model before sending");
            return None;
        };

        self.messages.push(ChatMessage::new(ChatRole::User, text));
        self.pending = true;
        Some(self.build_request(model, system))
    }

    /// Drop the last reply and build a request that resends the conversation.
    ///
    /// Trailing assistant replies and error notices are removed. Nothing is
    /// sent unless a user message is then last.
    pub fn prepare_regenerate(&mut self, model: Option<&str>, system: Option<&str>) -> Option<ChatRequest> {
        if !self.can_regenerate() {
            return None;
        }
        let Some(model) = model else {
            self.push_error("Select a model before regenerating");
            return None;
        };

        while self
            .messages
            .last()
            .is_some_and(|m| m.role != ChatRole::User)
        {
            self.messages.pop();
        }

        self.pending = true;
        Some(self.build_request(model, system))
    }

    /// Consume the result of a chat request.
    pub fn finish(&mut self, result: Result<ChatReply, ApiError>) {
        self.pending = false;
        match result {
            Ok(reply) => {
                let mut msg = ChatMessage::new(ChatRole::Assistant, reply.message.content);
                msg.sources = reply.web_search_results;
                msg.note = reply.web_search_note;
                self.messages.push(msg);
            }
            Err(err) => {
                log::warn!("chat request failed: {err} ({})", err.error_code());
                self.push_error(format!("Error: {}", err.user_message()));
            }
        }
    }

    /// Mark a history clear as started. Returns `false` while a chat request
    /// or another clear is in flight.
    pub fn prepare_clear(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        self.clearing = true;
        true
    }

    /// Consume the result of a history clear.
    pub fn finish_clear(&mut self, result: Result<(), ApiError>) {
        self.clearing = false;
        match result {
            Ok(()) => self.messages.clear(),
            Err(err) => {
                log::warn!("clear history failed: {err} ({})", err.error_code());
                self.push_error(format!("Could not clear history: {}", err.user_message()));
            }
        }
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::Error, text));
    }

    /// Transcript as sent to the backend, error notices excluded.
    #[must_use]
    pub fn transcript(&self) -> Vec<WireMessage> {
        self.messages
            .iter()
            .filter_map(|m| {
                m.role
                    .wire_name()
                    .map(|role| WireMessage { role: role.to_owned(), content: m.content.clone() })
            })
            .collect()
    }

    /// `true` when the last exchange can be regenerated.
    #[must_use]
    pub fn can_regenerate(&self) -> bool {
        !self.busy() && self.messages.iter().any(|m| m.role == ChatRole::User)
    }

    /// `true` while a chat request or a history clear is in flight.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.pending || self.clearing
    }

    fn build_request(&self, model: &str, system: Option<&str>) -> ChatRequest {
        ChatRequest {
            model: model.to_owned(),
            messages: self.transcript(),
            options: self.options.clone(),
            system: system.map(str::to_owned),
            web_search: self.web_search,
        }
    }
}
