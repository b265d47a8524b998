//! System prompt editor state backed by `/api/prompt`.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use crate::net::error::ApiError;

/// Outcome of the latest load or save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PromptStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct PromptState {
    /// Text currently in the editor.
    pub draft: String,
    /// Last text confirmed by the backend.
    pub saved: Option<String>,
    pub status: PromptStatus,
}

impl PromptState {
    /// Apply the initial `GET /api/prompt` result.
    ///
    /// A failed load leaves any draft the user already typed untouched. A load
    /// that resolves after a save has started or completed is stale and is
    /// dropped.
    pub fn apply_loaded(&mut self, result: Result<String, ApiError>) {
        if self.saved.is_some() || self.status == PromptStatus::Saving {
            log::debug!("ignoring system prompt load that resolved after a save");
            return;
        }
        match result {
            Ok(prompt) => {
                if self.draft.is_empty() {
                    self.draft.clone_from(&prompt);
                }
                self.saved = Some(prompt);
            }
            Err(err) => {
                log::warn!("failed to load system prompt: {err} ({})", err.error_code());
                self.status = PromptStatus::Failed(format!("Could not load system prompt: {}", err.user_message()));
            }
        }
    }

    /// Start a save; returns the text to send, or `None` if one is in flight.
    pub fn prepare_save(&mut self) -> Option<String> {
        if self.status == PromptStatus::Saving {
            return None;
        }
        self.status = PromptStatus::Saving;
        Some(self.draft.clone())
    }

    /// Consume the result of saving `text`.
    pub fn finish_save(&mut self, text: String, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.saved = Some(text);
                self.status = PromptStatus::Saved;
            }
            Err(err) => {
                log::warn!("failed to save system prompt: {err} ({})", err.error_code());
                self.status = PromptStatus::Failed(format!("Could not save: {}", err.user_message()));
            }
        }
    }

    /// Edit the draft; clears a stale "saved" badge.
    pub fn edit(&mut self, text: String) {
        self.draft = text;
        if self.status == PromptStatus::Saved {
            self.status = PromptStatus::Idle;
        }
    }

    /// The saved prompt to send with chat requests, if non-blank.
    #[must_use]
    pub fn system_prompt(&self) -> Option<&str> {
        self.saved
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }
}
