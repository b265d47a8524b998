//! Model selector state, filled once from `/api/models`.
//!
//! DESIGN
//! ======
//! The selector keeps the backend's order verbatim: no sorting, no dedup.
//! A failed load is terminal for the page (no retry) and is kept as a visible
//! status rather than an empty list with no explanation.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use crate::net::error::ApiError;

/// A single `<option>`: value and label are the model identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelOption {
    pub value: String,
    pub label: String,
}

impl ModelOption {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self { value: id.clone(), label: id }
    }
}

/// Lifecycle of the one model-list request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Inline message shown in place of the options.
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ModelSelectorState {
    pub options: Vec<ModelOption>,
    pub selected: Option<String>,
    pub status: LoadStatus,
}

impl ModelSelectorState {
    /// Apply the result of the model-list request.
    pub fn apply(&mut self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(ids) => {
                self.options = ids.into_iter().map(ModelOption::new).collect();
                let still_listed = self
                    .selected
                    .as_ref()
                    .is_some_and(|sel| self.options.iter().any(|o| &o.value == sel));
                if !still_listed {
                    self.selected = self.options.first().map(|o| o.value.clone());
                }
                self.status = LoadStatus::Ready;
                log::info!("loaded {} models", self.options.len());
            }
            Err(err) => {
                log::warn!("failed to load models: {err} ({})", err.error_code());
                self.options.clear();
                self.selected = None;
                self.status = LoadStatus::Failed(format!("Failed to load models: {}", err.user_message()));
            }
        }
    }

    /// Select a listed model. Unknown values are ignored.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.selected = Some(value.to_owned());
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
