//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind the page's controls (`themeToggle`, `modelSelector`,
//! `sendBtn`, `regenerateBtn`, `clearHistory`, `savePrompt`) to shared state
//! from Leptos context providers.

pub mod chat_panel;
pub mod model_selector;
pub mod prompt_panel;
pub mod settings_panel;
pub mod theme_toggle;
