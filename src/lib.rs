//! # ollama-chat-ui
//!
//! Leptos + WASM front end for a local Ollama chat backend.
//!
//! The crate owns the browser side only: model selection from
//! `/api/models`, the persisted theme cycle, the chat transcript, and the
//! system prompt editor. The backend it talks to is a separate service.
//!
//! Build for the browser with the `csr` feature; without it every module
//! compiles with DOM and network access stubbed out, which is how the unit
//! tests run.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed, which leaves logging working.
    console_log::init_with_level(config::current().log_level).ok();
    leptos::mount::mount_to_body(app::App);
}
