//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    chat_panel::ChatPanel, model_selector::ModelSelector, prompt_panel::PromptPanel,
    settings_panel::SettingsPanel, theme_toggle::ThemeToggle,
};
use crate::state::{chat::ChatState, models::ModelSelectorState, prompt::PromptState};

/// Root application component.
///
/// Restores the persisted theme, provides shared state, and kicks off the
/// one-time model list and system prompt loads.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::config::current();
    let theme = RwSignal::new(crate::util::theme::restore());
    let models = RwSignal::new(ModelSelectorState::default());
    let chat = RwSignal::new(ChatState::with_options(config.generation.clone()));
    let prompt = RwSignal::new(PromptState::default());

    provide_context(theme);
    provide_context(models);
    provide_context(chat);
    provide_context(prompt);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_models().await;
            models.update(|m| m.apply(result));
        });
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_prompt().await;
            prompt.update(|p| p.apply_loaded(result));
        });
    }

    view! {
        <Title text="Ollama Chat"/>

        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"Ollama Chat"</h1>
                <span class="app__spacer"></span>
                <ModelSelector/>
                <ThemeToggle/>
            </header>
            <main class="app__body">
                <aside class="app__sidebar">
                    <PromptPanel/>
                    <SettingsPanel/>
                </aside>
                <ChatPanel/>
            </main>
        </div>
    }
}
