//! Sampling controls forwarded with every chat request.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <section class="settings-panel">
            <h2 class="settings-panel__title">"Generation"</h2>
            <NumberField
                label="Temperature"
                step="0.1"
                read=move || chat.with(|c| c.options.temperature.to_string())
                write=move |raw: String| {
                    if let Ok(v) = raw.parse::<f64>() {
                        chat.update(|c| c.options.temperature = v.clamp(0.0, 2.0));
                    }
                }
            />
            <NumberField
                label="Top P"
                step="0.05"
                read=move || chat.with(|c| c.options.top_p.to_string())
                write=move |raw: String| {
                    if let Ok(v) = raw.parse::<f64>() {
                        chat.update(|c| c.options.top_p = v.clamp(0.0, 1.0));
                    }
                }
            />
            <NumberField
                label="Top K"
                step="1"
                read=move || chat.with(|c| c.options.top_k.to_string())
                write=move |raw: String| {
                    if let Ok(v) = raw.parse::<u32>() {
                        chat.update(|c| c.options.top_k = v);
                    }
                }
            />
            <NumberField
                label="Max tokens"
                step="64"
                read=move || chat.with(|c| c.options.max_tokens.to_string())
                write=move |raw: String| {
                    if let Ok(v) = raw.parse::<u32>() {
                        chat.update(|c| c.options.max_tokens = v);
                    }
                }
            />
            <NumberField
                label="Context length"
                step="256"
                read=move || chat.with(|c| c.options.context_length.to_string())
                write=move |raw: String| {
                    if let Ok(v) = raw.parse::<u32>() {
                        chat.update(|c| c.options.context_length = v);
                    }
                }
            />
            <button
                class="btn settings-panel__reset"
                on:click=move |_| {
                    let defaults = crate::config::current().generation.clone();
                    chat.update(|c| c.options = defaults);
                }
            >
                "Reset"
            </button>
        </section>
    }
}

/// Labeled numeric input; unparsable entries are ignored.
#[component]
fn NumberField(
    label: &'static str,
    step: &'static str,
    read: impl Fn() -> String + Send + Sync + 'static,
    write: impl Fn(String) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="settings-panel__field">
            <span class="settings-panel__label">{label}</span>
            <input
                type="number"
                class="settings-panel__input"
                step=step
                prop:value=read
                on:change=move |ev| write(event_target_value(&ev))
            />
        </label>
    }
}
