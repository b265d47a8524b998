//! System prompt editor with a save button.

use leptos::prelude::*;

use crate::state::prompt::{PromptState, PromptStatus};

#[component]
pub fn PromptPanel() -> impl IntoView {
    let prompt = expect_context::<RwSignal<PromptState>>();

    let on_save = move |_| {
        let mut text = None;
        prompt.update(|p| text = p.prepare_save());
        let Some(text) = text else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_prompt(&text).await;
                prompt.update(|p| p.finish_save(text, result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
        }
    };

    let status_line = move || match prompt.with(|p| p.status.clone()) {
        PromptStatus::Idle => None,
        PromptStatus::Saving => Some(("saving", "Saving...".to_owned())),
        PromptStatus::Saved => Some(("saved", "Saved".to_owned())),
        PromptStatus::Failed(msg) => Some(("failed", msg)),
    };

    view! {
        <section class="prompt-panel">
            <label class="prompt-panel__label" for="systemPrompt">
                "System prompt"
            </label>
            <textarea
                id="systemPrompt"
                class="prompt-panel__input"
                rows="6"
                prop:value=move || prompt.with(|p| p.draft.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    prompt.update(|p| p.edit(text));
                }
            ></textarea>
            <button
                id="savePrompt"
                class="btn btn--primary"
                on:click=on_save
                disabled=move || prompt.with(|p| p.status == PromptStatus::Saving)
            >
                "Save prompt"
            </button>
            {move || {
                status_line()
                    .map(|(modifier, text)| {
                        view! {
                            <span class=format!("prompt-panel__status prompt-panel__status--{modifier}")>
                                {text}
                            </span>
                        }
                    })
            }}
        </section>
    }
}
