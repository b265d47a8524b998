//! Model dropdown filled from `/api/models`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is requested once by `App` on mount; this component only renders
//! the resulting `ModelSelectorState` and records the user's choice.

use leptos::prelude::*;

use crate::state::models::{LoadStatus, ModelSelectorState};

#[component]
pub fn ModelSelector() -> impl IntoView {
    let models = expect_context::<RwSignal<ModelSelectorState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        models.update(|m| {
            m.select(&value);
        });
    };

    view! {
        <div class="model-selector">
            <label class="model-selector__label" for="modelSelector">
                "Model"
            </label>
            <select
                id="modelSelector"
                class="model-selector__select"
                on:change=on_change
                disabled=move || models.with(|m| m.options.is_empty())
            >
                {move || {
                    let state = models.get();
                    let selected = state.selected.clone();
                    state
                        .options
                        .into_iter()
                        .map(|opt| {
                            let is_selected = selected.as_deref() == Some(opt.value.as_str());
                            view! {
                                <option value=opt.value selected=is_selected>
                                    {opt.label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            {move || {
                models
                    .with(|m| m.status == LoadStatus::Loading)
                    .then(|| view! { <span class="model-selector__loading">"Loading models..."</span> })
            }}
            {move || {
                models
                    .with(|m| m.error().map(str::to_owned))
                    .map(|msg| {
                        view! {
                            <span class="model-selector__error" role="alert">
                                {msg}
                            </span>
                        }
                    })
            }}
        </div>
    }
}
