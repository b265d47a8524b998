//! Header button cycling dark → light → retro.

use leptos::prelude::*;

use crate::state::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            id="themeToggle"
            class="btn theme-toggle"
            title=move || format!("Switch to {} theme", theme.get().next())
            on:click=move |_| theme.set(crate::util::theme::toggle())
        >
            {move || match theme.get() {
                Theme::Dark => "☾",
                Theme::Light => "☀",
                Theme::Retro => "▣",
            }}
        </button>
    }
}
