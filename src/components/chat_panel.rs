//! Conversation view with send, regenerate and clear-history controls.

use leptos::prelude::*;

use crate::net::types::ChatRequest;
use crate::state::chat::{ChatMessage, ChatRole, ChatState};
use crate::state::models::ModelSelectorState;
use crate::state::prompt::PromptState;
use crate::util::markdown::render_markdown_html;

/// Chat panel showing the transcript and the message composer.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let models = expect_context::<RwSignal<ModelSelectorState>>();
    let prompt = expect_context::<RwSignal<PromptState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let request_context = move || {
        let model = models.with(|m| m.selected().map(str::to_owned));
        let system = prompt.with(|p| p.system_prompt().map(str::to_owned));
        (model, system)
    };

    let do_send = move || {
        let text = input.get();
        let (model, system) = request_context();
        let mut request = None;
        chat.update(|c| request = c.prepare_send(&text, model.as_deref(), system.as_deref()));
        if let Some(request) = request {
            input.set(String::new());
            dispatch_chat(chat, request);
        }
    };

    let do_regenerate = move || {
        let (model, system) = request_context();
        let mut request = None;
        chat.update(|c| request = c.prepare_regenerate(model.as_deref(), system.as_deref()));
        if let Some(request) = request {
            dispatch_chat(chat, request);
        }
    };

    let do_clear = move || {
        #[cfg(feature = "csr")]
        {
            let mut started = false;
            chat.update(|c| started = c.prepare_clear());
            if !started {
                return;
            }
            leptos::task::spawn_local(async move {
                let result = crate::net::api::clear_history().await;
                chat.update(|c| c.finish_clear(result));
            });
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.with(ChatState::busy);
    let can_regenerate = move || chat.with(ChatState::can_regenerate);

    view! {
        <section class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Start a conversation"</div>
                        }
                            .into_any();
                    }
                    messages.into_iter().map(render_message).collect::<Vec<_>>().into_any()
                }}
                {move || {
                    chat.with(|c| c.pending)
                        .then(|| view! { <div class="chat-panel__thinking">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__composer">
                <textarea
                    id="userInput"
                    class="chat-panel__input"
                    rows="3"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <div class="chat-panel__actions">
                    <button
                        id="sendBtn"
                        class="btn btn--primary"
                        on:click=move |_| do_send()
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                    <button
                        id="regenerateBtn"
                        class="btn"
                        on:click=move |_| do_regenerate()
                        disabled=move || !can_regenerate()
                    >
                        "Regenerate"
                    </button>
                    <button
                        id="clearHistory"
                        class="btn btn--danger"
                        on:click=move |_| do_clear()
                        disabled=move || chat.with(ChatState::busy)
                    >
                        "Clear history"
                    </button>
                    <label class="chat-panel__web-search">
                        <input
                            type="checkbox"
                            prop:checked=move || chat.with(|c| c.web_search)
                            on:change=move |ev| {
                                let enabled = event_target_checked(&ev);
                                chat.update(|c| c.web_search = enabled);
                            }
                        />
                        "Web search"
                    </label>
                </div>
            </div>
        </section>
    }
}

fn dispatch_chat(chat: RwSignal<ChatState>, request: ChatRequest) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat(&request).await;
            chat.update(|c| c.finish(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (chat, request);
    }
}

fn render_message(msg: ChatMessage) -> AnyView {
    let (modifier, body) = match msg.role {
        ChatRole::Assistant => {
            let rendered = render_markdown_html(&msg.content);
            ("assistant", view! { <div class="chat-panel__markdown" inner_html=rendered></div> }.into_any())
        }
        ChatRole::User => ("user", view! { <div class="chat-panel__text">{msg.content}</div> }.into_any()),
        ChatRole::Error => ("error", view! { <div class="chat-panel__text">{msg.content}</div> }.into_any()),
    };

    let sources = (!msg.sources.is_empty()).then(|| {
        let note = msg.note.clone();
        view! {
            <div class="chat-panel__sources">
                {note.map(|n| view! { <div class="chat-panel__sources-note">{n}</div> })}
                <ol>
                    {msg
                        .sources
                        .into_iter()
                        .map(|src| {
                            view! {
                                <li>
                                    <a href=src.url target="_blank" rel="noopener noreferrer" title=src.snippet>
                                        {src.title}
                                    </a>
                                    " ("
                                    {src.domain}
                                    ")"
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        }
    });

    view! {
        <div class=format!("chat-panel__message chat-panel__message--{modifier}")>
            {body}
            {sources}
        </div>
    }
    .into_any()
}
