use super::*;

// =============================================================
// Helpers
// =============================================================

fn reply(content: &str) -> ChatReply {
    ChatReply {
        message: WireMessage { role: "assistant".into(), content: content.into() },
        web_search_results: Vec::new(),
        web_search_note: None,
    }
}

fn roles(state: &ChatState) -> Vec<ChatRole> {
    state.messages.iter().map(|m| m.role).collect()
}

/// Run one full send/reply exchange.
fn exchange(state: &mut ChatState, text: &str, answer: &str) {
    state.prepare_send(text, Some("llama3"), None).unwrap();
    state.finish(Ok(reply(answer)));
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.pending);
    assert!(!state.web_search);
    assert!(!state.can_regenerate());
}

// =============================================================
// prepare_send
// =============================================================

#[test]
fn prepare_send_appends_user_message_and_builds_request() {
    let mut state = ChatState::default();
    let req = state.prepare_send("  hello  ", Some("llama3"), Some("be brief")).unwrap();

    assert_eq!(req.model, "llama3");
    assert_eq!(req.system.as_deref(), Some("be brief"));
    assert_eq!(req.messages, vec![WireMessage { role: "user".into(), content: "hello".into() }]);
    assert!(state.pending);
    assert_eq!(roles(&state), vec![ChatRole::User]);
}

#[test]
fn prepare_send_ignores_blank_input() {
    let mut state = ChatState::default();
    assert!(state.prepare_send("   \n", Some("llama3"), None).is_none());
    assert!(state.messages.is_empty());
    assert!(!state.pending);
}

#[test]
fn prepare_send_ignores_input_while_pending() {
    let mut state = ChatState::default();
    state.prepare_send("first", Some("llama3"), None).unwrap();
    assert!(state.prepare_send("second", Some("llama3"), None).is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn prepare_send_without_model_reports_error() {
    let mut state = ChatState::default();
    assert!(state.prepare_send("hello", None, None).is_none());
    assert_eq!(roles(&state), vec![ChatRole::Error]);
    assert!(!state.pending);
}

#[test]
fn prepare_send_carries_options_and_web_search_flag() {
    let mut opts = GenerationOptions::default();
    opts.temperature = 0.1;
    let mut state = ChatState::with_options(opts.clone());
    state.web_search = true;

    let req = state.prepare_send("news?", Some("llama3"), None).unwrap();
    assert_eq!(req.options, opts);
    assert!(req.web_search);
}

#[test]
fn outgoing_transcript_excludes_error_notices() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");
    state.push_error("Error: Could not reach the server");

    let req = state.prepare_send("two", Some("llama3"), None).unwrap();
    let sent: Vec<&str> = req.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(sent, vec!["user", "assistant", "user"]);
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_appends_assistant_reply_with_sources() {
    let mut state = ChatState::default();
    state.prepare_send("search this", Some("llama3"), None).unwrap();

    let mut r = reply("answer");
    r.web_search_results = vec![WebSource {
        title: "Example".into(),
        url: "https://example.com".into(),
        snippet: "snippet".into(),
        domain: "example.com".into(),
    }];
    r.web_search_note = Some("I found these sources to help answer your question:".into());
    state.finish(Ok(r));

    assert!(!state.pending);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, "answer");
    assert_eq!(last.sources.len(), 1);
    assert!(last.note.is_some());
}

#[test]
fn finish_error_appends_notice_and_clears_pending() {
    let mut state = ChatState::default();
    state.prepare_send("hello", Some("llama3"), None).unwrap();
    state.finish(Err(ApiError::Status { status: 500, message: "model 'x' not found".into() }));

    assert!(!state.pending);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Error);
    assert_eq!(last.content, "Error: model 'x' not found");
}

// =============================================================
// prepare_regenerate
// =============================================================

#[test]
fn regenerate_drops_last_reply_and_resends() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");
    exchange(&mut state, "two", "reply two");

    let req = state.prepare_regenerate(Some("llama3"), None).unwrap();
    let contents: Vec<&str> = req.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "reply one", "two"]);
    assert_eq!(state.messages.len(), 3);
    assert!(state.pending);
}

#[test]
fn regenerate_drops_trailing_error_notices() {
    let mut state = ChatState::default();
    state.prepare_send("hello", Some("llama3"), None).unwrap();
    state.finish(Err(ApiError::Network("offline".into())));

    let req = state.prepare_regenerate(Some("llama3"), None).unwrap();
    assert_eq!(req.messages.len(), 1);
    assert_eq!(roles(&state), vec![ChatRole::User]);
}

#[test]
fn regenerate_is_noop_without_user_message() {
    let mut state = ChatState::default();
    assert!(state.prepare_regenerate(Some("llama3"), None).is_none());

    state.push_error("Select a model before sending");
    assert!(state.prepare_regenerate(Some("llama3"), None).is_none());
    assert_eq!(roles(&state), vec![ChatRole::Error]);
}

#[test]
fn regenerate_is_noop_while_pending() {
    let mut state = ChatState::default();
    state.prepare_send("hello", Some("llama3"), None).unwrap();
    assert!(state.prepare_regenerate(Some("llama3"), None).is_none());
}

// =============================================================
// finish_clear
// =============================================================

#[test]
fn finish_clear_success_empties_transcript() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");
    state.finish_clear(Ok(()));
    assert!(state.messages.is_empty());
}

#[test]
fn finish_clear_failure_keeps_transcript() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");
    state.finish_clear(Err(ApiError::Network("offline".into())));
    assert_eq!(roles(&state), vec![ChatRole::User, ChatRole::Assistant, ChatRole::Error]);
}

#[test]
fn prepare_clear_refuses_while_busy() {
    let mut state = ChatState::default();
    state.prepare_send("hello", Some("llama3"), None).unwrap();
    assert!(!state.prepare_clear());
    assert!(!state.clearing);

    state.finish(Ok(reply("hi")));
    assert!(state.prepare_clear());
    assert!(!state.prepare_clear(), "a second clear must wait for the first");
}

#[test]
fn send_and_regenerate_are_refused_while_clearing() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");
    assert!(state.prepare_clear());

    assert!(state.prepare_send("two", Some("llama3"), None).is_none());
    assert!(!state.can_regenerate());
    assert!(state.prepare_regenerate(Some("llama3"), None).is_none());
    assert_eq!(roles(&state), vec![ChatRole::User, ChatRole::Assistant]);
}

#[test]
fn transcript_after_clear_starts_with_user_turn() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");

    assert!(state.prepare_clear());
    assert!(state.prepare_send("two", Some("llama3"), None).is_none());
    state.finish_clear(Ok(()));
    assert!(!state.clearing);

    let req = state.prepare_send("three", Some("llama3"), None).unwrap();
    let sent: Vec<&str> = req.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(sent, vec!["user"]);
}

#[test]
fn failed_clear_releases_the_guard() {
    let mut state = ChatState::default();
    exchange(&mut state, "one", "reply one");
    assert!(state.prepare_clear());
    state.finish_clear(Err(ApiError::Network("offline".into())));

    assert!(!state.busy());
    assert!(state.prepare_send("two", Some("llama3"), None).is_some());
}
