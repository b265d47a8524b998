use super::*;
use crate::net::types::PromptBody;

// =============================================================
// decode_models
// =============================================================

#[test]
fn decode_models_preserves_server_order() {
    let models = decode_models(200, r#"["alpha","beta","gamma"]"#).unwrap();
    assert_eq!(models, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn decode_models_keeps_duplicates() {
    let models = decode_models(200, r#"["llama3","llama3"]"#).unwrap();
    assert_eq!(models.len(), 2);
}

#[test]
fn decode_models_accepts_empty_array() {
    assert_eq!(decode_models(200, "[]").unwrap(), Vec::<String>::new());
}

#[test]
fn decode_models_rejects_object_body() {
    let err = decode_models(200, r#"{"models":["alpha"]}"#).unwrap_err();
    assert!(matches!(err, ApiError::Protocol(_)), "got {err:?}");
}

#[test]
fn decode_models_rejects_non_string_entries() {
    let err = decode_models(200, r#"["alpha", 3]"#).unwrap_err();
    assert!(matches!(err, ApiError::Protocol(_)), "got {err:?}");
}

#[test]
fn decode_models_rejects_non_json() {
    let err = decode_models(200, "<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::Protocol(_)), "got {err:?}");
}

#[test]
fn decode_models_surfaces_backend_error_body() {
    let err = decode_models(500, r#"{"error":"ollama: command not found"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: "ollama: command not found".into() });
}

#[test]
fn decode_models_status_without_error_body() {
    let err = decode_models(404, "Not Found").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, message: String::new() });
}

// =============================================================
// decode_json / decode_ack
// =============================================================

#[test]
fn decode_json_reads_prompt_body() {
    let body: PromptBody = decode_json(200, r#"{"prompt":"You are a helpful AI assistant."}"#).unwrap();
    assert_eq!(body.prompt, "You are a helpful AI assistant.");
}

#[test]
fn decode_json_reads_chat_reply() {
    let reply: ChatReply = decode_json(200, r#"{"message":{"role":"assistant","content":"hi"},"done":true}"#).unwrap();
    assert_eq!(reply.message.role, "assistant");
    assert_eq!(reply.message.content, "hi");
}

#[test]
fn decode_ack_accepts_status_body() {
    assert!(decode_ack(200, r#"{"status":"cleared"}"#).is_ok());
    assert!(decode_ack(200, r#"{"status":"success"}"#).is_ok());
}

#[test]
fn decode_ack_rejects_missing_status() {
    let err = decode_ack(200, "{}").unwrap_err();
    assert!(matches!(err, ApiError::Protocol(_)));
}

#[test]
fn decode_ack_maps_server_error() {
    let err = decode_ack(500, r#"{"error":"Permission denied"}"#).unwrap_err();
    assert_eq!(err.user_message(), "Permission denied");
}

// =============================================================
// Transport outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn endpoints_report_network_error_outside_browser() {
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    fn ready<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("stub future should resolve immediately"),
        }
    }

    assert!(matches!(ready(fetch_models()), Err(ApiError::Network(_))));
    assert!(matches!(ready(fetch_prompt()), Err(ApiError::Network(_))));
    assert!(matches!(ready(save_prompt("x")), Err(ApiError::Network(_))));
    assert!(matches!(ready(clear_history()), Err(ApiError::Network(_))));
}
