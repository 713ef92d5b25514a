//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body};
use serde_json::{Value, json};

use simchat::ai::prompt::system_instruction;
use simchat::api::AppState;
use simchat::api::app;
use simchat::core::AppConfig;

pub const TEST_MODEL: &str = "gpt-3.5-turbo";

/// Config pointing at a fake LLM host, usually a `mockito` server.
pub fn test_config(api_hostname: &str) -> AppConfig {
    AppConfig {
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from(TEST_MODEL),
    }
}

/// Creates a test application router backed by a fresh session that
/// sends completions to `api_hostname`.
pub fn test_app(api_hostname: &str) -> Router {
    let app_state = AppState::new(test_config(api_hostname));
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

/// A chat completion response body with a single reply.
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// The exact request body expected for `history` (user/assistant
/// pairs) followed by `message`.
pub fn expected_request(history: &[(&str, &str)], message: &str) -> Value {
    let mut messages = vec![json!({"role": "system", "content": system_instruction()})];
    for (user, reply) in history {
        messages.push(json!({"role": "user", "content": user}));
        messages.push(json!({"role": "assistant", "content": reply}));
    }
    messages.push(json!({"role": "user", "content": message}));

    json!({
        "model": TEST_MODEL,
        "messages": messages,
        "temperature": 0.0
    })
}
