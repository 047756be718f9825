#![allow(dead_code)]

use std::sync::Arc;
use thairead::config::Config;
use thairead::server::types::AppState;

pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nnot a real png but good enough";

pub fn test_state(gemini_url: &str, openai_url: &str, timeout_secs: u64) -> Arc<AppState> {
    let config = Config {
        gemini_api_key: "test-gemini-key".to_string(),
        openai_api_key: "test-openai-key".to_string(),
        gemini_api_url: gemini_url.to_string(),
        openai_api_url: openai_url.to_string(),
        vision_model: "gemini-2.0-flash".to_string(),
        translation_model: "gpt-4o".to_string(),
        upstream_timeout_secs: timeout_secs,
    };
    Arc::new(AppState::new(config).unwrap())
}

pub const BOUNDARY: &str = "test-boundary";

/// Hand-rolled multipart body with a single form field.
pub fn multipart_body(
    field_name: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Canned vision-model reply: English reasoning followed by the structured
/// answer object.
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

/// Canned translation reply wrapping `content` as the assistant message.
pub fn openai_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
