use crate::config::Config;
use crate::pipeline::error::PipelineError;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;

const TRANSLATION_PROMPT: &str = "\
You are a professional Thai translator specializing in educational content \
and technical explanations.\n\
The user message contains a JSON object whose values are English strings. \
Translate every value into clear, natural Thai.\n\
Keep the keys and the JSON structure exactly as given: same keys, same \
number of entries, values replaced with Thai translations.\n\
Return only the JSON object.";

/// Translate the structured answer's values to Thai in a single upstream
/// call, preserving the key set exactly.
pub async fn translate_answer(
    client: &Client,
    config: &Config,
    answer: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, PipelineError> {
    let url = format!("{}/chat/completions", config.openai_api_url);
    let body = serde_json::json!({
        "model": config.translation_model,
        "messages": [
            { "role": "system", "content": TRANSLATION_PROMPT },
            { "role": "user", "content": serde_json::json!(answer).to_string() }
        ],
        "response_format": { "type": "json_object" }
    });

    tracing::debug!(model = %config.translation_model, keys = answer.len(), "calling translation model");
    let response = client
        .post(&url)
        .bearer_auth(&config.openai_api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body_text, "translation model error");
        return Err(PipelineError::from_status(status.as_u16(), &body_text));
    }

    let reply: ChatCompletionResponse = response.json().await?;
    let content = reply
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| {
            PipelineError::MalformedModelOutput(
                "no choices in translation response".to_string(),
            )
        })?
        .message
        .content;

    let translated: BTreeMap<String, String> = serde_json::from_str(&content).map_err(|e| {
        PipelineError::MalformedModelOutput(format!("translation reply is not a string map: {e}"))
    })?;

    if translated.len() != answer.len()
        || !answer.keys().all(|key| translated.contains_key(key))
    {
        return Err(PipelineError::TranslationShapeMismatch);
    }
    if translated.values().any(|value| value.trim().is_empty()) {
        return Err(PipelineError::MalformedModelOutput(
            "translation produced an empty value".to_string(),
        ));
    }

    Ok(translated)
}

// Wire types for the chat completion response, reduced to the fields we read.

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}
