use crate::config::Config;
use crate::pipeline::error::PipelineError;
use crate::pipeline::image::EncodedImage;
use reqwest::Client;
use serde::Deserialize;

const ANALYSIS_PROMPT: &str = "\
You are an expert assistant that reads Thai text in images.\n\
Carefully read ALL Thai text visible in the image, think about what each \
piece of information means and how the pieces relate, and work out what the \
text is asking or presenting.\n\
\n\
Respond in two parts, in this order:\n\
1. Your reasoning in clear English prose: what the text says, the relevant \
context, and how you reached your interpretation.\n\
2. A single JSON object summarizing your structured answer.\n\
\n\
Rules for the JSON object:\n\
- every key and every value must be a plain string\n\
- no nested objects, no arrays, no numbers or booleans\n\
- keys must be unique, snake_case English\n\
- the object comes after the reasoning and nothing may follow it";

/// Send the encoded image to the vision model and return the raw reply text.
pub async fn analyze_image(
    client: &Client,
    config: &Config,
    image: &EncodedImage,
) -> Result<String, PipelineError> {
    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config.gemini_api_url, config.vision_model, config.gemini_api_key
    );
    let body = serde_json::json!({
        "systemInstruction": {
            "parts": [{ "text": ANALYSIS_PROMPT }]
        },
        "contents": [{
            "role": "user",
            "parts": [
                { "text": "Read the Thai text in this image and answer in the required format." },
                {
                    "inlineData": {
                        "mimeType": image.mime_type,
                        "data": image.data,
                    }
                }
            ]
        }]
    });

    tracing::debug!(model = %config.vision_model, "calling vision model");
    let response = client.post(&url).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body_text, "vision model error");
        return Err(PipelineError::from_status(status.as_u16(), &body_text));
    }

    let reply: GenerateContentResponse = response.json().await?;
    let candidate = reply.candidates.into_iter().next().ok_or_else(|| {
        PipelineError::MalformedModelOutput("no candidates in model response".to_string())
    })?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.is_empty() {
        return Err(PipelineError::MalformedModelOutput(
            "model returned no text".to_string(),
        ));
    }

    Ok(text)
}

// Wire types for the generateContent response, reduced to the fields we read.

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
