pub mod error;
pub mod image;
pub mod llm;
pub mod parser;
pub mod translate;

use crate::config::Config;
use self::error::PipelineError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final result of a successful pipeline run: English reasoning plus the
/// structured answer with Thai values.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Analysis {
    pub reasoning: String,
    pub structured_answer: BTreeMap<String, String>,
}

/// Run the whole pipeline for one upload:
/// encode -> vision model -> parse -> translate.
///
/// Everything is request-scoped; the only shared pieces are the reqwest
/// client and the read-only config.
pub async fn process(
    client: &Client,
    config: &Config,
    bytes: &[u8],
    content_type: &str,
) -> Result<Analysis, PipelineError> {
    let encoded = image::encode_image(bytes, content_type)?;
    tracing::info!(size = bytes.len(), mime = %encoded.mime_type, "image prepared for model");

    let reply = llm::analyze_image(client, config, &encoded).await?;
    tracing::info!(reply_len = reply.len(), "vision model reply received");

    let parsed = parser::parse_model_reply(&reply)?;
    tracing::info!(keys = parsed.structured_answer.len(), "model reply parsed");

    let translated = translate::translate_answer(client, config, &parsed.structured_answer).await?;
    tracing::info!("translation complete");

    Ok(Analysis {
        reasoning: parsed.reasoning,
        structured_answer: translated,
    })
}
