use crate::pipeline::error::PipelineError;
use std::collections::BTreeMap;

/// Reasoning prose plus the structured answer extracted from a raw model
/// reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub reasoning: String,
    pub structured_answer: BTreeMap<String, String>,
}

/// Pull the embedded JSON object out of free-form model text.
///
/// The model is instructed to write English reasoning first and finish with
/// a single flat JSON object, but its output is not a formal contract, so
/// everything here fails soft into `MalformedModelOutput`. The object is
/// taken as the span from the first `{` to the last `}`, which also strips
/// markdown code fences the model sometimes adds.
pub fn parse_model_reply(raw: &str) -> Result<ParsedReply, PipelineError> {
    let start = raw.find('{').ok_or_else(|| {
        PipelineError::MalformedModelOutput("no JSON object in model reply".to_string())
    })?;
    let end = raw.rfind('}').ok_or_else(|| {
        PipelineError::MalformedModelOutput("unterminated JSON object in model reply".to_string())
    })?;
    if end < start {
        return Err(PipelineError::MalformedModelOutput(
            "no JSON object in model reply".to_string(),
        ));
    }

    let value: serde_json::Value = serde_json::from_str(&raw[start..=end])
        .map_err(|e| PipelineError::MalformedModelOutput(format!("unparseable JSON: {e}")))?;
    let object = value.as_object().ok_or_else(|| {
        PipelineError::MalformedModelOutput("structured answer is not an object".to_string())
    })?;
    if object.is_empty() {
        return Err(PipelineError::MalformedModelOutput(
            "structured answer is empty".to_string(),
        ));
    }

    let mut structured_answer = BTreeMap::new();
    for (key, value) in object {
        let Some(text) = value.as_str() else {
            return Err(PipelineError::MalformedModelOutput(format!(
                "value for \"{key}\" is not a string"
            )));
        };
        if text.trim().is_empty() {
            return Err(PipelineError::MalformedModelOutput(format!(
                "empty value for \"{key}\""
            )));
        }
        structured_answer.insert(key.clone(), text.to_string());
    }

    let reasoning = raw[..start].trim();
    if reasoning.is_empty() {
        return Err(PipelineError::MalformedModelOutput(
            "no reasoning text before the structured answer".to_string(),
        ));
    }

    Ok(ParsedReply {
        reasoning: reasoning.to_string(),
        structured_answer,
    })
}
