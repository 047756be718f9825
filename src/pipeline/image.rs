use crate::pipeline::error::PipelineError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const SUPPORTED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Base64 payload ready to embed in a model request.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data: String,
}

/// Validate and encode an uploaded image. Pure transform, no I/O.
pub fn encode_image(bytes: &[u8], content_type: &str) -> Result<EncodedImage, PipelineError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if !SUPPORTED_IMAGE_TYPES.contains(&mime.as_str()) {
        return Err(PipelineError::InvalidInput(format!(
            "unsupported content type \"{content_type}\""
        )));
    }
    if bytes.is_empty() {
        return Err(PipelineError::InvalidInput("empty image file".to_string()));
    }

    Ok(EncodedImage {
        mime_type: mime,
        data: STANDARD.encode(bytes),
    })
}
