use crate::pipeline;
use crate::pipeline::error::PipelineError;
use crate::server::types::{ApiResponse, AppState};
use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use serde_json::{Value, json};
use std::sync::Arc;

// server status handler
pub async fn server_status_handler() -> Json<Value> {
    Json(json!({"status": "running"}))
}

/// Upload handler: reads the image out of the multipart form and runs the
/// analyze-and-translate pipeline. Failures always come back as HTTP 200
/// with `success:false` so the envelope stays uniform for the frontend.
pub async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Json<ApiResponse> {
    let start_time = std::time::Instant::now();

    let (bytes, content_type) = match read_image_field(multipart).await {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(error = %err, "rejected upload");
            return Json(ApiResponse::failed(&err));
        }
    };

    match pipeline::process(&state.http_client, &state.config, &bytes, &content_type).await {
        Ok(analysis) => {
            tracing::info!(elapsed = ?start_time.elapsed(), "upload processed");
            Json(ApiResponse::ok(analysis))
        }
        Err(err) => {
            tracing::error!(error = %err, elapsed = ?start_time.elapsed(), "pipeline failed");
            Json(ApiResponse::failed(&err))
        }
    }
}

/// Find the `file` field and read it fully. Rejects the request before any
/// upstream call is made if the field is missing or unreadable.
async fn read_image_field(mut multipart: Multipart) -> Result<(Bytes, String), PipelineError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PipelineError::InvalidInput(format!("unreadable multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| PipelineError::InvalidInput(format!("unreadable file field: {e}")))?;
        return Ok((bytes, content_type));
    }
    Err(PipelineError::InvalidInput(
        "no \"file\" field in upload".to_string(),
    ))
}
