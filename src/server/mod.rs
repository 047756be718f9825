pub mod handlers;
pub mod types;

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use self::handlers::{server_status_handler, upload_image_handler};
use self::types::AppState;

// 10 MB is plenty for a photographed document
pub const REQUEST_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(Duration::from_secs(300));
    let request_body_limit = RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT);

    Router::new()
        .route("/", get(server_status_handler))
        .route("/api/upload", post(upload_image_handler))
        .layer(timeout)
        .layer(cors)
        .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
        .layer(request_body_limit)
        .with_state(state)
}
