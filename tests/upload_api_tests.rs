//! HTTP surface tests: envelope shape and status behavior of the router.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{BOUNDARY, FAKE_PNG, gemini_reply, multipart_body, openai_reply, test_state};
use pretty_assertions::assert_eq;
use thairead::server::build_router;
use thairead::server::types::ApiResponse;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn envelope_from(response: axum::response::Response) -> ApiResponse {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn status_endpoint_reports_running() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    let router = build_router(test_state(&gemini.uri(), &openai.uri(), 5));

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"status": "running"}));
}

#[tokio::test]
async fn successful_upload_returns_thai_answer() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            "The sign says red and large.\n{\"color\": \"red\", \"size\": \"large\"}",
        )))
        .expect(1)
        .mount(&gemini)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply(
            "{\"color\": \"\u{e2a}\u{e35}\u{e41}\u{e14}\u{e07}\", \"size\": \"\u{e43}\u{e2b}\u{e0d}\u{e48}\"}",
        )))
        .expect(1)
        .mount(&openai)
        .await;

    let router = build_router(test_state(&gemini.uri(), &openai.uri(), 5));
    let body = multipart_body("file", "sign.png", "image/png", FAKE_PNG);
    let response = router.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let envelope = envelope_from(response).await;
    assert!(envelope.success);
    let data = envelope.data.unwrap();
    assert_eq!(data.reasoning, "The sign says red and large.");
    assert_eq!(data.structured_answer["color"], "สีแดง");
    assert_eq!(data.structured_answer["size"], "ใหญ่");
}

#[tokio::test]
async fn upload_without_file_field_fails_without_contacting_upstream() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;

    let router = build_router(test_state(&gemini.uri(), &openai.uri(), 5));
    let body = multipart_body("note", "note.txt", "text/plain", b"not an image field");
    let response = router.oneshot(upload_request(body)).await.unwrap();

    // failures keep HTTP 200 so the envelope stays uniform
    assert_eq!(response.status(), StatusCode::OK);
    let envelope = envelope_from(response).await;
    assert!(!envelope.success);
    assert!(envelope.message.contains("Invalid upload"));
    assert!(envelope.data.is_none());
    assert!(gemini.received_requests().await.unwrap().is_empty());
    assert!(openai.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_with_unsupported_content_type_is_rejected() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;

    let router = build_router(test_state(&gemini.uri(), &openai.uri(), 5));
    let body = multipart_body("file", "doc.pdf", "application/pdf", b"%PDF-1.4");
    let response = router.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let envelope = envelope_from(response).await;
    assert!(!envelope.success);
    assert!(envelope.message.contains("Invalid upload"));
    assert!(gemini.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_yields_safe_category_message() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal-secret-detail"))
        .mount(&gemini)
        .await;

    let router = build_router(test_state(&gemini.uri(), &openai.uri(), 5));
    let body = multipart_body("file", "sign.png", "image/png", FAKE_PNG);
    let response = router.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let envelope = envelope_from(response).await;
    assert!(!envelope.success);
    assert!(envelope.message.contains("temporarily unavailable"));
    assert!(!envelope.message.contains("internal-secret-detail"));
    assert!(envelope.data.is_none());
}
