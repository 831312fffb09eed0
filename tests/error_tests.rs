// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use gemini_gateway::error::GatewayError;
use http_body_util::BodyExt;

async fn body_of(error: GatewayError) -> (StatusCode, String, String) {
    let response = error.into_response();
    let status = response.status();
    let content_type = response.headers()["content-type"]
        .to_str()
        .unwrap()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        GatewayError::Config("bad file".to_string()),
        GatewayError::Credentials("missing key".to_string()),
        GatewayError::InvalidRequest("expected value".to_string()),
        GatewayError::GeminiApi("HTTP 503: unavailable".to_string()),
        GatewayError::Cancelled,
        GatewayError::Internal("oops".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_invalid_request_display_is_raw() {
    let error = GatewayError::InvalidRequest("expected value at line 1 column 1".to_string());
    assert_eq!(error.to_string(), "expected value at line 1 column 1");
}

#[test]
fn test_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
    let error: GatewayError = json_err.into();
    assert!(matches!(error, GatewayError::Json(_)));
}

#[tokio::test]
async fn test_invalid_request_is_plain_text_400() {
    let (status, content_type, body) =
        body_of(GatewayError::InvalidRequest("expected value".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "expected value");
}

#[tokio::test]
async fn test_upstream_error_is_plain_text_500() {
    let error = GatewayError::GeminiApi("Connection refused".to_string());
    let expected = error.to_string();

    let (status, content_type, body) = body_of(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, expected);
    assert!(body.contains("Connection refused"));
}

#[test]
fn test_only_invalid_request_is_client_error() {
    assert_eq!(
        GatewayError::InvalidRequest(String::new()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        GatewayError::Cancelled.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        GatewayError::Credentials(String::new()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
