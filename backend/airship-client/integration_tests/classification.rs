// Error classification over a real HTTP round trip

use crate::helpers::{HookLog, bearer, client_for, client_with_timeout};

use airship_client::ApiError;
use airship_client::operations::{ChannelUninstall, EmailChannelUninstall};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_uninstall(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/channels/uninstall"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_401_when_calling_then_returns_unauthorized_and_fires_on_error() {
    let server = MockServer::start().await;
    mount_uninstall(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({ "ok": false, "error": "Unauthorized" })),
    )
    .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let error = client
        .call(&bearer(), &ChannelUninstall::new("9c36e8c7", "ios"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Unauthorized { .. }));
    assert_eq!(error.status_code(), Some(401));
    assert_eq!(log.error_calls(), vec![("channels/uninstall".to_string(), 401)]);
}

#[tokio::test]
async fn given_403_when_calling_then_returns_forbidden() {
    let server = MockServer::start().await;
    mount_uninstall(&server, ResponseTemplate::new(403).set_body_string("nope")).await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let error = client
        .call(&bearer(), &ChannelUninstall::new("9c36e8c7", "ios"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Forbidden { .. }));
    assert_eq!(error.response_body(), Some("nope"));
}

/// **VALUE**: Verifies the unknown-channel body is recognized on a real 400 response.
///
/// **WHY THIS MATTERS**: Callers treat a missing channel as "already gone" and move on;
/// misclassifying it as a generic failure makes them retry forever.
#[tokio::test]
async fn given_channel_not_found_body_when_uninstalling_email_then_returns_channel_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/channels/email/uninstall"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error": "Channel ID 'ron@hogwarts.edu' does not exist",
            "error_code": 40001
        })))
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let error = client
        .call(&bearer(), &EmailChannelUninstall::new("ron@hogwarts.edu"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::ChannelNotFound { .. }));
    assert_eq!(log.error_calls(), vec![("channels/email/uninstall".to_string(), 400)]);
}

#[tokio::test]
async fn given_500_when_calling_then_returns_unexpected_response_code() {
    let server = MockServer::start().await;
    mount_uninstall(&server, ResponseTemplate::new(500).set_body_string("boom")).await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let error = client
        .call(&bearer(), &ChannelUninstall::new("9c36e8c7", "ios"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::UnexpectedResponseCode { .. }));
    assert!(error.to_string().contains("500 >> boom"));
}

#[tokio::test]
async fn given_invalid_device_type_when_calling_then_nothing_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let error = client
        .call(&bearer(), &ChannelUninstall::new("9c36e8c7", "web"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::InvalidArgument { .. }));
    assert!(log.request_calls().is_empty());
}

/// **VALUE**: Verifies a slow server surfaces as a timeout transport error.
///
/// **BUG THIS CATCHES**: Would catch the client hanging past its configured timeout, or
/// reporting the timeout through `on_error` as if a response had arrived.
#[tokio::test]
async fn given_slow_server_when_calling_then_returns_timeout() {
    let server = MockServer::start().await;
    mount_uninstall(
        &server,
        ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
    )
    .await;
    let log = HookLog::default();
    let client = client_with_timeout(&server, &log, Duration::from_millis(50));

    let error = client
        .call(&bearer(), &ChannelUninstall::new("9c36e8c7", "ios"))
        .await
        .unwrap_err();

    assert_eq!(error.error_category(), "timeout");
    assert_eq!(log.request_calls(), vec!["channels/uninstall"]);
    assert!(log.error_calls().is_empty());
}
