// Unit tests for response classification

use crate::ApiError;
use crate::classify::{classify_failure, is_channel_not_found};

use common::HttpStatusCode;

/// **VALUE**: Verifies 401 and 403 win over any body content.
///
/// **WHY THIS MATTERS**: Callers treat these as credential failures. A 401 whose body
/// happens to mention a missing channel must still be reported as Unauthorized.
///
/// **BUG THIS CATCHES**: Would catch the body sniff being moved ahead of the status checks.
#[test]
fn given_auth_statuses_when_classified_then_status_takes_priority_over_body() {
    let body = r#"{"ok":false,"error":"Channel ID [[abc]] does not exist."}"#;

    assert!(matches!(
        classify_failure(HttpStatusCode(401), body),
        ApiError::Unauthorized { .. }
    ));
    assert!(matches!(
        classify_failure(HttpStatusCode(403), body),
        ApiError::Forbidden { .. }
    ));
}

/// **VALUE**: Verifies both documented "channel not found" body shapes.
///
/// **WHY THIS MATTERS**: Airship reports a missing channel as a generic 400. Callers
/// uninstalling channels treat ChannelNotFound as "already gone", so a miss here turns
/// an idempotent cleanup into a hard failure.
///
/// **BUG THIS CATCHES**: Would catch dropping the `details.error` lookup or making the
/// pattern case sensitive ("Channel id" vs "Channel ID").
#[test]
fn given_channel_not_found_bodies_when_classified_then_returns_channel_not_found() {
    let top_level = r#"{"ok":false,"error":"Channel ID [[c7625a59-e576-49da-a68b-1c0ae62de112]] does not exist.","error_code":40001}"#;
    let nested = r#"{"ok":false,"error":"Could not parse request body.","error_code":40022,"details":{"error":"Channel id does not exist for email address y@example.com"}}"#;

    assert!(matches!(
        classify_failure(HttpStatusCode(400), top_level),
        ApiError::ChannelNotFound { .. }
    ));
    assert!(matches!(
        classify_failure(HttpStatusCode(400), nested),
        ApiError::ChannelNotFound { .. }
    ));
}

/// **VALUE**: Verifies the body sniff is not limited to 400.
#[test]
fn given_channel_not_found_body_at_404_when_classified_then_returns_channel_not_found() {
    let body = r#"{"error":"Channel ID abc does not exist"}"#;

    let error = classify_failure(HttpStatusCode(404), body);

    assert!(matches!(error, ApiError::ChannelNotFound { .. }));
    assert_eq!(error.status_code(), Some(404));
}

#[test]
fn given_unrelated_400_body_when_classified_then_returns_unexpected_response_code() {
    let body = r#"{"ok":false,"error":"SomeRandomError","error_code":40001}"#;

    let error = classify_failure(HttpStatusCode(400), body);

    assert!(matches!(error, ApiError::UnexpectedResponseCode { .. }));
    assert_eq!(error.response_body(), Some(body));
}

/// **VALUE**: Verifies a malformed body never breaks classification.
///
/// **WHY THIS MATTERS**: Error bodies from proxies and load balancers are often HTML or
/// truncated. The classifier must fall through instead of surfacing a JSON error.
///
/// **BUG THIS CATCHES**: Would catch a `?` on the inner JSON parse.
#[test]
fn given_malformed_body_when_classified_then_falls_through_to_unexpected_response_code() {
    let error = classify_failure(HttpStatusCode(400), "false}");

    assert!(matches!(error, ApiError::UnexpectedResponseCode { .. }));
    assert!(!is_channel_not_found("<html>Bad Gateway</html>"));
    assert!(!is_channel_not_found(""));
}

#[test]
fn given_non_string_error_fields_when_sniffed_then_no_match() {
    assert!(!is_channel_not_found(r#"{"error":40001}"#));
    assert!(!is_channel_not_found(r#"{"details":"Channel ID x does not exist"}"#));
    assert!(!is_channel_not_found(r#"["Channel ID x does not exist"]"#));
}

/// **VALUE**: Verifies the diagnostic text keeps the `"{status} >> {body}"` shape.
///
/// **WHY THIS MATTERS**: Operators grep logs for this format to see the raw Airship reply.
#[test]
fn given_unexpected_response_when_formatted_then_includes_status_and_body() {
    let error = classify_failure(HttpStatusCode(999), "DUMMY");

    let message = error.to_string();

    assert!(message.contains("Unexpected Response Code"));
    assert!(message.contains("999 >> DUMMY"));
    assert_eq!(error.error_category(), "unexpected_response_code");
    assert!(error.is_classified());
}
