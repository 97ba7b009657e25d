// Unit tests for RequestDescriptor construction

use crate::operation::{Operation, RequestDescriptor};
use crate::operations::{EmailChannelLookup, EmailChannelUpdate, NamedUserLookup};
use crate::tests::support::{APP_KEY, TOKEN, bearer};
use crate::transport::HttpMethod;
use crate::{AIRSHIP_ACCEPT_HEADER_VALUE, Credentials};

use url::Url;

struct DummyOperation;

impl Operation for DummyOperation {
    fn endpoint(&self) -> String {
        "dummy".to_string()
    }
}

/// **VALUE**: Verifies every request carries the four fixed headers.
///
/// **WHY THIS MATTERS**: Airship rejects requests without the versioned Accept header
/// or the app key header, regardless of the Authorization value.
#[test]
fn given_operation_when_building_descriptor_then_sets_fixed_headers() {
    let descriptor = RequestDescriptor::build(&DummyOperation, &bearer()).unwrap();

    assert_eq!(descriptor.header("Content-Type"), Some("application/json"));
    assert_eq!(
        descriptor.header("Accept"),
        Some("application/vnd.urbanairship+json; version=3")
    );
    assert_eq!(descriptor.header("X-UA-Appkey"), Some(APP_KEY));
    let expected_auth = format!("Bearer {TOKEN}");
    assert_eq!(descriptor.header("Authorization"), Some(expected_auth.as_str()));
    assert_eq!(
        AIRSHIP_ACCEPT_HEADER_VALUE,
        "application/vnd.urbanairship+json; version=3"
    );
}

/// **VALUE**: Verifies the defaults: POST with an empty JSON object body.
#[test]
fn given_operation_without_overrides_when_building_then_posts_empty_object() {
    let descriptor =
        RequestDescriptor::build(&DummyOperation, &Credentials::app_key_only(APP_KEY)).unwrap();

    assert_eq!(descriptor.method, HttpMethod::Post);
    assert_eq!(descriptor.body.as_deref(), Some(b"{}".as_slice()));
    assert!(descriptor.query.is_empty());
    assert_eq!(descriptor.header("Authorization"), Some(""));
}

#[test]
fn given_get_operation_when_building_then_has_no_body_and_maps_query() {
    let descriptor = RequestDescriptor::build(&NamedUserLookup::new("harry.potter"), &bearer())
        .unwrap();

    assert_eq!(descriptor.method, HttpMethod::Get);
    assert!(descriptor.body.is_none());
    assert_eq!(descriptor.query.get("id").map(String::as_str), Some("harry.potter"));

    let request = descriptor
        .into_http_request(&Url::parse("https://go.airship.eu/api/").unwrap())
        .unwrap();
    assert_eq!(
        request.url.as_str(),
        "https://go.airship.eu/api/named_users?id=harry.potter"
    );
}

#[test]
fn given_put_operation_when_building_then_has_body_and_no_query() {
    let descriptor =
        RequestDescriptor::build(&EmailChannelUpdate::new("chan-1", "a@b.c"), &bearer()).unwrap();

    assert_eq!(descriptor.method, HttpMethod::Put);
    assert!(descriptor.body.is_some());
    assert!(descriptor.query.is_empty());
    assert_eq!(descriptor.endpoint, "channels/email/chan-1");
}

/// **VALUE**: Verifies percent-encoded paths survive URL resolution unchanged.
///
/// **BUG THIS CATCHES**: Would catch double-encoding (`%2540`) when joining the base URL.
#[test]
fn given_encoded_email_path_when_resolving_url_then_keeps_single_encoding() {
    let descriptor =
        RequestDescriptor::build(&EmailChannelLookup::new("han.solo@rebellion.sw"), &bearer())
            .unwrap();

    let request = descriptor
        .into_http_request(&Url::parse("https://go.airship.eu/api/").unwrap())
        .unwrap();

    assert_eq!(
        request.url.as_str(),
        "https://go.airship.eu/api/channels/email/han.solo%40rebellion.sw"
    );
}

#[test]
fn given_descriptor_when_debug_formatted_then_authorization_is_redacted() {
    let descriptor = RequestDescriptor::build(&DummyOperation, &bearer()).unwrap();

    let debug = format!("{:?}", descriptor);

    assert!(!debug.contains(TOKEN));
    assert!(debug.contains("[REDACTED]"));
}
