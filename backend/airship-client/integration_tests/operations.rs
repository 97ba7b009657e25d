// End-to-end request shapes over reqwest against a mock Airship

use crate::helpers::{ACCEPT, APP_KEY, HookLog, MASTER_SECRET, TOKEN, bearer, client_for, master};

use airship_client::operations::{
    ChannelUninstall, CustomEventCreate, EmailChannelLookup, EmailChannelUpdate,
    NamedUserLookup, NamedUserTagsUpdate, NamedUserUninstall, parse_timestamp,
};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies every fixed header reaches the wire alongside the JSON body.
///
/// **WHY THIS MATTERS**: Airship rejects requests without the versioned Accept header
/// or the app key, with errors that do not point at the missing header.
#[tokio::test]
async fn given_token_credentials_when_uninstalling_channel_then_sends_headers_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/channels/uninstall"))
        .and(header("content-type", "application/json"))
        .and(header("accept", ACCEPT))
        .and(header("x-ua-appkey", APP_KEY))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({ "channel_id": "9c36e8c7", "device_type": "ios" })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let response = client
        .call(&bearer(), &ChannelUninstall::new("9c36e8c7", "ios"))
        .await
        .unwrap();

    assert_eq!(response, json!({ "ok": true }));
    assert_eq!(log.request_calls(), vec!["channels/uninstall"]);
    assert!(log.error_calls().is_empty());
}

/// **VALUE**: Verifies master-secret credentials are sent as Basic auth.
///
/// **BUG THIS CATCHES**: Would catch a line-wrapped or URL-safe base64 encoding.
#[tokio::test]
async fn given_master_secret_when_uninstalling_named_user_then_uses_basic_auth() {
    let server = MockServer::start().await;
    let expected = format!("Basic {}", STANDARD.encode(format!("{APP_KEY}:{MASTER_SECRET}")));
    Mock::given(method("POST"))
        .and(path("/api/named_users/uninstall"))
        .and(header("authorization", expected.as_str()))
        .and(body_json(json!({ "named_user_id": ["harry.potter"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let result = client
        .call(&master(), &NamedUserUninstall::new("harry.potter"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_custom_event_when_creating_then_posts_json_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/custom-events"))
        .and(body_json(json!([{
            "occurred": "2020-03-13T17:30:45Z",
            "user": { "named_user_id": "harry.potter" },
            "body": { "name": "ride_booked", "properties": { "ride_id": 42 } }
        }])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "operationId": "abc" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let event = CustomEventCreate::new(
        "RIDE_BOOKED",
        parse_timestamp("2020-03-13T17:30:45Z").unwrap(),
        "harry.potter",
    )
    .with_property("ride_id", 42);
    let response = client.call(&bearer(), &event).await.unwrap();

    assert_eq!(response["operationId"], "abc");
}

#[tokio::test]
async fn given_email_lookup_when_calling_then_gets_encoded_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/channels/email/ron%40hogwarts.edu"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": true, "channel": { "channel_id": "251d3318" } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let response = client
        .call(&bearer(), &EmailChannelLookup::new("ron@hogwarts.edu"))
        .await
        .unwrap();

    assert_eq!(response["channel"]["channel_id"], "251d3318");
    assert_eq!(log.request_calls(), vec!["channels/email/ron%40hogwarts.edu"]);
}

#[tokio::test]
async fn given_email_update_when_calling_then_puts_to_channel() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/channels/email/251d3318"))
        .and(body_json(json!({ "channel": { "type": "email", "address": "ron@ministry.gov" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let result = client
        .call(&bearer(), &EmailChannelUpdate::new("251d3318", "ron@ministry.gov"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_named_user_lookup_when_calling_then_sends_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/named_users"))
        .and(query_param("id", "harry.potter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "ok": true, "named_user": { "named_user_id": "harry.potter" } }),
        ))
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let response = client
        .call(&bearer(), &NamedUserLookup::new("harry.potter"))
        .await
        .unwrap();

    assert_eq!(response["named_user"]["named_user_id"], "harry.potter");
}

#[tokio::test]
async fn given_tags_update_when_calling_then_posts_group_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/named_users/tags"))
        .and(body_json(json!({
            "audience": { "named_user_id": ["harry.potter"] },
            "remove": { "ioki": ["muggle"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let result = client
        .call(&bearer(), &NamedUserTagsUpdate::new("harry.potter").remove("muggle"))
        .await;

    assert!(result.is_ok());
}
