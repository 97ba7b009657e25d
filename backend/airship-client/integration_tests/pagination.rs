// Named user listing against a paginating mock

use crate::helpers::{HookLog, api_base_url, bearer, client_for};

use airship_client::{ApiError, PageCursor};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn named_users(ids: &[&str]) -> Vec<Value> {
    ids.iter().map(|id| json!({ "named_user_id": id })).collect()
}

/// **VALUE**: Verifies the stream follows a real `next_page` URL to the end.
///
/// **WHY THIS MATTERS**: `next_page` is absolute and points at the production host; only
/// its query string may be reused, otherwise tests and staging would leak to production.
#[tokio::test]
async fn given_next_page_urls_when_streaming_then_visits_every_named_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/named_users"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "named_users": named_users(&["harry.potter", "ron.weasley"]),
            "next_page": "https://go.airship.eu/api/named_users?start=wonder.woman"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/named_users"))
        .and(query_param("start", "wonder.woman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "named_users": named_users(&["wonder.woman"])
        })))
        .expect(1)
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let all = client
        .named_users(&bearer(), PageCursor::NextPageUrl)
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(all, named_users(&["harry.potter", "ron.weasley", "wonder.woman"]));
    assert_eq!(log.request_calls().len(), 2);
}

#[tokio::test]
async fn given_relative_next_page_when_streaming_then_resolves_against_base_url() {
    let server = MockServer::start().await;
    let next_page = format!("{}/named_users?start=b", api_base_url(&server));
    Mock::given(method("GET"))
        .and(path("/api/named_users"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "named_users": named_users(&["a"]),
            "next_page": next_page
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/named_users"))
        .and(query_param("start", "b"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "named_users": named_users(&["b"]) })),
        )
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let count = client
        .named_users(&bearer(), PageCursor::NextPageUrl)
        .unwrap()
        .for_each(|_| {})
        .await
        .unwrap();

    assert_eq!(count, 2);
}

#[tokio::test]
async fn given_page_numbers_when_streaming_then_stops_after_short_page() {
    let server = MockServer::start().await;
    for (page, ids) in [("1", vec!["a", "b"]), ("2", vec!["c"])] {
        Mock::given(method("GET"))
            .and(path("/api/named_users"))
            .and(query_param("page", page))
            .and(query_param("page_size", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "named_users": named_users(&ids) })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let all = client
        .named_users(&bearer(), PageCursor::PageNumber { page_size: 2 })
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(all, named_users(&["a", "b", "c"]));
}

#[tokio::test]
async fn given_failing_page_when_streaming_then_returns_classified_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/named_users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;
    let log = HookLog::default();
    let client = client_for(&server, &log);

    let result = client
        .named_users(&bearer(), PageCursor::default())
        .unwrap()
        .collect()
        .await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
    assert_eq!(log.error_calls(), vec![("named_users".to_string(), 403)]);
}
