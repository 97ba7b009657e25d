use crate::HttpStatusCode;

/// **VALUE**: Verifies only 200, 201 and 202 count as success.
///
/// **WHY THIS MATTERS**: Airship signals success with exactly these codes. A 204 or 299
/// must go through error classification like any other unexpected response.
///
/// **BUG THIS CATCHES**: Would catch a refactor to a generic `200..300` range check.
#[test]
fn given_status_codes_when_checking_success_then_only_200_to_202_accepted() {
    assert!(HttpStatusCode(200).is_accepted_success());
    assert!(HttpStatusCode(201).is_accepted_success());
    assert!(HttpStatusCode(202).is_accepted_success());

    assert!(!HttpStatusCode(204).is_accepted_success());
    assert!(!HttpStatusCode(199).is_accepted_success());
    assert!(!HttpStatusCode(400).is_accepted_success());
}

#[test]
fn given_auth_failures_when_categorized_then_flags_match() {
    assert!(HttpStatusCode(401).is_unauthorized());
    assert!(!HttpStatusCode(401).is_forbidden());
    assert!(HttpStatusCode(403).is_forbidden());
    assert!(HttpStatusCode(403).is_client_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::from(999).to_string(), "999");
    assert_eq!(HttpStatusCode::BAD_REQUEST.as_u16(), 400);
}
