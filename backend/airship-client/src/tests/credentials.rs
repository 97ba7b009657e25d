// Unit tests for Authorization header selection and environment loading

use crate::credentials::{APP_KEY_ENV, MASTER_SECRET_ENV, TOKEN_ENV};
use crate::{ConfigError, Credentials};

use std::env;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serial_test::serial;

/// **VALUE**: Verifies token credentials produce a Bearer header.
#[test]
fn given_token_when_building_authorization_then_uses_bearer() {
    let credentials = Credentials::bearer("app", "my-token");

    assert_eq!(credentials.authorization_header(), "Bearer my-token");
}

/// **VALUE**: Verifies master-secret credentials produce Basic over `app_key:master_secret`.
///
/// **WHY THIS MATTERS**: Named user uninstall only works with master-secret auth. A
/// trailing newline (as some base64 encoders add) makes Airship reject the header.
///
/// **BUG THIS CATCHES**: Would catch a line-wrapping encoder or swapped key/secret order.
#[test]
fn given_master_secret_when_building_authorization_then_uses_basic_without_newline() {
    let credentials = Credentials::basic("airship_app_andromeda", "***master_secret***");

    let header = credentials.authorization_header();

    let expected = STANDARD.encode("airship_app_andromeda:***master_secret***");
    assert_eq!(header, format!("Basic {expected}"));
    assert!(!header.ends_with('\n'));
}

#[test]
fn given_token_and_master_secret_when_building_authorization_then_token_wins() {
    let credentials = Credentials::new(
        "app",
        Some("tok".to_string()),
        Some("secret".to_string()),
    );

    assert_eq!(credentials.authorization_header(), "Bearer tok");
}

#[test]
fn given_no_secret_when_building_authorization_then_header_is_empty() {
    let credentials = Credentials::app_key_only("app");

    assert_eq!(credentials.authorization_header(), "");
    assert_eq!(credentials.app_key(), "app");
}

/// **VALUE**: Verifies Debug output never contains the secret.
#[test]
fn given_credentials_when_debug_formatted_then_secrets_are_redacted() {
    let credentials = Credentials::new(
        "app",
        Some("tok-123456".to_string()),
        Some("secret-abcdef".to_string()),
    );

    let debug = format!("{:?}", credentials);

    assert!(!debug.contains("tok-123456"));
    assert!(!debug.contains("secret-abcdef"));
    assert!(debug.contains("app"));
}

fn clear_env() {
    // SAFETY: tests touching the environment are serialized with #[serial]
    unsafe {
        env::remove_var(APP_KEY_ENV);
        env::remove_var(TOKEN_ENV);
        env::remove_var(MASTER_SECRET_ENV);
    }
}

#[test]
#[serial]
fn given_env_with_app_key_and_token_when_loading_then_uses_bearer() {
    clear_env();
    // SAFETY: serialized
    unsafe {
        env::set_var(APP_KEY_ENV, "env-app");
        env::set_var(TOKEN_ENV, "env-token");
    }

    let credentials = Credentials::from_env().unwrap();

    assert_eq!(credentials.app_key(), "env-app");
    assert!(credentials.has_token());
    assert!(!credentials.has_master_secret());
    assert_eq!(credentials.authorization_header(), "Bearer env-token");
    clear_env();
}

#[test]
#[serial]
fn given_env_with_empty_token_when_loading_then_token_is_unset() {
    clear_env();
    // SAFETY: serialized
    unsafe {
        env::set_var(APP_KEY_ENV, "env-app");
        env::set_var(TOKEN_ENV, "  ");
        env::set_var(MASTER_SECRET_ENV, "env-secret");
    }

    let credentials = Credentials::from_env().unwrap();

    assert!(!credentials.has_token());
    assert!(credentials.authorization_header().starts_with("Basic "));
    clear_env();
}

/// **VALUE**: Verifies a missing app key is a clear configuration error.
///
/// **BUG THIS CATCHES**: Would catch silently defaulting the app key to an empty string,
/// which Airship answers with an opaque 401.
#[test]
#[serial]
fn given_env_without_app_key_when_loading_then_returns_missing_variable() {
    clear_env();

    let result = Credentials::from_env();

    assert!(matches!(
        result,
        Err(ConfigError::MissingVariable { name, .. }) if name == APP_KEY_ENV
    ));
}
