//! Classification of non-success Airship responses.
//!
//! Priority order: 401, then 403, then the "channel not found" body sniff, then
//! the catch-all [`ApiError::UnexpectedResponseCode`]. The body sniff applies to
//! any non-success status, not only 400.

use crate::error::ApiError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

const CHANNEL_NOT_FOUND_PATTERN: &str = r"(?i)Channel ID .*does not exist.*";
const ERROR_FIELD: &str = "error";
const DETAILS_FIELD: &str = "details";

static CHANNEL_NOT_FOUND_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn channel_not_found_regex() -> &'static Regex {
    CHANNEL_NOT_FOUND_REGEX
        .get_or_init(|| Regex::new(CHANNEL_NOT_FOUND_PATTERN).expect("valid regex pattern"))
}

/// Turn a response that is not 200/201/202 into the matching [`ApiError`].
#[track_caller]
pub fn classify_failure(status: HttpStatusCode, body: &str) -> ApiError {
    let location = ErrorLocation::from(Location::caller());
    let body = body.to_string();

    if status.is_unauthorized() {
        return ApiError::Unauthorized {
            status,
            body,
            location,
        };
    }

    if status.is_forbidden() {
        return ApiError::Forbidden {
            status,
            body,
            location,
        };
    }

    if is_channel_not_found(&body) {
        return ApiError::ChannelNotFound {
            status,
            body,
            location,
        };
    }

    ApiError::UnexpectedResponseCode {
        status,
        body,
        location,
    }
}

/// Whether `body` is JSON whose `error` or `details.error` reports an unknown channel.
///
/// A body that is not JSON is a non-match, never an error.
pub fn is_channel_not_found(body: &str) -> bool {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return false;
    };

    let reasons = [
        parsed.get(ERROR_FIELD),
        parsed
            .get(DETAILS_FIELD)
            .and_then(|details| details.get(ERROR_FIELD)),
    ];

    reasons
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .any(|reason| channel_not_found_regex().is_match(reason))
}
