//! Error taxonomy for a single Airship call.
//!
//! Key design decisions:
//! - Classified variants keep the raw status code and response body
//! - Local validation failures never reach the wire
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture

use crate::error::transport::TransportError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Outcome of a failed call. None of these are retried by the client.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Invalid Argument Error: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {status} >> {body} {location}")]
    Unauthorized {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {status} >> {body} {location}")]
    Forbidden {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Channel Not Found: {status} >> {body} {location}")]
    ChannelNotFound {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Response Code: {status} >> {body} {location}")]
    UnexpectedResponseCode {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {source} {location}")]
    Transport {
        #[source]
        source: TransportError,
        location: ErrorLocation,
    },

    #[error("JSON Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status code of the response that caused this error, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. }
            | ApiError::Forbidden { status, .. }
            | ApiError::ChannelNotFound { status, .. }
            | ApiError::UnexpectedResponseCode { status, .. } => Some(status.0),
            _ => None,
        }
    }

    /// Raw response body of a classified failure.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { body, .. }
            | ApiError::Forbidden { body, .. }
            | ApiError::ChannelNotFound { body, .. }
            | ApiError::UnexpectedResponseCode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the error came from classifying a non-success HTTP response.
    pub fn is_classified(&self) -> bool {
        self.status_code().is_some()
    }

    /// Get error category for metrics and logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument { .. } => "invalid_argument",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Forbidden { .. } => "forbidden",
            ApiError::ChannelNotFound { .. } => "channel_not_found",
            ApiError::UnexpectedResponseCode { .. } => "unexpected_response_code",
            ApiError::Transport {
                source: TransportError::Timeout { .. },
                ..
            } => "timeout",
            ApiError::Transport {
                source: TransportError::Connection { .. },
                ..
            } => "connection",
            ApiError::Transport { .. } => "transport",
            ApiError::Decode { .. } => "decode",
            ApiError::UrlParse { .. } => "url_parse",
        }
    }
}

impl From<TransportError> for ApiError {
    #[track_caller]
    fn from(error: TransportError) -> Self {
        ApiError::Transport {
            source: error,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
