use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// A request that never produced an HTTP status.
#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("Transport Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Connection Error: {message} {location}")]
    Connection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Other {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn timeout(message: impl Into<String>) -> Self {
        TransportError::Timeout {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn connection(message: impl Into<String>) -> Self {
        TransportError::Connection {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn other(message: impl Into<String>) -> Self {
        TransportError::Other {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Check the kind BEFORE converting to string
        if error.is_timeout() {
            TransportError::timeout(error.to_string())
        } else if error.is_connect() {
            TransportError::connection(error.to_string())
        } else {
            TransportError::other(error.to_string())
        }
    }
}
