//! Typed client for the Airship (Urban Airship) REST API.
//!
//! Every domain action maps to exactly one HTTP exchange. The [`AirshipClient`]
//! authenticates the request, fires the [`ObservabilityHooks`], executes it on a
//! pluggable [`Transport`] and classifies the outcome into an [`ApiError`]. List
//! endpoints are exposed as a lazy [`PageStream`].

pub mod classify;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod hooks;
pub mod operation;
pub mod operations;
pub mod pagination;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::AirshipClient;
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use error::{ApiError, ConfigError, TransportError};
pub use hooks::ObservabilityHooks;
pub use operation::{Operation, RequestDescriptor};
pub use pagination::{PageCursor, PageStream};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub const AIRSHIP_API_BASE_URL: &str = "https://go.airship.eu/api/";
pub const AIRSHIP_API_VERSION: u32 = 3;
pub const AIRSHIP_ACCEPT_HEADER_VALUE: &str = const_format::concatcp!(
    "application/vnd.urbanairship+json; version=",
    AIRSHIP_API_VERSION
);
pub const AIRSHIP_APP_KEY_HEADER: &str = "X-UA-Appkey";
pub const JSON_CONTENT_TYPE: &str = "application/json";
