//! Shared primitives for the Airship client workspace.
//!
//! Nothing in here talks to the network. These are the small value types the
//! client crate builds its error taxonomy and credential handling on:
//!
//! - [`ErrorLocation`]: call-site capture attached to every error variant
//! - [`HttpStatusCode`]: status code newtype with the categories the client branches on
//! - [`RedactedSecret`]: tokens and master secrets that never leak into logs

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

#[cfg(test)]
mod tests;
