//! HTTP transport abstraction for pluggable backends.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::TransportError;

use common::HttpStatusCode;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use reqwest::header::AUTHORIZATION;
use url::Url;

/// The HTTP methods the Airship API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready for a [`Transport`].
#[derive(Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL including the query string.
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &redacted_headers(&self.headers))
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Header map view with the Authorization value masked, for Debug output.
pub(crate) fn redacted_headers(headers: &BTreeMap<String, String>) -> BTreeMap<&str, &str> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
                (name.as_str(), "[REDACTED]")
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}

/// Status and raw body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: HttpStatusCode,
    pub body: String,
}

/// Trait for pluggable HTTP client backends.
///
/// Uses edition 2024's native `impl Future` in traits, no `async-trait` macro.
pub trait Transport: Send + Sync {
    /// Send a request and return whatever status the server answered with.
    ///
    /// Only failures that produced no HTTP response are errors here.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
