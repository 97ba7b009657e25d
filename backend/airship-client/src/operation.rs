//! The contract every Airship operation implements.

use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::transport::{HttpMethod, HttpRequest, redacted_headers};
use crate::{AIRSHIP_ACCEPT_HEADER_VALUE, AIRSHIP_APP_KEY_HEADER, JSON_CONTENT_TYPE};

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use url::Url;

/// One domain action that maps onto exactly one HTTP exchange.
///
/// Implementors only describe the request. Authentication, hooks, execution and
/// error classification are handled by [`crate::AirshipClient::call`].
pub trait Operation {
    /// Path below the API base URL, e.g. `channels/uninstall`.
    ///
    /// This is also the value reported to the observability hooks.
    fn endpoint(&self) -> String;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn query(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// JSON body for POST and PUT. Ignored for GET.
    ///
    /// Local validation happens here; an `Err` means nothing is sent.
    fn body(&self) -> Result<Value, ApiError> {
        Ok(json!({}))
    }
}

/// A request built from an [`Operation`] and a set of [`Credentials`].
///
/// Built fresh per call and never mutated afterwards.
#[derive(Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub endpoint: String,
    pub headers: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Validate and serialize the operation's body, then attach the fixed headers.
    pub fn build<O: Operation + ?Sized>(
        operation: &O,
        credentials: &Credentials,
    ) -> Result<Self, ApiError> {
        let method = operation.method();

        let body = match method {
            HttpMethod::Get => None,
            HttpMethod::Post | HttpMethod::Put => Some(serde_json::to_vec(&operation.body()?)?),
        };

        let headers = BTreeMap::from([
            (CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()),
            (ACCEPT.to_string(), AIRSHIP_ACCEPT_HEADER_VALUE.to_string()),
            (
                AIRSHIP_APP_KEY_HEADER.to_string(),
                credentials.app_key().to_string(),
            ),
            (AUTHORIZATION.to_string(), credentials.authorization_header()),
        ]);

        Ok(Self {
            method,
            endpoint: operation.endpoint(),
            headers,
            query: operation.query(),
            body,
        })
    }

    /// Resolve the endpoint against `base_url` and append the query string.
    pub fn into_http_request(self, base_url: &Url) -> Result<HttpRequest, ApiError> {
        let mut url = base_url.join(&self.endpoint)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            headers: self.headers,
            body: self.body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("endpoint", &self.endpoint)
            .field("headers", &redacted_headers(&self.headers))
            .field("query", &self.query)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}
