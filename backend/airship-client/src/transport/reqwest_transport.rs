//! Reqwest-based transport.

use crate::error::TransportError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

use common::HttpStatusCode;

use std::time::Duration;

use reqwest::{Client, Method};

/// A [`Transport`] backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing [`reqwest::Client`], e.g. one shared with the host application.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
