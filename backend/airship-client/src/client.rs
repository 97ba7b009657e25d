use crate::classify::classify_failure;
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::config::ConfigError;
use crate::error::{ApiError, CoreError};
use crate::hooks::ObservabilityHooks;
use crate::operation::{Operation, RequestDescriptor};
use crate::operations::NamedUserList;
use crate::pagination::{ListOperation, PageCursor, PageStream};
use crate::transport::{ReqwestTransport, Transport};

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, warn};
use serde_json::Value;
use url::Url;

/// Entry point for executing Airship operations.
///
/// Holds no per-call state; credentials are passed to every call so token and
/// master-secret operations can share one client.
#[derive(Debug, Clone)]
pub struct AirshipClient<T: Transport = ReqwestTransport> {
    base_url: Url,
    transport: T,
    hooks: ObservabilityHooks,
}

impl AirshipClient<ReqwestTransport> {
    /// Client over reqwest with the configured timeout and no-op hooks.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::new(config, transport, ObservabilityHooks::default())
    }
}

impl<T: Transport> AirshipClient<T> {
    pub fn new(
        config: &ClientConfig,
        transport: T,
        hooks: ObservabilityHooks,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let base_url =
            Url::parse(&config.normalized_base_url()).map_err(|e| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base_url '{}': {e}", config.base_url),
            })?;

        Ok(Self {
            base_url,
            transport,
            hooks,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn hooks(&self) -> &ObservabilityHooks {
        &self.hooks
    }

    /// Execute one operation and return the decoded JSON response.
    ///
    /// `on_request` fires exactly once unless local validation rejects the
    /// operation first. `on_error` fires exactly once when the response status
    /// is anything other than 200, 201 or 202.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidArgument`] if the operation rejects its own input
    /// - A classified variant for non-success responses (see [`crate::classify`])
    /// - [`ApiError::Transport`] if no response was received
    /// - [`ApiError::Decode`] if a success body is not JSON
    pub async fn call<O: Operation + ?Sized>(
        &self,
        credentials: &Credentials,
        operation: &O,
    ) -> Result<Value, ApiError> {
        let descriptor = RequestDescriptor::build(operation, credentials)?;
        let endpoint = descriptor.endpoint.clone();
        let method = descriptor.method;

        self.hooks.track_request(&endpoint);
        debug!("Airship request: {method} {endpoint}");

        let request = descriptor.into_http_request(&self.base_url)?;
        let response = self.transport.send(request).await?;

        if !response.status.is_accepted_success() {
            self.hooks.track_error(&endpoint, response.status.as_u16());
            let error = classify_failure(response.status, &response.body);
            warn!(
                "Airship request failed: {method} {endpoint} - HTTP {} ({})",
                response.status,
                error.error_category()
            );
            return Err(error);
        }

        debug!(
            "Airship response: {method} {endpoint} - HTTP {}",
            response.status
        );

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Stream every named user of the project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for a zero page size.
    pub fn named_users(
        &self,
        credentials: &Credentials,
        cursor: PageCursor,
    ) -> Result<PageStream<'_, T, NamedUserList>, ApiError> {
        self.paginate(credentials, NamedUserList::default(), cursor)
    }

    /// Stream the elements of any list endpoint.
    pub fn paginate<L: ListOperation>(
        &self,
        credentials: &Credentials,
        list: L,
        cursor: PageCursor,
    ) -> Result<PageStream<'_, T, L>, ApiError> {
        PageStream::new(self, credentials.clone(), list, cursor)
    }
}
