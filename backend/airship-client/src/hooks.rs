//! Request and error tracking callbacks.
//!
//! The host application installs these once at composition time (typically to
//! feed its metrics system) and hands them to [`crate::AirshipClient`]. Both
//! default to no-ops.

use std::fmt;
use std::sync::Arc;

/// Called with the endpoint path before every request is sent.
pub type RequestHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Called with the endpoint path and status code when a response is classified as a failure.
pub type ErrorHook = Arc<dyn Fn(&str, u16) + Send + Sync>;

#[derive(Clone)]
pub struct ObservabilityHooks {
    on_request: RequestHook,
    on_error: ErrorHook,
}

impl ObservabilityHooks {
    /// Hooks that do nothing.
    pub fn noop() -> Self {
        Self {
            on_request: Arc::new(|_: &str| {}),
            on_error: Arc::new(|_: &str, _: u16| {}),
        }
    }

    pub fn with_on_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_request = Arc::new(hook);
        self
    }

    pub fn with_on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, u16) + Send + Sync + 'static,
    {
        self.on_error = Arc::new(hook);
        self
    }

    pub(crate) fn track_request(&self, endpoint: &str) {
        (self.on_request)(endpoint);
    }

    pub(crate) fn track_error(&self, endpoint: &str, status: u16) {
        (self.on_error)(endpoint, status);
    }
}

impl Default for ObservabilityHooks {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for ObservabilityHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservabilityHooks").finish_non_exhaustive()
    }
}
