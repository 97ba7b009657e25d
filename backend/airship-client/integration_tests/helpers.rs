// Shared setup for tests that talk to a wiremock Airship stand-in

use airship_client::{
    AirshipClient, ClientConfig, Credentials, ObservabilityHooks, ReqwestTransport,
};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use wiremock::MockServer;

pub const APP_KEY: &str = "airship_app_andromeda";
pub const TOKEN: &str = "***TOKEN***";
pub const MASTER_SECRET: &str = "***MASTER***";
pub const ACCEPT: &str = "application/vnd.urbanairship+json; version=3";

#[derive(Clone, Default)]
pub struct HookLog {
    pub requests: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<(String, u16)>>>,
}

impl HookLog {
    pub fn hooks(&self) -> ObservabilityHooks {
        let requests = Arc::clone(&self.requests);
        let errors = Arc::clone(&self.errors);
        ObservabilityHooks::default()
            .with_on_request(move |endpoint| requests.lock().unwrap().push(endpoint.to_string()))
            .with_on_error(move |endpoint, status| {
                errors.lock().unwrap().push((endpoint.to_string(), status))
            })
    }

    pub fn request_calls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn error_calls(&self) -> Vec<(String, u16)> {
        self.errors.lock().unwrap().clone()
    }
}

/// Base URL of the mock server, shaped like the real `.../api/` root.
pub fn api_base_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

pub fn client_for(server: &MockServer, log: &HookLog) -> AirshipClient<ReqwestTransport> {
    client_with_timeout(server, log, Duration::from_secs(5))
}

pub fn client_with_timeout(
    server: &MockServer,
    log: &HookLog,
    timeout: Duration,
) -> AirshipClient<ReqwestTransport> {
    AirshipClient::new(
        &ClientConfig::with_base_url(api_base_url(server)),
        ReqwestTransport::new(timeout).unwrap(),
        log.hooks(),
    )
    .unwrap()
}

pub fn bearer() -> Credentials {
    Credentials::bearer(APP_KEY, TOKEN)
}

pub fn master() -> Credentials {
    Credentials::basic(APP_KEY, MASTER_SECRET)
}
