// In-memory transport and hook recorders shared by the unit tests

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::{AirshipClient, ClientConfig, Credentials, ObservabilityHooks};

use common::HttpStatusCode;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "https://go.airship.eu/api/";
pub const APP_KEY: &str = "airship_app_andromeda";
pub const TOKEN: &str = "***TOKEN***";

/// Replays scripted responses in order and records every request it receives.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status: HttpStatusCode(status),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail_with(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::other("no scripted response left")))
    }
}

/// Captures every hook invocation.
#[derive(Clone, Default)]
pub struct HookRecorder {
    pub requests: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<(String, u16)>>>,
}

impl HookRecorder {
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

pub fn test_client(
    transport: &RecordingTransport,
    recorder: &HookRecorder,
) -> AirshipClient<RecordingTransport> {
    AirshipClient::new(
        &ClientConfig::with_base_url(TEST_BASE_URL),
        transport.clone(),
        recorder.hooks(),
    )
    .unwrap()
}

pub fn bearer() -> Credentials {
    Credentials::bearer(APP_KEY, TOKEN)
}

pub fn request_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().expect("request has a body")).unwrap()
}
