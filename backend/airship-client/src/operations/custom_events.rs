use crate::error::ApiError;
use crate::operation::Operation;
use crate::operations::timestamps::iso8601_utc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

const CUSTOM_EVENTS_ENDPOINT: &str = "custom-events";

/// `POST custom-events` for a single event attributed to a named user.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEventCreate {
    /// Sent lowercased; Airship requires lowercase event names.
    pub event_name: String,
    pub occurred_at: DateTime<Utc>,
    pub named_user_id: String,
    /// Event properties. Values must not be JSON objects.
    pub properties: Map<String, Value>,
}

impl CustomEventCreate {
    pub fn new(
        event_name: impl Into<String>,
        occurred_at: DateTime<Utc>,
        named_user_id: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            occurred_at,
            named_user_id: named_user_id.into(),
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    fn assert_flat_properties(&self) -> Result<(), ApiError> {
        if let Some((key, _)) = self.properties.iter().find(|(_, value)| value.is_object()) {
            return Err(ApiError::invalid_argument(format!(
                "additional payload must not be nested (key '{key}')"
            )));
        }
        Ok(())
    }
}

impl Operation for CustomEventCreate {
    fn endpoint(&self) -> String {
        CUSTOM_EVENTS_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        self.assert_flat_properties()?;

        Ok(json!([{
            "occurred": iso8601_utc(&self.occurred_at),
            "user": {
                "named_user_id": self.named_user_id,
            },
            "body": {
                "name": self.event_name.to_lowercase(),
                "properties": self.properties,
            },
        }]))
    }
}
