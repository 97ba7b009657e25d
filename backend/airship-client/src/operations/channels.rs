use crate::error::ApiError;
use crate::operation::Operation;

use serde_json::{Value, json};

const CHANNEL_UNINSTALL_ENDPOINT: &str = "channels/uninstall";

pub const SUPPORTED_DEVICE_TYPES: [&str; 3] = ["ios", "android", "email"];

/// `POST channels/uninstall`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelUninstall {
    pub channel_id: String,
    pub device_type: String,
}

impl ChannelUninstall {
    pub fn new(channel_id: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            device_type: device_type.into(),
        }
    }
}

impl Operation for ChannelUninstall {
    fn endpoint(&self) -> String {
        CHANNEL_UNINSTALL_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        if !SUPPORTED_DEVICE_TYPES.contains(&self.device_type.as_str()) {
            return Err(ApiError::invalid_argument(format!(
                "Device-type '{}' is not supported by Airship",
                self.device_type
            )));
        }

        Ok(json!({
            "channel_id": self.channel_id,
            "device_type": self.device_type,
        }))
    }
}
