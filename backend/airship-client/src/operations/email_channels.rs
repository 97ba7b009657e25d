use crate::error::ApiError;
use crate::operation::Operation;
use crate::operations::timestamps::iso8601_utc;
use crate::transport::HttpMethod;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

const EMAIL_CHANNELS_ENDPOINT: &str = "channels/email";
const EMAIL_UNINSTALL_ENDPOINT: &str = "channels/email/uninstall";
const EMAIL_CHANNEL_TYPE: &str = "email";

/// `POST channels/email`, registering an address as an email channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailChannelCreate {
    pub email: String,
    pub commercial_opted_in: Option<DateTime<Utc>>,
    pub transactional_opted_in: Option<DateTime<Utc>>,
    /// IANA zone name, e.g. `Europe/Berlin`.
    pub timezone: Option<String>,
    pub locale_language: Option<String>,
}

impl EmailChannelCreate {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

impl Operation for EmailChannelCreate {
    fn endpoint(&self) -> String {
        EMAIL_CHANNELS_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        Ok(json!({
            "channel": {
                "type": EMAIL_CHANNEL_TYPE,
                "commercial_opted_in": self.commercial_opted_in.as_ref().map(iso8601_utc),
                "transactional_opted_in": self.transactional_opted_in.as_ref().map(iso8601_utc),
                "address": self.email,
                "timezone": self.timezone,
                "locale_language": self.locale_language,
            }
        }))
    }
}

/// `GET channels/email/<address>`; the address is percent-encoded into the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChannelLookup {
    pub email: String,
}

impl EmailChannelLookup {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Operation for EmailChannelLookup {
    fn endpoint(&self) -> String {
        format!(
            "{EMAIL_CHANNELS_ENDPOINT}/{}",
            urlencoding::encode(&self.email)
        )
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }
}

/// `POST channels/email/uninstall`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChannelUninstall {
    pub email: String,
}

impl EmailChannelUninstall {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Operation for EmailChannelUninstall {
    fn endpoint(&self) -> String {
        EMAIL_UNINSTALL_ENDPOINT.to_string()
    }

    fn body(&self) -> Result<Value, ApiError> {
        Ok(json!({ "email_address": self.email }))
    }
}

/// `PUT channels/email/<channel_id>`, replacing the channel's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChannelUpdate {
    /// Embedded verbatim in the path; must not contain `/`, `?` or `#`.
    pub channel_id: String,
    pub email: String,
}

impl EmailChannelUpdate {
    pub fn new(channel_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            email: email.into(),
        }
    }
}

impl Operation for EmailChannelUpdate {
    fn endpoint(&self) -> String {
        format!("{EMAIL_CHANNELS_ENDPOINT}/{}", self.channel_id)
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn body(&self) -> Result<Value, ApiError> {
        Ok(json!({
            "channel": {
                "type": EMAIL_CHANNEL_TYPE,
                "address": self.email,
            }
        }))
    }
}
