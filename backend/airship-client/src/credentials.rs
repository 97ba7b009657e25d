//! Per-call Airship credentials.
//!
//! A bearer token takes precedence over the master secret. With neither
//! present the Authorization header is sent empty.

use crate::error::ConfigError;

use common::{ErrorLocation, RedactedSecret};

use std::env;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info};

pub const APP_KEY_ENV: &str = "AIRSHIP_APP_KEY";
pub const TOKEN_ENV: &str = "AIRSHIP_TOKEN";
pub const MASTER_SECRET_ENV: &str = "AIRSHIP_MASTER_SECRET";

const BEARER_PREFIX: &str = "Bearer ";
const BASIC_PREFIX: &str = "Basic ";

#[derive(Debug, Clone)]
pub struct Credentials {
    app_key: String,
    token: Option<RedactedSecret>,
    master_secret: Option<RedactedSecret>,
}

impl Credentials {
    pub fn new(
        app_key: impl Into<String>,
        token: Option<String>,
        master_secret: Option<String>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            token: token.map(RedactedSecret::new),
            master_secret: master_secret.map(RedactedSecret::new),
        }
    }

    /// Bearer authentication with an app-specific access token.
    pub fn bearer(app_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(app_key, Some(token.into()), None)
    }

    /// Basic authentication over `app_key:master_secret`.
    pub fn basic(app_key: impl Into<String>, master_secret: impl Into<String>) -> Self {
        Self::new(app_key, None, Some(master_secret.into()))
    }

    pub fn app_key_only(app_key: impl Into<String>) -> Self {
        Self::new(app_key, None, None)
    }

    /// Load credentials from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// `AIRSHIP_APP_KEY` is required; `AIRSHIP_TOKEN` and `AIRSHIP_MASTER_SECRET`
    /// are optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] if the app key is unset and
    /// [`ConfigError::EnvLoad`] if a variable is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(_) => debug!("No .env file found - reading existing environment variables"),
        }

        let app_key = read_var(APP_KEY_ENV)?.ok_or_else(|| ConfigError::MissingVariable {
            location: ErrorLocation::from(Location::caller()),
            name: APP_KEY_ENV,
        })?;

        Ok(Self::new(
            app_key,
            read_var(TOKEN_ENV)?,
            read_var(MASTER_SECRET_ENV)?,
        ))
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_master_secret(&self) -> bool {
        self.master_secret.is_some()
    }

    /// Value of the Authorization header for these credentials.
    pub fn authorization_header(&self) -> String {
        if let Some(token) = &self.token {
            return format!("{BEARER_PREFIX}{}", token.expose());
        }

        if let Some(master_secret) = &self.master_secret {
            let encoded = STANDARD.encode(format!("{}:{}", self.app_key, master_secret.expose()));
            return format!("{BASIC_PREFIX}{encoded}");
        }

        String::new()
    }
}

/// Read an optional variable; empty values count as unset.
#[track_caller]
fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvLoad {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("{name}: {e}"),
        }),
    }
}
