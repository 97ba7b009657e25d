pub mod api;
pub mod config;
pub mod transport;

pub use api::ApiError;
pub use config::ConfigError;
pub use transport::TransportError;

use thiserror::Error;

/// Failures while assembling an [`crate::AirshipClient`].
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
