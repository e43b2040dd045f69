//! Error types for the session layer.

use rosapi_marshal::MarshalError;
use rosapi_proto::TransportError;
use thiserror::Error;

/// Errors that can occur while loading a [`SessionConfig`](crate::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The exchange failed; the transport's error is passed through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The reply arrived but could not be coerced into the record type.
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for session operations.
pub type ClientResult<T> = Result<T, ClientError>;
