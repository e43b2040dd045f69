//! Error types for the transport collaborator.

use thiserror::Error;

/// Errors a [`Transport`](crate::Transport) reports for a failed exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device answered with a `!trap` sentence.
    #[error("device error (category {category}): {message}")]
    Device {
        /// Trap category reported by the device (0 when absent).
        category: u8,
        /// Human-readable message from the trap.
        message: String,
    },

    /// The device answered with `!fatal`; the connection is unusable.
    #[error("fatal device error: {0}")]
    Fatal(String),

    /// The connection was closed before the reply was complete.
    #[error("connection closed")]
    ConnectionClosed,
}

impl TransportError {
    /// Build a [`TransportError::Device`] from a trap message.
    pub fn device(category: u8, message: impl Into<String>) -> Self {
        TransportError::Device {
            category,
            message: message.into(),
        }
    }
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
