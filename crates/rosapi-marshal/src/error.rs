//! Error types for marshaling.

use std::net::AddrParseError;
use std::num::ParseIntError;

use thiserror::Error;

/// A raw wire value that could not be converted to a field's kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Not one of the canonical boolean tokens.
    #[error("invalid boolean {0:?}")]
    InvalidBool(String),

    /// Not a base-10 integer, or out of range for the field.
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    /// Not a textual IPv4 or IPv6 address.
    #[error("invalid IP address: {0}")]
    InvalidIp(#[from] AddrParseError),

    /// Not a duration such as `3s` or `1h30m`.
    #[error("invalid duration {value:?}: {reason}")]
    InvalidDuration {
        /// The offending text.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Errors raised while moving values between attribute sets and records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// A wire value could not be coerced into the field's kind.
    #[error("cannot decode `{field}` from {value:?}: {source}")]
    Coercion {
        /// Wire name of the field.
        field: String,
        /// The raw value after trimming.
        value: String,
        /// Why the conversion failed.
        source: ValueError,
    },
}

impl MarshalError {
    /// Wire name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            MarshalError::Coercion { field, .. } => field,
        }
    }
}

/// Result type alias for marshaling operations.
pub type MarshalResult<T> = Result<T, MarshalError>;
