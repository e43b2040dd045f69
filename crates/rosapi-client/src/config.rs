//! Session configuration.

use std::path::Path;

use rosapi_proto::RET_ATTRIBUTE;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a [`Session`](crate::Session).
///
/// ```yaml
/// label: core-router
/// log_replies: true
/// ack_attribute: ret
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name shown in log lines for this session.
    pub label: String,
    /// Log every reply sentence at debug level.
    pub log_replies: bool,
    /// Attribute of the `!done` sentence that carries a created item's id.
    pub ack_attribute: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            label: "routeros".to_string(),
            log_replies: false,
            ack_attribute: RET_ATTRIBUTE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
