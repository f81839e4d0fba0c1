//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and validated after merging.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default backend base URL (local development server)
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the policy-answering backend
    pub base_url: String,
    /// Optional bounded request timeout. Absent by default: a request
    /// runs until it resolves, with no abort path.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileBackendConfig {
    /// The configured timeout as a [`Duration`], if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete raw configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the merged configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.backend.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:5000");
        assert!(config.backend.timeout_seconds.is_none());
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            base_url = "http://policies.internal:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://policies.internal:8080");
        assert!(config.backend.timeout_seconds.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_timeout_parses_to_duration() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            timeout_seconds = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.timeout(), Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            timeout_seconds = 0
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            base_url = ""
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyBaseUrl)
        ));
    }
}
