//! Error types for the HTTP backend adapter

use assistant_application::GatewayError;
use thiserror::Error;

/// Result type alias for backend adapter operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur when talking to the policy backend over HTTP
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {status}")]
    Status { status: u16 },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<BackendError> for GatewayError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Http(e) => GatewayError::Transport(e.to_string()),
            BackendError::Status { status } => GatewayError::Status { status },
            BackendError::ParseError { error, .. } => GatewayError::InvalidPayload(error),
            BackendError::InvalidBaseUrl(url) => {
                GatewayError::Other(format!("invalid backend URL: {url}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_keeps_code() {
        let converted: GatewayError = BackendError::Status { status: 503 }.into();
        assert!(matches!(converted, GatewayError::Status { status: 503 }));
        assert!(converted.to_string().contains("503"));
    }

    #[test]
    fn test_parse_error_becomes_invalid_payload() {
        let converted: GatewayError = BackendError::ParseError {
            error: "missing field `summary`".to_string(),
            raw: "{}".to_string(),
        }
        .into();
        assert!(matches!(converted, GatewayError::InvalidPayload(_)));
        assert!(converted.to_string().contains("missing field"));
    }
}
