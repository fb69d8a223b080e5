//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Repository not found
    #[error("Repository not found: {0}")]
    RepositoryNotFound(i64),

    /// Validation error (rejected before any backend call)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Backend returned a non-success status
    #[error("Backend error: {operation} (HTTP {status}) - {message}")]
    Backend {
        operation: String,
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Response body could not be decoded
    #[error("Parse error: {operation} - {detail}")]
    ParseError { operation: String, detail: String },

    /// Gateway configuration is unusable (bad base URL, TLS init failure)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RepositoryNotFound(_) | Self::ValidationError(_) => true,
            Self::Backend { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_not_found_are_expected() {
        assert!(CoreError::ValidationError("path".into()).is_expected());
        assert!(CoreError::RepositoryNotFound(7).is_expected());
        assert!(!CoreError::NetworkError("reset".into()).is_expected());
    }

    #[test]
    fn client_side_backend_errors_are_expected() {
        let bad_request = CoreError::Backend {
            operation: "AddRepository".into(),
            status: 400,
            message: "bad key".into(),
        };
        let internal = CoreError::Backend {
            operation: "AddRepository".into(),
            status: 500,
            message: "boom".into(),
        };
        assert!(bad_request.is_expected());
        assert!(!internal.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::Timeout("GetRepositories".into())).unwrap();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["details"], "GetRepositories");
    }
}
