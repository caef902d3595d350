/*
[INPUT]:  HTTP status codes, backend error messages, transport failures
[OUTPUT]: Closed TurboDocxError taxonomy with status and machine-readable codes
[POS]:    Error handling layer - unified error type for the entire crate
[UPDATE]: When the backend adds status codes that deserve their own kind
*/

use thiserror::Error;

/// Main error type for the TurboDocx SDK.
///
/// Every failure is created once at the transport boundary (or at credential
/// construction) and handed to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurboDocxError {
    /// Malformed caller input or backend-rejected payload (HTTP 400)
    #[error("{message}")]
    Validation { message: String },

    /// Missing or invalid credentials (HTTP 401)
    #[error("{message}")]
    Authentication { message: String },

    /// Referenced resource does not exist (HTTP 404)
    #[error("{message}")]
    NotFound { message: String },

    /// Backend throttling (HTTP 429). Never retried by the SDK.
    #[error("{message}")]
    RateLimit { message: String },

    /// Transport failure with no HTTP response (DNS, connect, timeout, bad body)
    #[error("{message}")]
    Network { message: String },

    /// Any other failure; keeps the status code when one exists
    #[error("{message}")]
    Api { status: Option<u16>, message: String },
}

impl TurboDocxError {
    /// Map an HTTP status code and optional backend message to an error kind.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => TurboDocxError::Validation {
                message: message.unwrap_or_else(|| "Validation failed".to_string()),
            },
            401 => TurboDocxError::Authentication {
                message: message.unwrap_or_else(|| "Authentication failed".to_string()),
            },
            404 => TurboDocxError::NotFound {
                message: message.unwrap_or_else(|| "Resource not found".to_string()),
            },
            429 => TurboDocxError::RateLimit {
                message: message.unwrap_or_else(|| "Rate limit exceeded".to_string()),
            },
            code => TurboDocxError::Api {
                status: Some(code),
                message: message
                    .unwrap_or_else(|| format!("Request failed with status {code}")),
            },
        }
    }

    /// Wrap a failure that never produced an HTTP response.
    pub fn network(cause: impl std::fmt::Display) -> Self {
        TurboDocxError::Network {
            message: format!("Network request failed: {cause}"),
        }
    }

    /// A success body that does not fit the expected response type
    pub(crate) fn decode(cause: impl std::fmt::Display) -> Self {
        TurboDocxError::Api {
            status: None,
            message: format!("Failed to parse response: {cause}"),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TurboDocxError::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        TurboDocxError::Authentication {
            message: message.into(),
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            TurboDocxError::Validation { message }
            | TurboDocxError::Authentication { message }
            | TurboDocxError::NotFound { message }
            | TurboDocxError::RateLimit { message }
            | TurboDocxError::Network { message }
            | TurboDocxError::Api { message, .. } => message,
        }
    }

    /// HTTP status associated with this kind, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TurboDocxError::Validation { .. } => Some(400),
            TurboDocxError::Authentication { .. } => Some(401),
            TurboDocxError::NotFound { .. } => Some(404),
            TurboDocxError::RateLimit { .. } => Some(429),
            TurboDocxError::Network { .. } => None,
            TurboDocxError::Api { status, .. } => *status,
        }
    }

    /// Fixed machine-readable code for the kind
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            TurboDocxError::Validation { .. } => Some("VALIDATION_ERROR"),
            TurboDocxError::Authentication { .. } => Some("AUTHENTICATION_ERROR"),
            TurboDocxError::NotFound { .. } => Some("NOT_FOUND"),
            TurboDocxError::RateLimit { .. } => Some("RATE_LIMIT_EXCEEDED"),
            TurboDocxError::Network { .. } | TurboDocxError::Api { .. } => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TurboDocxError::Authentication { .. })
    }
}

/// Result type alias for TurboDocx operations
pub type Result<T> = std::result::Result<T, TurboDocxError>;
