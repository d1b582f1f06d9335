//! Error types for REST API operations

use coinbase_auth::AuthError;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport failed to deliver the request or read the response
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response body was not valid JSON, or did not match the expected shape
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credentials could not be loaded or used for signing
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The response envelope carried an `error`; the message is its content
    #[error("{message}")]
    Api {
        /// Error content from the response
        message: String,
    },

    /// Missing API credentials for an endpoint that mutates state
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters, detected before any network call
    #[error("{0}")]
    InvalidParameter(String),

    /// A paginated listing kept returning `next_uri` past the page cap
    #[error("Pagination exceeded {limit} pages")]
    PageLimitExceeded {
        /// Configured maximum number of pages
        limit: usize,
    },

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RestError {
    /// Create an API error from the envelope's error text
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Check if this error came from the remote API
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this error indicates missing or unusable credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::Auth(_))
    }

    /// Check if this error was raised locally, before any request was sent
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::AuthRequired | Self::InvalidConfig(_)
        )
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
