//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use axum::http::StatusCode;
use thiserror::Error;

/// Portal error type
#[derive(Debug, Error)]
pub enum PortalError {
    /// Storage error (users.json / access_log.json)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Password hash error
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Authorization error
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    /// Returns a safe error message for external clients.
    ///
    /// File paths, I/O details and other internals stay out of HTTP
    /// responses; the `Display` implementation carries the full detail
    /// and belongs in server logs only.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Storage(_) => "Storage error",
            Self::Serialization(_) => "Storage error",
            Self::Io(_) => "Storage error",
            Self::PasswordHash(_) => "Authentication error",
            Self::Authentication(_) => "Authentication failed",
            Self::Authorization(_) => "Access denied",
            Self::Validation(_) => "Request error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Authorization(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias
pub type PortalResult<T> = Result<T, PortalError>;
