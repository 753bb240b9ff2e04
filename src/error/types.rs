/**
 * API Error Types
 *
 * This module defines the error taxonomy used across all request handlers.
 * Each variant maps to an HTTP status code and a client-safe message.
 *
 * # Error Categories
 *
 * ## Validation
 *
 * Malformed or missing input. The message names the first violated
 * constraint and is safe to show to the user.
 *
 * ## Conflict
 *
 * A uniqueness violation (username or email already registered).
 *
 * ## Auth
 *
 * Bad credentials. The message is identical for an unknown identifier and
 * a wrong password so that response shape cannot be used to enumerate
 * usernames.
 *
 * ## Storage
 *
 * A database failure. The raw driver error is logged but never echoed to
 * the client; the response carries a generic message.
 *
 * ## Upstream
 *
 * The generation service is unreachable or returned an error. The chat
 * handler recovers these into user-facing text, so this variant only
 * reaches the HTTP boundary from auxiliary endpoints.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Fixed message for failed logins. Unknown user and wrong password are
/// indistinguishable by design.
pub const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

/// Backend error taxonomy
///
/// Every variant can be converted to an HTTP response via `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{message}")]
    Validation {
        /// Human-readable message naming the violated constraint
        message: String,
    },

    /// Uniqueness violation (username/email already registered)
    #[error("{message}")]
    Conflict {
        /// Human-readable message
        message: String,
    },

    /// Bad credentials (unknown user or wrong password)
    #[error("{INVALID_CREDENTIALS}")]
    Auth,

    /// Database unreachable or query failure
    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Generation service unreachable, timed out or returned an error
    #[error("Upstream error: {message}")]
    Upstream {
        /// Internal diagnostic message
        message: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Auth` - 401 Unauthorized
    /// - `Storage` - 500 Internal Server Error
    /// - `Upstream` - 502 Bad Gateway
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Auth => StatusCode::UNAUTHORIZED,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the client-facing message
    ///
    /// Storage errors are collapsed into a generic message; the raw driver
    /// detail is only logged server-side.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Conflict { message } => message.clone(),
            Self::Auth => INVALID_CREDENTIALS.to_string(),
            Self::Storage(_) => "Error de base de datos".to_string(),
            Self::Upstream { .. } => {
                "El servicio no está disponible temporalmente".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("El campo email es requerido");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "El campo email es requerido");
    }

    #[test]
    fn test_conflict_error() {
        let error = ApiError::conflict("El usuario o email ya están registrados");
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_auth_error_is_vague() {
        let error = ApiError::Auth;
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_storage_error_hides_driver_detail() {
        let error = ApiError::Storage(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Error de base de datos");
        assert!(!error.message().contains("RowNotFound"));
    }

    #[test]
    fn test_upstream_status_code() {
        let error = ApiError::upstream("connection refused");
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }
}
