//! Problem Error Types
//!
//! This module provides problem-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::ProblemNo;

/// Problem-specific result type alias
pub type ProblemResult<T> = Result<T, ProblemError>;

/// Store call that failed, used to phrase the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Check,
    Save,
    Fetch,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreOperation::Check => "check problem number",
            StoreOperation::Save => "save problem",
            StoreOperation::Fetch => "fetch problems",
        })
    }
}

/// Problem-specific error variants
///
/// Store failures keep the store's own message; it is logged and, when
/// detailed errors are enabled, returned as `details`.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// A required field is missing, empty, or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Another problem already uses this number
    #[error("Problem number already exists.")]
    Conflict(ProblemNo),

    /// No admin credential presented
    #[error("Admin credentials required.")]
    Unauthorized,

    /// Credential presented, but it does not carry the admin role
    #[error("Admin role required.")]
    Forbidden,

    /// The store refused the operation
    #[error("Permission denied. Check document store access rules.")]
    PermissionDenied {
        operation: StoreOperation,
        message: String,
    },

    /// The store could not be reached or is shedding load
    #[error("Document store is temporarily unavailable.")]
    StoreUnavailable {
        operation: StoreOperation,
        message: String,
    },

    /// Any other store failure
    #[error("Failed to {operation}")]
    Store {
        operation: StoreOperation,
        message: String,
    },

    /// Internal error
    #[error("Internal error")]
    Internal(String),
}

impl ProblemError {
    /// Shorthand for the missing-field rejection
    pub fn missing_fields() -> Self {
        ProblemError::InvalidInput("All fields are required.".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProblemError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ProblemError::Conflict(_) => StatusCode::CONFLICT,
            ProblemError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProblemError::Forbidden | ProblemError::PermissionDenied { .. } => {
                StatusCode::FORBIDDEN
            }
            ProblemError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ProblemError::Store { .. } | ProblemError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProblemError::InvalidInput(_) => ErrorKind::BadRequest,
            ProblemError::Conflict(_) => ErrorKind::Conflict,
            ProblemError::Unauthorized => ErrorKind::Unauthorized,
            ProblemError::Forbidden | ProblemError::PermissionDenied { .. } => ErrorKind::Forbidden,
            ProblemError::StoreUnavailable { .. } => ErrorKind::ServiceUnavailable,
            ProblemError::Store { .. } | ProblemError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Underlying cause, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            ProblemError::PermissionDenied { message, .. }
            | ProblemError::StoreUnavailable { message, .. }
            | ProblemError::Store { message, .. }
            | ProblemError::Internal(message) => Some(message),
            _ => None,
        }
    }

    /// Reads collapse every store failure into the generic fetch failure
    ///
    /// Only writes distinguish permission and availability failures; the
    /// store's own message is kept for logs and `details`.
    pub fn into_read_failure(self) -> Self {
        match self {
            ProblemError::PermissionDenied { message, .. }
            | ProblemError::StoreUnavailable { message, .. }
            | ProblemError::Store { message, .. } => ProblemError::Store {
                operation: StoreOperation::Fetch,
                message,
            },
            other => other,
        }
    }

    /// Convert to AppError, optionally carrying the underlying cause
    pub fn into_app_error(self, expose_details: bool) -> AppError {
        let mut err = AppError::new(self.kind(), self.to_string());
        if let Some(details) = self.details().filter(|_| expose_details) {
            err = err.with_details(details.to_string());
        }
        err.with_source(self)
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ProblemError::Store { operation, message } => {
                tracing::error!(%operation, error = %message, "Problem store error");
            }
            ProblemError::StoreUnavailable { operation, message } => {
                tracing::error!(%operation, error = %message, "Problem store unavailable");
            }
            ProblemError::PermissionDenied { operation, message } => {
                tracing::error!(%operation, error = %message, "Problem store denied permission");
            }
            ProblemError::Internal(msg) => {
                tracing::error!(message = %msg, "Problem internal error");
            }
            ProblemError::Conflict(problem_no) => {
                tracing::info!(%problem_no, "Duplicate problem number rejected");
            }
            ProblemError::Forbidden => {
                tracing::warn!("Admin route reached without admin role");
            }
            _ => {
                tracing::debug!(error = %self, "Problem request rejected");
            }
        }
    }
}

impl IntoResponse for ProblemError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error(false).into_response()
    }
}

impl From<platform::client::CredentialError> for ProblemError {
    fn from(err: platform::client::CredentialError) -> Self {
        tracing::debug!(error = %err, "Rejected admin credentials");
        ProblemError::Unauthorized
    }
}
