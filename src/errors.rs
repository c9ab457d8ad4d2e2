//! # Error Handling
//!
//! Error surface for resource operations. Internal details (database
//! errors in particular) are logged via `tracing` and never serialized
//! into responses; clients receive a sanitized JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// Error type for resource operations, mapped to HTTP status codes.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - attribute name matches no column on the entity
    UnknownAttribute {
        /// The attribute name that failed to resolve
        attribute: String,
    },

    /// 422 Unprocessable Entity - value cannot be converted to the column type
    InvalidValue {
        /// The attribute being assigned
        attribute: String,
        /// What the column type expected
        expected: String,
    },

    /// 404 Not Found - resource doesn't exist
    NotFound {
        /// Resource type (e.g., "widget")
        resource: String,
        /// Optional ID that wasn't found
        id: Option<String>,
    },

    /// 500 Internal Server Error - database error (details logged, not exposed)
    Database {
        /// User-facing generic message
        message: String,
        /// Internal error (logged, not sent to user)
        internal: DbErr,
    },
}

impl ApiError {
    /// Create a 400 error for an attribute name that matches no column.
    pub fn unknown_attribute(attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create a 422 error for a value that does not fit the column type.
    pub fn invalid_value(attribute: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidValue {
            attribute: attribute.into(),
            expected: expected.into(),
        }
    }

    /// Create a 404 Not Found error.
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a 500 error from a database error.
    ///
    /// The database error details are logged but NOT sent to the user.
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownAttribute { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidValue { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message (sanitized)
    fn user_message(&self) -> String {
        match self {
            Self::UnknownAttribute { attribute } => {
                format!("Unknown attribute '{attribute}'")
            }
            Self::InvalidValue {
                attribute,
                expected,
            } => {
                format!("Invalid value for '{attribute}': expected {expected}")
            }
            Self::NotFound { resource, id } => {
                if let Some(id) = id {
                    format!("{resource} with ID '{id}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::Database { message, .. } => message.clone(),
        }
    }

    /// Log internal error details (not sent to user)
    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error response sent to users (sanitized)
#[derive(Serialize)]
struct ErrorResponse {
    /// Error message
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Convert SeaORM `DbErr` to `ApiError`
///
/// `DbErr::RecordNotFound` becomes 404; every other variant becomes a
/// 500 whose detail is logged internally and sanitized for users.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            _ => Self::Database {
                message: "A database error occurred".to_string(),
                internal: err,
            },
        }
    }
}
