//! Backend Error Types
//!
//! Every handler returns `Result<_, AuthError>`; the variants carry the
//! HTTP mapping. Internal variants never leak their detail to the client.

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::users::StoreError;

/// Authentication service errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Duplicate email on signup
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials, or a missing/invalid/expired token
    #[error("{0}")]
    Unauthorized(String),

    /// Malformed request body caught at the boundary
    #[error("{0}")]
    Validation(String),

    /// Credential store failure
    #[error("credential store error: {0}")]
    Store(StoreError),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            // The store's uniqueness guarantee is the last word on duplicate
            // signups; a lost race surfaces as the same conflict as the
            // pre-check
            StoreError::DuplicateEmail => Self::Conflict("Email already registered".to_string()),
            other => Self::Store(other),
        }
    }
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message surfaced to the client.
    ///
    /// Internal variants collapse to a generic message; their detail goes to
    /// the log only.
    pub fn public_message(&self) -> String {
        match self {
            Self::Conflict(message) | Self::Unauthorized(message) | Self::Validation(message) => {
                message.clone()
            }
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => "Internal server error".to_string(),
        }
    }
}
