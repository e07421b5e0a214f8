//! Signin Handler
//!
//! `POST /api/auth/signin`: delegate credential verification to the auth
//! service.
//!
//! # Security Notes
//!
//! - Unknown email and wrong password return the same 401 body, preventing
//!   user enumeration
//! - Password verification is constant-time (via bcrypt)
//! - Passwords are never logged or echoed in responses

use axum::{extract::State, response::Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::shared::types::{AuthResponse, SigninRequest};

/// Sign in handler
///
/// # Errors
///
/// * `401 Unauthorized` - user not found or password mismatch, same message
///   for both
/// * `500 Internal Server Error` - store or token failure
pub async fn signin(
    State(auth): State<AuthService>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    tracing::info!(email = %request.email, "signin request");

    let response = auth.signin(&request.email, &request.password).await?;

    Ok(Json(response))
}
