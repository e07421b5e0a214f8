//! Signup Handler
//!
//! `POST /api/auth/signup`: validate the body at the boundary, then delegate
//! to the auth service.
//!
//! # Errors
//!
//! * `400 Bad Request` - email without '@', or password shorter than 8 chars
//! * `409 Conflict` - email already registered
//! * `500 Internal Server Error` - hashing, store, or token failure

use axum::{extract::State, response::Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::shared::types::{AuthResponse, SignupRequest};

/// Sign up handler
///
/// On success the new user is persisted and a token bound to them is
/// returned, so the client is authenticated immediately.
pub async fn signup(
    State(auth): State<AuthService>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    tracing::info!(email = %request.email, "signup request");

    validate_credentials(&request.email, &request.password)?;

    let response = auth
        .signup(&request.email, &request.password, request.name.as_deref())
        .await?;

    Ok(Json(response))
}

/// Boundary validation for registration input.
///
/// Deliberately shallow: '@' presence and a minimum password length. Real
/// address verification belongs to a confirmation flow, not this endpoint.
fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if !email.contains('@') {
        return Err(AuthError::Validation("Invalid email format".to_string()));
    }
    if password.len() < 8 {
        return Err(AuthError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}
