//! Get Current User Handler
//!
//! `GET /api/auth/me`. The route is wrapped by the auth middleware, which
//! has already verified the bearer token and resolved the subject against
//! the credential store, so the handler only shapes the response. The
//! resolution happens at request time: a deleted user was rejected with 401
//! before this handler ran, and a renamed user is reflected here.

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::types::UserResponse;

/// Get current user handler
///
/// Returns the authenticated user's record with the password hash excluded.
pub async fn get_me(AuthUser(auth): AuthUser) -> Json<UserResponse> {
    Json(auth.user.into())
}
