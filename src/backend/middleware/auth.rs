//! Authentication Middleware
//!
//! The guard in front of protected routes. It extracts the bearer token,
//! verifies it, and resolves the subject to a live user record; only then
//! does the request reach a handler. The resolved record is attached to the
//! request extensions as [`AuthenticatedUser`], the single source of
//! authenticated identity. Handlers read it through the [`AuthUser`]
//! extractor and never reconstruct identity from headers themselves.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::User;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Authenticated request context.
///
/// Produced only by a successful guard evaluation; holds the user record
/// resolved from the credential store at request time.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Authentication middleware
///
/// 1. Extract the bearer token from the `Authorization` header
/// 2. Verify signature and expiry via the token service
/// 3. Resolve the subject claim to a live user record
/// 4. Attach the record to the request extensions
///
/// Rejects with 401 at each step: missing or malformed header, invalid or
/// expired token, or a subject that no longer exists in the store.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            AuthError::Unauthorized("Missing bearer token".to_string())
        })?;

    // Header format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        AuthError::Unauthorized("Malformed Authorization header".to_string())
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("token rejected: {e}");
        AuthError::Unauthorized("Invalid token".to_string())
    })?;

    // Resolve against the store at request time so deleted users are
    // rejected even while their token is still within its lifetime
    let user = state
        .store
        .find_by_id(claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = claims.sub, "token subject no longer exists");
            AuthError::Unauthorized("Invalid token: user not found".to_string())
        })?;

    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user.
///
/// Usable as a handler parameter on any route behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                AuthError::Unauthorized("Missing bearer token".to_string())
            })
    }
}
