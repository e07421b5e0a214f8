//! API Route Configuration
//!
//! Authentication endpoints:
//!
//! - `POST /api/auth/signup` - public, user registration
//! - `POST /api/auth/signin` - public, credential verification
//! - `GET /api/auth/me` - protected, current user info
//!
//! `/api/auth/me` sits behind the auth middleware; the public routes do not
//! pass through the guard at all.

use axum::{middleware, Router};

use crate::backend::auth::{get_me, signin, signup};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the authentication endpoints to the router.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", axum::routing::get(get_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/signin", axum::routing::post(signin))
        .merge(protected)
}
