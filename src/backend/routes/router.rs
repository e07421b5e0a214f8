//! Router Configuration
//!
//! Assembles the application router: API routes, the CORS layer for the
//! configured frontend origin, and a 404 fallback.

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::IntoResponse,
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::types::ErrorBody;

/// Create the Axum router with all routes configured.
///
/// Cross-origin calls are allowed only from `frontend_origin`, with the
/// headers and methods the client actually uses.
pub fn create_router(app_state: AppState, frontend_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    let router = Router::new();
    let router = configure_api_routes(router, &app_state);

    router
        .fallback(fallback_404)
        .layer(cors)
        .with_state(app_state)
}

async fn fallback_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            status_code: StatusCode::NOT_FOUND.as_u16(),
            message: "Not Found".to_string(),
        }),
    )
}
