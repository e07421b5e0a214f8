//! Server Initialization
//!
//! Builds the running application from a loaded [`ServerConfig`]: connect
//! the store, run migrations, construct the state, and assemble the router.
//! Any failure here aborts startup; the service never runs half-configured.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{PgUserStore, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Create and configure the Axum application.
///
/// 1. Connect the PostgreSQL pool
/// 2. Run pending migrations
/// 3. Build the hasher, token service, and app state from configuration
/// 4. Assemble the router with the configured CORS origin
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_secs);
    let state = AppState::new(store, hasher, tokens);

    let origin = config.frontend_origin()?;
    tracing::info!(origin = %config.frontend_url, "router configured");

    Ok(create_router(state, origin))
}
