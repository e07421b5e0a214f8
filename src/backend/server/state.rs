//! Application State Management
//!
//! `AppState` is the central state container, built once at startup and
//! cloned per request. Every field is immutable after construction; the
//! credential store provides its own concurrency guarantees, so requests
//! share nothing mutable.
//!
//! The `FromRef` implementations let handlers extract just the part of the
//! state they need, following Axum's recommended state pattern.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential store collaborator
    pub store: Arc<dyn UserStore>,
    /// Signup/signin orchestration
    pub auth: AuthService,
    /// Token issuance and verification
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        let auth = AuthService::new(store.clone(), hasher, tokens.clone());
        Self {
            store,
            auth,
            tokens,
        }
    }
}

/// Lets handlers take `State<AuthService>` directly.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Lets handlers take `State<TokenService>` directly.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Lets handlers take `State<Arc<dyn UserStore>>` directly.
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
