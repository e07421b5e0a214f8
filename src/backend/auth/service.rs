//! Auth Service
//!
//! Orchestrates signup and signin against the credential store, the password
//! hasher, and the token service. Handlers stay thin: they deserialize,
//! validate the boundary, and delegate here.

use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::error::AuthError;
use crate::shared::types::AuthResponse;

/// The one message used for every credential failure on signin.
///
/// Unknown email and wrong password are indistinguishable in the response,
/// so the endpoint cannot be used to enumerate registered emails.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Signup/signin orchestration over the credential store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Register a new user and mint a token for immediate use.
    ///
    /// An existing email yields `Conflict`. The store enforces uniqueness
    /// atomically, so a signup that loses a race past the pre-check still
    /// maps to `Conflict` rather than creating a second record.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse, AuthError> {
        if self.store.find_by_email(email).await?.is_some() {
            tracing::warn!("signup for already registered email");
            return Err(AuthError::Conflict("Email already registered".to_string()));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self.store.create_user(email, &password_hash, name).await?;

        let token = self.tokens.sign(user.id, &user.email)?;
        tracing::info!(user_id = user.id, "user registered");

        Ok(AuthResponse {
            access_token: token,
        })
    }

    /// Verify credentials and mint a token.
    ///
    /// No side effects besides token issuance.
    pub async fn signin(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let user = self.store.find_by_email(email).await?.ok_or_else(|| {
            tracing::warn!("signin for unknown email");
            AuthError::Unauthorized(INVALID_CREDENTIALS.to_string())
        })?;

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::warn!(user_id = user.id, "signin with wrong password");
            return Err(AuthError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.sign(user.id, &user.email)?;
        tracing::info!(user_id = user.id, "user signed in");

        Ok(AuthResponse {
            access_token: token,
        })
    }
}
