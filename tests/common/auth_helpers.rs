//! Authentication test helpers
//!
//! Fixtures for building a test server over the in-memory store, creating
//! users, and minting tokens.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_test::TestServer;
use gatekey::backend::auth::password::PasswordHasher;
use gatekey::backend::auth::sessions::TokenService;
use gatekey::backend::auth::users::{User, UserStore};
use gatekey::backend::routes::router::create_router;
use gatekey::backend::server::state::AppState;
use uuid::Uuid;

use crate::common::store::InMemoryUserStore;

/// Signing secret shared by the test state and test-minted tokens
pub const TEST_SECRET: &str = "integration-test-secret";

/// Token lifetime used in tests
pub const TEST_TTL_SECS: u64 = 3600;

/// Minimum bcrypt cost, to keep the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// A token service configured identically to the test state's.
pub fn tokens() -> TokenService {
    TokenService::new(TEST_SECRET, TEST_TTL_SECS)
}

/// Build application state over the given in-memory store.
pub fn test_state(store: Arc<InMemoryUserStore>) -> AppState {
    AppState::new(
        store,
        PasswordHasher::new(TEST_BCRYPT_COST),
        tokens(),
    )
}

/// Spin up a test server plus the store backing it.
pub fn test_server() -> (TestServer, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let app = create_router(
        test_state(store.clone()),
        HeaderValue::from_static("http://localhost:3000"),
    );
    let server = TestServer::new(app).expect("failed to start test server");
    (server, store)
}

/// Create a user directly in the store, bypassing the HTTP surface.
pub async fn create_test_user(store: &InMemoryUserStore, email: &str, password: &str) -> User {
    let password_hash = PasswordHasher::new(TEST_BCRYPT_COST)
        .hash(password)
        .expect("failed to hash test password");
    store
        .create_user(email, &password_hash, None)
        .await
        .expect("failed to create test user")
}

/// An email no other test user has.
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// Authorization header value for a token.
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("invalid header value")
}
