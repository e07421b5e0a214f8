//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── signup.rs   - POST /api/auth/signup
//! ├── signin.rs   - POST /api/auth/signin
//! └── me.rs       - GET /api/auth/me
//! ```
//!
//! Request and response bodies live in [`crate::shared::types`], shared with
//! the client.

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Get current user handler
pub mod me;

// Re-export handlers
pub use me::get_me;
pub use signin::signin;
pub use signup::signup;
