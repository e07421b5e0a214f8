//! Backend Error Module
//!
//! The error taxonomy of the authentication service and its conversion to
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Conflict` - duplicate email on signup (409)
//! - `Unauthorized` - bad credentials, missing/invalid/expired token, or a
//!   token whose subject no longer exists (401)
//! - `Validation` - malformed request body caught at the boundary (400)
//! - `Store`/`Hash`/`Token` - internal failures (500, generic message)
//!
//! None of these are retried server-side; all surface directly as
//! `{statusCode, message}` JSON.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
