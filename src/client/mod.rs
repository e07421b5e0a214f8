//! Client Module
//!
//! Session handling for consumers of the authentication API.
//!
//! # Architecture
//!
//! - **`config`** - server address configuration
//! - **`session`** - durable token storage and display-only claims decoding
//! - **`api`** - HTTP client for signup/signin/me
//!
//! # Trust Model
//!
//! The client decodes token claims WITHOUT verifying the signature, purely
//! to render a display name and detect local expiry. That decode is never an
//! authorization decision; only the server's verification is authoritative.
//! Attaching the token to outgoing requests is best-effort: the server may
//! still reject it, and any 401 tears the session down.

/// Client configuration
pub mod config;

/// Durable session storage and claims decoding
pub mod session;

/// HTTP client for the authentication endpoints
pub mod api;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use config::ClientConfig;
pub use session::{decode_unverified, Session, SessionClaims, TokenFile};
