//! Backend Module
//!
//! Server-side code for the Gatekey authentication service. This module is
//! only compiled when the `server` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, token service, credential store, handlers
//! - **`middleware`** - Bearer-token guard for protected routes
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication core
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Model
//!
//! Each request is handled independently and statelessly. The only shared
//! state is the credential store (a connection pool), which provides its own
//! atomicity guarantees; everything else in `AppState` is immutable after
//! startup.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication core: hashing, tokens, users, handlers
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::AuthError;
pub use server::state::AppState;
