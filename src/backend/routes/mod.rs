//! Route Configuration Module
//!
//! HTTP route assembly for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports
//! ├── router.rs      - Router assembly, CORS, fallback
//! └── api_routes.rs  - Authentication endpoints
//! ```

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
