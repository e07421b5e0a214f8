//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration, read once at startup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Pool setup, migrations, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. `ServerConfig::from_env()` - fails fast on missing secret or store URL
//! 2. `init::create_app()` - connects the pool, runs migrations, builds
//!    state, and assembles the router

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
