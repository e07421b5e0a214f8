//! Shared Module
//!
//! Types shared between the server and the client. Everything here is plain
//! data with serde derives; there is no behavior beyond serialization.
//!
//! # Module Structure
//!
//! ```text
//! shared/
//! ├── mod.rs    - Module exports
//! └── types.rs  - Request, response, and error body types
//! ```

/// Request and response wire types
pub mod types;

// Re-export commonly used types
pub use types::{AuthResponse, ErrorBody, SigninRequest, SignupRequest, UserResponse};
