//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! session tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - User model and the credential store interface
//! - **`service`** - Signup/signin orchestration
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → user created → JWT returned
//! 2. **Signin**: email + password → credentials verified → JWT returned
//! 3. **Me**: bearer token → token verified, user resolved → user info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Invalid credentials return 401 with an identical message for unknown
//!   emails and wrong passwords (no enumeration)
//! - Tokens carry a finite expiry and are verified with zero leeway

/// Password hashing and verification
pub mod password;

/// JWT issuance and verification
pub mod sessions;

/// User model and credential store
pub mod users;

/// Signup/signin orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, signin, signup};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use sessions::{Claims, TokenService};
pub use users::{StoreError, User, UserStore};
