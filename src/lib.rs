//! Gatekey - Email/Password Authentication Service
//!
//! Gatekey is a small JWT-based authentication service with a native client
//! session library for consuming it.
//!
//! # Overview
//!
//! This library provides:
//! - An Axum HTTP server exposing signup, signin, and current-user endpoints
//! - bcrypt password hashing with a tunable work factor
//! - JWT issuance and verification (HMAC-SHA256, finite expiry)
//! - A bearer-token guard that resolves the authenticated user per request
//! - A client session layer: durable token storage, display-only claims
//!   decoding, and automatic session teardown on 401 responses
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Wire types shared between the server and the client
//!   (request/response bodies, error body shape)
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum HTTP server, routes, and CORS configuration
//!   - Password hashing, token service, credential store
//!   - Authentication middleware and error types
//!
//! - **`client`** - Client session handling
//!   - Durable token storage and restore-on-load semantics
//!   - Non-verifying claims decode for display purposes
//!   - HTTP client attaching bearer tokens to outgoing requests
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend module and the
//!   `gatekey-server` binary. Disable it to build the client layer alone.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use gatekey::backend::server::config::ServerConfig;
//! use gatekey::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use gatekey::client::api::ApiClient;
//! use gatekey::client::config::ClientConfig;
//! use gatekey::client::session::{Session, TokenFile};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env();
//! let mut session = Session::restore(TokenFile::from_data_dir()?);
//! let client = ApiClient::new(config)?;
//! client.signin(&mut session, "user@example.com", "password123")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never leave the
//!   credential store boundary
//! - Tokens are verified server-side only; the client decode path is
//!   display-only and never an authorization input
//! - The signing secret is mandatory configuration; startup fails without it

/// Wire types shared between server and client
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;

/// Client session handling
pub mod client;
