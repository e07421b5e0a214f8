//! Wire Types
//!
//! Request and response bodies for the authentication endpoints, used by the
//! server handlers and by the client. Field names follow the JSON wire format
//! (camelCase), so the client and server cannot drift apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, never persisted as-is)
    pub password: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Sign in request
///
/// Body of `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Auth response
///
/// Returned by signup and signin on success. Carries only the bearer token;
/// user details are fetched separately via `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
}

/// User response (without sensitive data)
///
/// Returned by `GET /api/auth/me`. The password hash is excluded by
/// construction; this type has no field for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned numeric id
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Error body
///
/// The JSON shape of every error response. `message` is human-readable and
/// surfaced directly in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}
