//! API Client
//!
//! HTTP client functions for the authentication endpoints. Calls are
//! synchronous from the caller's point of view; the client owns a tokio
//! runtime and blocks on it internally.
//!
//! If a token is present in the session it is attached to outgoing requests
//! as `Authorization: Bearer <token>`. That attach is best-effort, not a
//! claim of validity. Any 401 response clears the session; the caller is expected to
//! return the user to sign-in.

use reqwest::StatusCode;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::client::config::ClientConfig;
use crate::client::session::Session;
use crate::shared::types::{AuthResponse, ErrorBody, SigninRequest, SignupRequest, UserResponse};

/// Client-side API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, runtime setup)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered 401; the local session has been cleared
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other non-success response, with the server's message when the
    /// error body parsed
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("failed to parse server response: {0}")]
    Decode(String),

    /// Durable session storage could not be updated
    #[error("failed to update session storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// HTTP client for the authentication API.
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    runtime: Runtime,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let runtime =
            Runtime::new().map_err(|e| ApiError::Network(format!("failed to create runtime: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            runtime,
        })
    }

    /// Register a new account; on success the returned token is stored in
    /// the session.
    pub fn signup(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<(), ApiError> {
        let request = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(str::to_string),
        };

        let builder = self
            .http
            .post(self.config.api_url("/api/auth/signup"))
            .json(&request);
        let body = self.execute(session, builder)?;

        let auth: AuthResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        session.login(auth.access_token)?;
        Ok(())
    }

    /// Verify credentials; on success the returned token is stored in the
    /// session.
    pub fn signin(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let request = SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let builder = self
            .http
            .post(self.config.api_url("/api/auth/signin"))
            .json(&request);
        let body = self.execute(session, builder)?;

        let auth: AuthResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        session.login(auth.access_token)?;
        Ok(())
    }

    /// Fetch the current user record for the session's token.
    pub fn me(&self, session: &mut Session) -> Result<UserResponse, ApiError> {
        let builder = self.http.get(self.config.api_url("/api/auth/me"));
        let body = self.execute(session, builder)?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request with the session token attached, mapping error
    /// responses and tearing the session down on 401.
    fn execute(
        &self,
        session: &mut Session,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        if let Some(token) = session.token() {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let (status, body) = self
            .runtime
            .block_on(async {
                let response = builder.send().await?;
                let status = response.status();
                let body = response.bytes().await?;
                Ok::<_, reqwest::Error>((status, body))
            })
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("server returned 401, clearing session");
            session.logout()?;
            return Err(ApiError::Unauthorized {
                message: error_message(status.as_u16(), &body),
            });
        }

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        Ok(body.to_vec())
    }
}

/// The server's error message when the body parses, a generic fallback
/// otherwise.
fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_body() {
        let body = br#"{"statusCode":401,"message":"Invalid credentials"}"#;
        assert_eq!(error_message(401, body), "Invalid credentials");
    }

    #[test]
    fn error_message_falls_back_on_unparseable_body() {
        assert_eq!(
            error_message(502, b"<html>bad gateway</html>"),
            "request failed with status 502"
        );
        assert_eq!(error_message(500, b""), "request failed with status 500");
    }
}
