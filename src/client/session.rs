//! Client Session
//!
//! The token held by the client, its durable storage, and the display-only
//! view of its claims.
//!
//! # Restore Semantics
//!
//! On load the stored token is optimistically decoded (no signature check)
//! to recover a display name and detect local expiry. A token that fails to
//! decode or is already expired is cleared and the session starts
//! unauthenticated. None of this grants access; the server re-verifies the
//! token on every request.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims as decoded client-side, for display purposes only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id
    pub sub: i64,
    /// Email at issuance time
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl SessionClaims {
    /// Whether the token is expired by the local clock.
    ///
    /// A hint for the UI, not an authorization check; clock skew means the
    /// server can still disagree.
    pub fn is_expired(&self) -> bool {
        self.exp <= unix_now()
    }
}

/// Decode a token's claims WITHOUT verifying the signature.
///
/// Pure and side-effect-free. The result is good for rendering a display
/// name and nothing more: this function must never feed an authorization
/// decision, which is why it lives here and not next to the server's
/// verification path.
pub fn decode_unverified(token: &str) -> Option<SessionClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims = HashSet::new();

    // The key is unused once signature validation is disabled
    let key = DecodingKey::from_secret(&[]);

    jsonwebtoken::decode::<SessionClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

/// Durable token storage: one token in one file, scoped to the local user.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Storage under the platform data directory (`<data_dir>/gatekey/token`).
    pub fn from_data_dir() -> io::Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no platform data directory")
        })?;
        Ok(Self {
            path: base.join("gatekey").join("token"),
        })
    }

    /// Storage at an explicit path.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Client session state: the stored token plus its decoded claims.
#[derive(Debug)]
pub struct Session {
    storage: TokenFile,
    token: Option<String>,
    claims: Option<SessionClaims>,
}

impl Session {
    /// Restore a session from durable storage.
    ///
    /// An undecodable or locally expired token is cleared from storage and
    /// the session starts unauthenticated.
    pub fn restore(storage: TokenFile) -> Self {
        let mut session = Self {
            storage,
            token: None,
            claims: None,
        };

        let Some(token) = session.storage.load() else {
            return session;
        };

        match decode_unverified(&token) {
            Some(claims) if !claims.is_expired() => {
                session.token = Some(token);
                session.claims = Some(claims);
            }
            _ => {
                tracing::info!("stored token undecodable or expired, clearing");
                let _ = session.storage.clear();
            }
        }

        session
    }

    /// Store a freshly issued token and decode its claims.
    ///
    /// A token that fails to decode is not stored; the session stays
    /// unauthenticated.
    pub fn login(&mut self, token: String) -> io::Result<()> {
        match decode_unverified(&token) {
            Some(claims) => {
                self.storage.save(&token)?;
                self.token = Some(token);
                self.claims = Some(claims);
                Ok(())
            }
            None => {
                tracing::warn!("received undecodable token, discarding");
                self.token = None;
                self.claims = None;
                self.storage.clear()
            }
        }
    }

    /// Clear the session and its durable storage.
    pub fn logout(&mut self) -> io::Result<()> {
        self.token = None;
        self.claims = None;
        self.storage.clear()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn claims(&self) -> Option<&SessionClaims> {
        self.claims.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name to render for the signed-in user (the email from the claims).
    pub fn display_name(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.email.as_str())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
