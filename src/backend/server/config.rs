//! Server Configuration
//!
//! All configuration is read from the environment exactly once, at process
//! start; there is no runtime reconfiguration. Missing or unparseable values
//! fail startup instead of being papered over with defaults. In particular
//! the signing secret has NO fallback value.

use axum::http::HeaderValue;
use thiserror::Error;

use crate::backend::auth::password::DEFAULT_BCRYPT_COST;
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_SECS;

/// Default bind port
const DEFAULT_PORT: u16 = 4000;

/// Default allowed cross-origin caller
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}

/// Process-wide server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string (`DATABASE_URL`, required)
    pub database_url: String,
    /// Token signing secret (`JWT_SECRET`, required)
    pub jwt_secret: String,
    /// Token lifetime in seconds (`JWT_TTL_SECS`, default 86400)
    pub jwt_ttl_secs: u64,
    /// bcrypt work factor (`BCRYPT_COST`, default 10, valid range 4..=31)
    pub bcrypt_cost: u32,
    /// Bind port (`PORT`, default 4000)
    pub port: u16,
    /// Allowed cross-origin caller (`FRONTEND_URL`)
    pub frontend_url: String,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let jwt_ttl_secs = match std::env::var("JWT_TTL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("JWT_TTL_SECS"))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid("BCRYPT_COST"))?,
            Err(_) => DEFAULT_BCRYPT_COST,
        };
        // bcrypt's valid cost range; out-of-range values would only fail
        // later, on the first signup
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid("BCRYPT_COST"));
        }

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
        frontend_url
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::Invalid("FRONTEND_URL"))?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_ttl_secs,
            bcrypt_cost,
            port,
            frontend_url,
        })
    }

    /// The frontend URL as a CORS origin header value.
    pub fn frontend_origin(&self) -> Result<HeaderValue, ConfigError> {
        self.frontend_url
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::Invalid("FRONTEND_URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "DATABASE_URL",
            "JWT_SECRET",
            "JWT_TTL_SECS",
            "BCRYPT_COST",
            "PORT",
            "FRONTEND_URL",
        ] {
            std::env::remove_var(key);
        }
    }

    fn set_required() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/gatekey_test");
        std::env::set_var("JWT_SECRET", "test-secret");
    }

    #[test]
    #[serial]
    fn fails_without_jwt_secret() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/gatekey_test");
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
    }

    #[test]
    #[serial]
    fn fails_without_database_url() {
        clear_env();
        std::env::set_var("JWT_SECRET", "test-secret");
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    #[serial]
    fn applies_defaults() {
        clear_env();
        set_required();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.jwt_ttl_secs, 86_400);
    }

    #[test]
    #[serial]
    fn reads_overrides() {
        clear_env();
        set_required();
        std::env::set_var("PORT", "8080");
        std::env::set_var("JWT_TTL_SECS", "3600");
        std::env::set_var("BCRYPT_COST", "12");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.jwt_ttl_secs, 3600);
        assert_eq!(config.bcrypt_cost, 12);
    }

    #[test]
    #[serial]
    fn rejects_out_of_range_bcrypt_cost() {
        clear_env();
        set_required();
        std::env::set_var("BCRYPT_COST", "99");
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::Invalid("BCRYPT_COST"))
        ));
    }

    #[test]
    #[serial]
    fn rejects_unparseable_port() {
        clear_env();
        set_required();
        std::env::set_var("PORT", "not-a-port");
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::Invalid("PORT"))
        ));
    }
}
