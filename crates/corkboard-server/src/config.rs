// ABOUTME: Configuration loading and validation for the corkboard server.
// ABOUTME: Reads environment variables and enforces the bearer-secret requirement.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CORKBOARD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("CORKBOARD_API_TOKEN is not set; refusing to start without a bearer secret")]
    MissingToken,
}

/// Deployment mode. Controls log verbosity and how much detail the error
/// shield puts in 500 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    Production,
    Development,
}

impl DeployMode {
    /// Only the literal `production` selects production mode; anything else,
    /// including an unset variable, is development.
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => DeployMode::Production,
            _ => DeployMode::Development,
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub mode: DeployMode,
    pub api_token: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - CORKBOARD_BIND: socket address to bind (default: 127.0.0.1:8350)
    /// - CORKBOARD_ENV: deployment mode; "production" or anything else
    /// - CORKBOARD_API_TOKEN: expected bearer secret (required, non-empty)
    ///
    /// The secret is snapshotted here, once, at startup; changing the
    /// environment of a running process has no effect until restart.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str =
            std::env::var("CORKBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:8350".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let mode = DeployMode::parse(std::env::var("CORKBOARD_ENV").ok().as_deref());

        let api_token = std::env::var("CORKBOARD_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            bind,
            mode,
            api_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_production_literal_only() {
        assert_eq!(
            DeployMode::parse(Some("production")),
            DeployMode::Production
        );
        assert_eq!(
            DeployMode::parse(Some("Production")),
            DeployMode::Development
        );
        assert_eq!(DeployMode::parse(Some("staging")), DeployMode::Development);
        assert_eq!(DeployMode::parse(None), DeployMode::Development);
    }

    // All env-var manipulation lives in this one test so parallel test
    // threads never interleave set_var/remove_var calls.
    #[test]
    fn config_from_env_scenarios() {
        // SAFETY: test-only code, the only test in the binary touching these vars
        unsafe {
            std::env::remove_var("CORKBOARD_BIND");
            std::env::remove_var("CORKBOARD_ENV");
            std::env::remove_var("CORKBOARD_API_TOKEN");
        }

        // Missing token refuses to start.
        let err = ServerConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));

        // Empty token counts as missing.
        // SAFETY: as above
        unsafe {
            std::env::set_var("CORKBOARD_API_TOKEN", "");
        }
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::MissingToken)
        ));

        // Defaults with a token present.
        // SAFETY: as above
        unsafe {
            std::env::set_var("CORKBOARD_API_TOKEN", "secret-token");
        }
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.bind, "127.0.0.1:8350".parse::<SocketAddr>().unwrap());
        assert_eq!(config.mode, DeployMode::Development);
        assert_eq!(config.api_token, "secret-token");

        // Explicit production bind and mode.
        // SAFETY: as above
        unsafe {
            std::env::set_var("CORKBOARD_BIND", "0.0.0.0:9000");
            std::env::set_var("CORKBOARD_ENV", "production");
        }
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.mode, DeployMode::Production);

        // Invalid bind address is rejected.
        // SAFETY: as above
        unsafe {
            std::env::set_var("CORKBOARD_BIND", "not-an-address");
        }
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("CORKBOARD_BIND"));

        // SAFETY: as above
        unsafe {
            std::env::remove_var("CORKBOARD_BIND");
            std::env::remove_var("CORKBOARD_ENV");
            std::env::remove_var("CORKBOARD_API_TOKEN");
        }
    }
}
