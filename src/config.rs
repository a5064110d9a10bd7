//! Server configuration.

use crate::games::mastermind::InvalidGuessPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding [`ServerConfig::public_url`].
pub const PUBLIC_URL_ENV: &str = "PUBLIC_URL";
/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding [`ServerConfig::seed`].
pub const SEED_ENV: &str = "MASTERMIND_SEED";

/// Configuration for the frame server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Public base URL used in frame links (e.g. "https://mastermind.example").
    #[serde(default = "default_public_url")]
    public_url: String,

    /// Path of the gameplay endpoint.
    #[serde(default = "default_route")]
    route: String,

    /// Path of the state image endpoint.
    #[serde(default = "default_image_path")]
    image_path: String,

    /// Handling of guesses that do not parse.
    #[serde(default)]
    invalid_guess: InvalidGuessPolicy,

    /// Fixed RNG seed. Entropy-seeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[instrument]
fn default_port() -> u16 {
    3000
}

#[instrument]
fn default_public_url() -> String {
    "http://localhost:3000".to_string()
}

#[instrument]
fn default_route() -> String {
    "/api/gameplay_easy".to_string()
}

#[instrument]
fn default_image_path() -> String {
    "/api/background-image".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: default_public_url(),
            route: default_route(),
            image_path: default_image_path(),
            invalid_guess: InvalidGuessPolicy::default(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(route = %config.route, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    /// Applies `PUBLIC_URL`, `PORT` and `MASTERMIND_SEED` from the environment.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(PUBLIC_URL_ENV) {
            self.public_url = url;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid {}: {}", PORT_ENV, e)))?;
        }
        if let Some(seed) = lookup(SEED_ENV) {
            let seed = seed
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid {}: {}", SEED_ENV, e)))?;
            self.seed = Some(seed);
        }
        self.validate()
    }

    /// Overrides the bind address.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        for (name, path) in [("route", &self.route), ("image_path", &self.image_path)] {
            if !path.starts_with('/') {
                return Err(ConfigError::new(format!(
                    "{} must start with '/', got {:?}",
                    name, path
                )));
            }
        }
        if self.public_url.is_empty() {
            return Err(ConfigError::new("public_url must not be empty".to_string()));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(ServerConfig::from_toml("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default()
            .with_overrides(|key| match key {
                "PUBLIC_URL" => Some("https://frames.example".to_string()),
                "PORT" => Some("8080".to_string()),
                "MASTERMIND_SEED" => Some("99".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.public_url(), "https://frames.example");
        assert_eq!(*config.port(), 8080);
        assert_eq!(*config.seed(), Some(99));
    }

    #[test]
    fn test_bad_port_override() {
        let result = ServerConfig::default().with_overrides(|key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_route_must_be_absolute() {
        let result = ServerConfig::from_toml(r#"route = "api/play""#);
        assert!(result.unwrap_err().message.contains("route"));
    }
}
