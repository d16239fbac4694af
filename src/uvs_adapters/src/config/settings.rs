use std::time::Duration;

use config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;
use uvs_application::HomeserverMode;
use uvs_core::{DomainError, HomeserverUrl};

use super::constants::{DEFAULT_REQUEST_TIMEOUT, defaults, env};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("{} is required unless {} is enabled", env::HOMESERVER_URL_ENV_VAR, env::OPENID_VERIFY_ANY_HOMESERVER_ENV_VAR)]
    MissingHomeserverUrl,
    #[error(transparent)]
    InvalidHomeserverUrl(#[from] DomainError),
}

/// Process configuration, read once at startup from `UVS_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Homeserver queried in single-homeserver mode.
    pub homeserver_url: Option<String>,
    /// Resolve the homeserver per request from `matrix_server_name`.
    pub openid_verify_any_homeserver: bool,
    /// Shared secret callers must present as a bearer token.
    pub auth_token: Option<Secret<String>>,
    /// Admin token for the Synapse room members API.
    pub access_token: Option<Secret<String>>,
    pub disable_ip_blacklist: bool,
    pub listen_address: String,
    pub port: u16,
    pub log_level: String,
    pub request_timeout_ms: u64,
}

impl Settings {
    /// Load settings from the process environment, honouring a `.env` file.
    pub fn load() -> Result<Self, SettingsError> {
        // A missing .env file is fine, the real environment still applies.
        let _ = dotenvy::dotenv();
        Self::from_environment(Environment::with_prefix(env::ENV_PREFIX))
    }

    pub fn from_environment(environment: Environment) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("openid_verify_any_homeserver", false)?
            .set_default("disable_ip_blacklist", false)?
            .set_default("listen_address", defaults::LISTEN_ADDRESS)?
            .set_default("port", i64::from(defaults::PORT))?
            .set_default("log_level", defaults::LOG_LEVEL)?
            .set_default("request_timeout_ms", defaults::REQUEST_TIMEOUT_MS as i64)?
            // Values stay strings; serde parses the typed fields so secrets
            // are never rewritten.
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate the homeserver settings into the resolver's operating mode.
    pub fn homeserver_mode(&self) -> Result<HomeserverMode, SettingsError> {
        if self.openid_verify_any_homeserver {
            return Ok(HomeserverMode::Multi);
        }

        let url = self
            .homeserver_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingHomeserverUrl)?;

        Ok(HomeserverMode::Single(HomeserverUrl::parse(url)?))
    }

    pub fn caller_secret(&self) -> Option<Secret<String>> {
        self.auth_token
            .clone()
            .filter(|secret| !secret.expose_secret().is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout_ms {
            0 => DEFAULT_REQUEST_TIMEOUT,
            ms => Duration::from_millis(ms),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_address, self.port)
    }
}
