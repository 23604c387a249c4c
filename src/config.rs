// src/config.rs
use crate::application::services::SlugOptions;
use crate::domain::slug::{Slug, value_objects::DEFAULT_MAX_PROBES};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    slug_options: SlugOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://agent_directory.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got `{value}`")))
    })
    .transpose()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections =
            parse_number::<u32>("DATABASE_MAX_CONNECTIONS", lookup("DATABASE_MAX_CONNECTIONS"))?
                .unwrap_or_else(default_max_connections);
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let fallback_prefix = match lookup("SLUG_FALLBACK_PREFIX") {
            Some(prefix) => {
                Slug::new(prefix.clone()).map_err(|_| {
                    ConfigError::Invalid(format!(
                        "SLUG_FALLBACK_PREFIX must be a lowercase slug, got `{prefix}`"
                    ))
                })?;
                prefix
            }
            None => SlugOptions::default().fallback_prefix,
        };

        // 0 disables the ceiling.
        let max_probes = match parse_number::<u64>("SLUG_MAX_PROBES", lookup("SLUG_MAX_PROBES"))? {
            Some(0) => None,
            Some(n) => Some(n),
            None => Some(DEFAULT_MAX_PROBES),
        };

        let conflict_retries =
            parse_number::<u32>("SLUG_CONFLICT_RETRIES", lookup("SLUG_CONFLICT_RETRIES"))?
                .unwrap_or(SlugOptions::default().conflict_retries);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            slug_options: SlugOptions {
                fallback_prefix,
                max_probes,
                conflict_retries,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn slug_options(&self) -> &SlugOptions {
        &self.slug_options
    }
}
