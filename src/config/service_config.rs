use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use ::config::{Config, ConfigBuilder, Environment, builder::DefaultState};
use anyhow::{Context, bail};
use serde::Deserialize;

use crate::config::properties::read_sql_url;

/// Body returned for a profile write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostResponse {
    /// An empty JSON array.
    Json,
    /// Plain text listing of the last visits.
    #[serde(alias = "visit_log", alias = "text")]
    VisitLog,
}

/// Knobs that differ between deployments of the same handlers.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Request parameter carrying the profile key, `userId` or `username`.
    pub key_param: String,
    pub post_response: PostResponse,
    pub log_visits_on_get: bool,
    pub docstore_timeout: Duration,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            key_param: "userId".to_string(),
            post_response: PostResponse::Json,
            log_visits_on_get: false,
            docstore_timeout: Duration::from_millis(5000),
        }
    }
}

/// Settings read from the environment, one field per variable
/// (`SQL_URL` → `sql_url`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub port: u16,
    /// `None` leaves the visit log uninitialized; requests needing it fail.
    pub sql_url: Option<String>,
    /// Properties file consulted for `sqlUrl` when `SQL_URL` is unset.
    pub sql_properties: String,
    pub sql_max_connections: u32,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub profile_key_param: String,
    pub post_response: PostResponse,
    pub log_visits_on_get: bool,
    pub docstore_timeout_ms: u64,
}

impl ServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(None)
    }

    /// Load from `env`, or from the process environment when `None`.
    pub fn load(env: Option<HashMap<String, String>>) -> anyhow::Result<Self> {
        let mut config: Self = defaults()?
            .add_source(Environment::default().source(env))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.sql_url = config.sql_url.filter(|url| !url.trim().is_empty());
        if config.sql_url.is_none() {
            config.sql_url = read_sql_url(Path::new(&config.sql_properties));
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.sql_max_connections < 1 {
            bail!("SQL_MAX_CONNECTIONS must be at least 1");
        }
        if self.profile_key_param.is_empty() {
            bail!("PROFILE_KEY_PARAM must not be empty");
        }
        Ok(())
    }

    pub fn handler(&self) -> HandlerConfig {
        HandlerConfig {
            key_param: self.profile_key_param.clone(),
            post_response: self.post_response,
            log_visits_on_get: self.log_visits_on_get,
            docstore_timeout: Duration::from_millis(self.docstore_timeout_ms),
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ::config::ConfigError> {
    Config::builder()
        .set_default("bind_addr", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("sql_properties", "config.properties")?
        .set_default("sql_max_connections", 5)?
        .set_default("mongodb_uri", "mongodb://localhost:27017")?
        .set_default("mongodb_database", "visitlog")?
        .set_default("profile_key_param", "userId")?
        .set_default("post_response", "json")?
        .set_default("log_visits_on_get", false)?
        .set_default("docstore_timeout_ms", 5000)
}
