//! Connection settings for [`WorkoutClient`](crate::WorkoutClient).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use sea_orm::ConnectOptions;

use crate::error::{Error, Result};

/// Pool and logging settings used when connecting.
///
/// Values can be built in code with the `with_*` setters or read from the
/// environment with [`ClientConfig::from_env`]:
///
/// | Variable                           | Default |
/// |------------------------------------|---------|
/// | `DATABASE_URL`                     | required |
/// | `WORKOUT_DB_MAX_CONNECTIONS`       | 10      |
/// | `WORKOUT_DB_MIN_CONNECTIONS`       | 1       |
/// | `WORKOUT_DB_CONNECT_TIMEOUT_SECS`  | 10      |
/// | `WORKOUT_DB_IDLE_TIMEOUT_SECS`     | 600     |
/// | `WORKOUT_DB_SQLX_LOGGING`          | false   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    database_url: String,
    max_connections: u32,
    min_connections: u32,
    connect_timeout: Duration,
    idle_timeout: Duration,
    sqlx_logging: bool,
}

impl ClientConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(600),
            sqlx_logging: false,
        }
    }

    /// Reads the configuration from the process environment, loading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config("DATABASE_URL must be set".to_owned()))?;

        let mut config = Self::new(database_url);
        if let Some(n) = parse(&lookup, "WORKOUT_DB_MAX_CONNECTIONS")? {
            config.max_connections = n;
        }
        if let Some(n) = parse(&lookup, "WORKOUT_DB_MIN_CONNECTIONS")? {
            config.min_connections = n;
        }
        if let Some(secs) = parse(&lookup, "WORKOUT_DB_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse(&lookup, "WORKOUT_DB_IDLE_TIMEOUT_SECS")? {
            config.idle_timeout = Duration::from_secs(secs);
        }
        if let Some(enabled) = parse(&lookup, "WORKOUT_DB_SQLX_LOGGING")? {
            config.sqlx_logging = enabled;
        }

        if config.min_connections > config.max_connections {
            return Err(Error::Config(format!(
                "WORKOUT_DB_MIN_CONNECTIONS ({}) exceeds WORKOUT_DB_MAX_CONNECTIONS ({})",
                config.min_connections, config.max_connections
            )));
        }
        Ok(config)
    }

    pub fn with_max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    pub fn with_min_connections(mut self, n: u32) -> Self {
        self.min_connections = n;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Enables SeaORM's per-statement logging.
    pub fn with_sqlx_logging(mut self, enabled: bool) -> Self {
        self.sqlx_logging = enabled;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Builds the SeaORM connection options for this configuration.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{key} has an invalid value: {raw:?}"))),
    }
}
