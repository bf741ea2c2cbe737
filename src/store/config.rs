//! Store Configuration
//!
//! Connection settings for the profile database, loaded once at startup from
//! environment variables and passed explicitly to the store. No process-wide
//! mutable state.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the profile database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub port: String,
}

impl StoreConfig {
    /// Load the four connection settings from the environment.
    ///
    /// A missing variable fails startup with a named error instead of
    /// producing a garbage connection string.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: read_var("DB_HOST")?,
            username: read_var("DB_USERNAME")?,
            password: read_var("DB_PASSWORD")?,
            port: read_var("DB_PORT")?,
        })
    }

    /// The MongoDB connection string for these settings.
    pub fn connection_uri(&self) -> String {
        format!(
            "mongodb://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port
        )
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
