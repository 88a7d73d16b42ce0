//! Application configuration

use std::env;

use crate::routing::RouterConfig;

/// Deployment environment. Selects which suffix the host router strips when
/// deriving a tenant label: the base domain in production, the loopback
/// alias (with port) in development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "local" => Ok(Environment::Development),
            other => Err(ConfigError::Invalid("ENVIRONMENT", other.to_string())),
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub public_url: String,

    // Host routing
    pub base_domain: String, // e.g., "inkwell.blog" for *.inkwell.blog tenant hosts
    pub dev_host: String,    // loopback alias standing in for the base domain in development
    pub environment: Environment,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            // Host routing. Hostnames are compared case-insensitively, so the
            // configured values are normalized to lowercase once here.
            base_domain: env::var("BASE_DOMAIN")
                .unwrap_or_else(|_| "localhost".to_string())
                .to_lowercase(),
            dev_host: env::var("DEV_HOST")
                .unwrap_or_else(|_| "localhost:3000".to_string())
                .to_lowercase(),
            environment: Environment::parse(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            )?,

            // Database
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        })
    }

    /// Snapshot of the fields the host router consults. Taken once at
    /// startup; the router never reads ambient state.
    pub fn router_config(&self) -> RouterConfig {
        RouterConfig {
            base_domain: self.base_domain.clone(),
            dev_host: self.dev_host.clone(),
            environment: self.environment,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
