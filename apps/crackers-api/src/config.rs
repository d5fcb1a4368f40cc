//! Configuration for the Crackers Shop API

use axum::http::HeaderValue;
use axum_helpers::{create_cors_layer, create_permissive_cors_layer};
use core_config::{FromEnv, env_optional, server::ServerConfig};
use docstore::StoreConfig;
use tower_http::cors::CorsLayer;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub environment: Environment,
    pub cors_allowed_origins: Option<Vec<HeaderValue>>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let store = StoreConfig::from_env()?;
        let cors_allowed_origins = parse_cors_origins(env_optional("CORS_ALLOWED_ORIGIN"))?;

        Ok(Self {
            server,
            store,
            environment,
            cors_allowed_origins,
        })
    }

    /// CORS layer for this deployment: an allow-list when
    /// `CORS_ALLOWED_ORIGIN` is set, permissive otherwise.
    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_allowed_origins {
            Some(origins) => create_cors_layer(origins),
            None => create_permissive_cors_layer(),
        }
    }
}

/// Parse a comma-separated origin list into header values. An unset or
/// all-blank variable means no allow-list.
fn parse_cors_origins(raw: Option<String>) -> eyre::Result<Option<Vec<HeaderValue>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| eyre::eyre!("invalid CORS origin '{origin}': {e}"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(if origins.is_empty() {
        None
    } else {
        Some(origins)
    })
}
