use core_config::{ConfigError, FromEnv, env_optional};

/// Document store connection configuration.
///
/// Both `url` and `database` are optional: when either is absent the adapter
/// starts in degraded mode instead of failing, and the diagnostics endpoint
/// reports the configured-vs-connected state.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// MongoDB connection string
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: Option<String>,

    /// Database name to use
    pub database: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl StoreConfig {
    /// Create a StoreConfig with a URL and database name, default pool settings.
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            database: Some(database.into()),
            ..Self::unconfigured()
        }
    }

    /// A config with no connection target; the adapter will run degraded.
    pub fn unconfigured() -> Self {
        Self {
            url: None,
            database: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Whether both the URL and database name are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.database.is_some()
    }
}

fn env_parse_or_default<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(raw) => raw.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{e}"),
        }),
        None => Ok(default),
    }
}

/// Load StoreConfig from environment variables.
///
/// - `DATABASE_URL` (optional) - MongoDB connection string
/// - `DATABASE_NAME` (optional) - database name
/// - `STORE_MAX_POOL_SIZE` (optional, default: 100)
/// - `STORE_MIN_POOL_SIZE` (optional, default: 5)
/// - `STORE_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `STORE_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
impl FromEnv for StoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_optional("DATABASE_URL"),
            database: env_optional("DATABASE_NAME"),
            max_pool_size: env_parse_or_default("STORE_MAX_POOL_SIZE", 100)?,
            min_pool_size: env_parse_or_default("STORE_MIN_POOL_SIZE", 5)?,
            connect_timeout_secs: env_parse_or_default("STORE_CONNECT_TIMEOUT_SECS", 10)?,
            server_selection_timeout_secs: env_parse_or_default(
                "STORE_SERVER_SELECTION_TIMEOUT_SECS",
                30,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_new() {
        let config = StoreConfig::new("mongodb://localhost:27017", "crackers");
        assert_eq!(config.url.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(config.database.as_deref(), Some("crackers"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_store_config_unconfigured() {
        let config = StoreConfig::unconfigured();
        assert!(!config.is_configured());
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_store_config_from_env() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("mongodb://localhost:27017")),
                ("DATABASE_NAME", Some("crackers")),
            ],
            || {
                let config = StoreConfig::from_env().unwrap();
                assert!(config.is_configured());
                assert_eq!(config.database.as_deref(), Some("crackers"));
            },
        );
    }

    #[test]
    fn test_store_config_from_env_unset_means_degraded() {
        temp_env::with_vars(
            [("DATABASE_URL", None::<&str>), ("DATABASE_NAME", None)],
            || {
                let config = StoreConfig::from_env().unwrap();
                assert!(!config.is_configured());
            },
        );
    }

    #[test]
    fn test_store_config_from_env_pool_override() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("DATABASE_NAME", None),
                ("STORE_MAX_POOL_SIZE", Some("20")),
            ],
            || {
                let config = StoreConfig::from_env().unwrap();
                assert_eq!(config.max_pool_size, 20);
            },
        );
    }

    #[test]
    fn test_store_config_from_env_invalid_pool_size() {
        temp_env::with_var("STORE_MAX_POOL_SIZE", Some("lots"), || {
            let result = StoreConfig::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("STORE_MAX_POOL_SIZE"));
        });
    }
}
