//! Configuration for Products API

use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse_or,
    server::{CorsConfig, ServerConfig},
};
use database::mongodb::MongoConfig;
use database::postgres::PostgresConfig;
use std::time::Duration;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where products are persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    #[default]
    Mongodb,
    Postgres,
    Memory,
}

impl FromEnv for StoreBackend {
    /// - PRODUCT_STORE: mongodb | postgres | memory, defaults to mongodb
    fn from_env() -> Result<Self, ConfigError> {
        env_parse_or("PRODUCT_STORE", "mongodb")
    }
}

/// Call timing sink settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfilingConfig {
    pub enabled: bool,
    pub collection: String,
    pub write_timeout: Duration,
}

impl FromEnv for ProfilingConfig {
    /// - PROFILING_ENABLED: defaults to true
    /// - PROFILING_COLLECTION: defaults to profiling
    /// - PROFILING_WRITE_TIMEOUT_MS: defaults to 10000
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: env_parse_or("PROFILING_ENABLED", "true")?,
            collection: env_or_default("PROFILING_COLLECTION", "profiling"),
            write_timeout: Duration::from_millis(env_parse_or(
                "PROFILING_WRITE_TIMEOUT_MS",
                "10000",
            )?),
        })
    }
}

/// Application configuration
///
/// Store settings are only read for the backends that will actually be
/// connected: MongoDB for the `mongodb` store or enabled profiling,
/// PostgreSQL for the `postgres` store.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub store: StoreBackend,
    pub mongodb: Option<MongoConfig>,
    pub postgres: Option<PostgresConfig>,
    pub run_migrations: bool,
    pub profiling: ProfilingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let store = StoreBackend::from_env()?;
        let profiling = ProfilingConfig::from_env()?;

        let mongodb = if store == StoreBackend::Mongodb || profiling.enabled {
            Some(MongoConfig::from_env()?.with_app_name(app_info!().name))
        } else {
            None
        };

        let postgres = match store {
            StoreBackend::Postgres => Some(PostgresConfig::from_env()?),
            _ => None,
        };

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            cors,
            store,
            mongodb,
            postgres,
            run_migrations: env_parse_or("DB_RUN_MIGRATIONS", "true")?,
            profiling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: [(&str, Option<&str>); 9] = [
        ("PRODUCT_STORE", None),
        ("PROFILING_ENABLED", None),
        ("PROFILING_COLLECTION", None),
        ("PROFILING_WRITE_TIMEOUT_MS", None),
        ("MONGODB_URL", None),
        ("MONGO_URL", None),
        ("MONGODB_DATABASE", None),
        ("MONGO_DATABASE", None),
        ("DATABASE_URL", None),
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], test: F) {
        let mut all: Vec<(&str, Option<&str>)> = UNSET.to_vec();
        all.retain(|(key, _)| !vars.iter().any(|(k, _)| k == key));
        all.extend_from_slice(vars);
        temp_env::with_vars(all, test);
    }

    #[test]
    fn test_store_backend_parses_case_insensitively() {
        assert_eq!("mongodb".parse::<StoreBackend>().unwrap(), StoreBackend::Mongodb);
        assert_eq!("Postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert_eq!("MEMORY".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
        assert_eq!(StoreBackend::Postgres.to_string(), "postgres");
    }

    #[test]
    fn test_unknown_store_is_parse_error() {
        with_env(&[("PRODUCT_STORE", Some("cassandra"))], || {
            let err = StoreBackend::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "PRODUCT_STORE"));
        });
    }

    #[test]
    fn test_profiling_defaults() {
        with_env(&[], || {
            let profiling = ProfilingConfig::from_env().unwrap();
            assert!(profiling.enabled);
            assert_eq!(profiling.collection, "profiling");
            assert_eq!(profiling.write_timeout, Duration::from_secs(10));
        });
    }

    #[test]
    fn test_mongodb_store_requires_mongo_settings() {
        with_env(&[], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGODB_URL"));
        });
    }

    #[test]
    fn test_mongodb_store_config() {
        with_env(
            &[
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::Mongodb);
                let mongo = config.mongodb.unwrap();
                assert_eq!(mongo.database(), "catalog");
                assert_eq!(mongo.app_name.as_deref(), Some("products_api"));
                assert!(config.postgres.is_none());
            },
        );
    }

    #[test]
    fn test_postgres_store_without_profiling_skips_mongo() {
        with_env(
            &[
                ("PRODUCT_STORE", Some("postgres")),
                ("PROFILING_ENABLED", Some("false")),
                ("DATABASE_URL", Some("postgres://localhost/products")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::Postgres);
                assert!(config.mongodb.is_none());
                assert_eq!(config.postgres.unwrap().url(), "postgres://localhost/products");
                assert!(config.run_migrations);
            },
        );
    }

    #[test]
    fn test_memory_store_needs_no_database() {
        with_env(
            &[
                ("PRODUCT_STORE", Some("memory")),
                ("PROFILING_ENABLED", Some("false")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::Memory);
                assert!(config.mongodb.is_none());
                assert!(config.postgres.is_none());
            },
        );
    }

    #[test]
    fn test_postgres_store_requires_database_url() {
        with_env(
            &[
                ("PRODUCT_STORE", Some("postgres")),
                ("PROFILING_ENABLED", Some("false")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("DATABASE_URL"));
            },
        );
    }
}
