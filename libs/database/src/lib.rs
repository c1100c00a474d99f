//! Connectors and health probes for the stores behind the product service.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM, plus a migrations runner
//! - `mongodb` - MongoDB support
//! - `config` - `core_config::FromEnv` implementations for the connector configs
//! - `all` - All of the above
//!
//! # Examples
//!
//! ## PostgreSQL
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(&PostgresConfig::new(url), None).await?;
//! postgres::run_migrations::<Migrator>(&db).await?;
//! ```
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let client = mongodb::connect_from_config(&MongoConfig::with_database(url, "products")).await?;
//! let db = client.database("products");
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult, HealthStatus, RetryConfig};
