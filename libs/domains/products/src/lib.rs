//! Products Domain
//!
//! CRUD over a single `Product` resource, with every outcome answered as a
//! `{code, message, data}` envelope and each call's duration reported to a
//! best-effort profiler.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, call timing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, envelope mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Port + MongoDB / PostgreSQL / in-memory adapters
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, form input
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     profiling::{MongoProfilingRepository, ProfilingService},
//!     service::ProductService,
//! };
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
//! let profiling = ProfilingService::new(
//!     MongoProfilingRepository::new(&db),
//!     Duration::from_secs(10),
//! );
//!
//! let router = handlers::router(service, profiling);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod postgres;
pub mod profiling;
pub mod repository;
pub mod response;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{NewProduct, Product, ProductFields};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use response::{ResponseData, ServiceResponse};
pub use self::mongodb::MongoProductRepository;
pub use service::ProductService;
