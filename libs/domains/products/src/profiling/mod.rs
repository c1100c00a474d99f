//! Best-effort call timing.
//!
//! Handlers report how long each product operation took; records land in a
//! store of their own and never influence the response.

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProfilingError, ProfilingResult};
pub use models::ProfilingRecord;
pub use self::mongodb::MongoProfilingRepository;
pub use repository::{InMemoryProfilingRepository, ProfilingRepository};
pub use service::ProfilingService;
