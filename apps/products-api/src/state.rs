//! Application state management

use database::postgres::DatabaseConnection;
use domain_products::profiling::ProfilingService;
use mongodb::{Client, Database};

use crate::config::Config;

/// Connected product store.
#[derive(Clone)]
pub enum ProductStore {
    Mongo(Database),
    Postgres(DatabaseConnection),
    Memory,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ProductStore,
    /// Set whenever the store or the profiler uses MongoDB
    pub mongo_client: Option<Client>,
    pub profiling: ProfilingService,
}
