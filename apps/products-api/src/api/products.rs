//! Products API routes

use axum::Router;
use domain_products::{
    InMemoryProductRepository, MongoProductRepository, PgProductRepository, ProductService,
    handlers,
};

use crate::state::{AppState, ProductStore};

/// Products router backed by the configured store
pub fn router(state: &AppState) -> Router {
    let profiling = state.profiling.clone();

    match &state.store {
        ProductStore::Mongo(db) => handlers::router(
            ProductService::new(MongoProductRepository::new(db)),
            profiling,
        ),
        ProductStore::Postgres(conn) => handlers::router(
            ProductService::new(PgProductRepository::new(conn.clone())),
            profiling,
        ),
        ProductStore::Memory => handlers::router(
            ProductService::new(InMemoryProductRepository::new()),
            profiling,
        ),
    }
}
