//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::{AppState, ProductStore};

async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    match &state.store {
        ProductStore::Mongo(db) => checks.push((
            "mongodb",
            Box::pin(async move {
                database::mongodb::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        )),
        ProductStore::Postgres(conn) => checks.push((
            "postgres",
            Box::pin(async move {
                database::postgres::check_health(conn)
                    .await
                    .map_err(|e| e.to_string())
            }),
        )),
        ProductStore::Memory => {}
    }

    run_health_checks(checks).await
}

/// Router serving `/ready`: 200 while the product store answers, 503 otherwise.
pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
