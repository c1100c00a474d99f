use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::{timed_probe, DatabaseError, HealthStatus};

/// Ping the pool.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL ping failed: {e}")))
}

/// Ping the pool and report how long it took.
pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    timed_probe(check_health(db)).await
}
