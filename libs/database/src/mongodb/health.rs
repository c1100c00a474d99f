use mongodb::{bson::doc, Database};

use crate::common::{timed_probe, DatabaseError, HealthStatus};

/// Ping the database.
pub async fn check_health(db: &Database) -> Result<(), DatabaseError> {
    db.run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("MongoDB ping failed: {e}")))
}

/// Ping the database and report how long it took.
pub async fn check_health_detailed(db: &Database) -> HealthStatus {
    timed_probe(check_health(db)).await
}
