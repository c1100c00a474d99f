use std::future::Future;
use std::time::Instant;

use super::DatabaseError;

/// Outcome of a timed health probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message.into()),
            response_time_ms,
        }
    }
}

/// Await a probe and fold its result and latency into a [`HealthStatus`].
pub async fn timed_probe<F>(probe: F) -> HealthStatus
where
    F: Future<Output = Result<(), DatabaseError>>,
{
    let started = Instant::now();
    let outcome = probe.await;
    let elapsed = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(()) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}
