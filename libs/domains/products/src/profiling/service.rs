use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::{ProfilingError, ProfilingResult};
use super::models::ProfilingRecord;
use super::repository::ProfilingRepository;

pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Records call durations without ever holding up the caller.
///
/// Cheap to clone. A service built with [`disabled`](Self::disabled) accepts
/// and drops everything.
#[derive(Clone)]
pub struct ProfilingService {
    repository: Option<Arc<dyn ProfilingRepository>>,
    write_timeout: Duration,
}

impl ProfilingService {
    pub fn new<R: ProfilingRepository + 'static>(repository: R, write_timeout: Duration) -> Self {
        Self {
            repository: Some(Arc::new(repository)),
            write_timeout,
        }
    }

    pub fn disabled() -> Self {
        Self {
            repository: None,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.repository.is_some()
    }

    /// Store one record for `api_call`, bounded by the write timeout.
    #[instrument(skip(self, duration), fields(duration_ms = duration.as_millis() as u64))]
    pub async fn log(&self, api_call: &str, duration: Duration) -> ProfilingResult<()> {
        let Some(repository) = &self.repository else {
            return Ok(());
        };

        let record = ProfilingRecord::new(api_call, duration);
        tokio::time::timeout(self.write_timeout, repository.create(&record))
            .await
            .map_err(|_| ProfilingError::Timeout(self.write_timeout))??;

        debug!("Profiling record stored");
        Ok(())
    }

    /// [`log`](Self::log) on a background task; failures are logged and dropped.
    pub fn spawn_log(&self, api_call: impl Into<String>, duration: Duration) {
        if !self.is_enabled() {
            return;
        }

        let service = self.clone();
        let api_call = api_call.into();
        tokio::spawn(async move {
            if let Err(e) = service.log(&api_call, duration).await {
                warn!(api_call = %api_call, error = %e, "Failed to store profiling record");
            }
        });
    }
}
