use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::ProfilingResult;
use super::models::ProfilingRecord;

/// Append-only sink for profiling records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfilingRepository: Send + Sync {
    async fn create(&self, record: &ProfilingRecord) -> ProfilingResult<()>;
}

/// Records kept by [`InMemoryProfilingRepository::new`].
pub const DEFAULT_MAX_RECORDS: usize = 1024;

/// Keeps the most recent records in memory, oldest first.
///
/// Meant for tests and local runs. Once `max_records` is reached the oldest
/// record is dropped for each new one, so memory stays bounded.
#[derive(Debug)]
pub struct InMemoryProfilingRepository {
    records: RwLock<VecDeque<ProfilingRecord>>,
    max_records: usize,
}

impl Default for InMemoryProfilingRepository {
    fn default() -> Self {
        Self::with_max_records(DEFAULT_MAX_RECORDS)
    }
}

impl InMemoryProfilingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding at most `max_records` records (at least one).
    pub fn with_max_records(max_records: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            max_records: max_records.max(1),
        }
    }

    pub async fn records(&self) -> Vec<ProfilingRecord> {
        self.records.read().await.iter().cloned().collect()
    }
}

#[async_trait]
impl ProfilingRepository for InMemoryProfilingRepository {
    async fn create(&self, record: &ProfilingRecord) -> ProfilingResult<()> {
        let mut records = self.records.write().await;
        while records.len() >= self.max_records {
            records.pop_front();
        }
        records.push_back(record.clone());
        Ok(())
    }
}

#[async_trait]
impl<T: ProfilingRepository + ?Sized> ProfilingRepository for std::sync::Arc<T> {
    async fn create(&self, record: &ProfilingRecord) -> ProfilingResult<()> {
        (**self).create(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_in_memory_store_drops_oldest_past_capacity() {
        let repo = InMemoryProfilingRepository::with_max_records(2);
        for call in ["GET /products", "POST /products", "DELETE /products/{id}"] {
            repo.create(&ProfilingRecord::new(call, Duration::ZERO))
                .await
                .unwrap();
        }

        let calls: Vec<_> = repo
            .records()
            .await
            .into_iter()
            .map(|record| record.api_call)
            .collect();
        assert_eq!(calls, vec!["POST /products", "DELETE /products/{id}"]);
    }

    #[tokio::test]
    async fn test_in_memory_store_default_capacity() {
        let repo = InMemoryProfilingRepository::new();
        for _ in 0..DEFAULT_MAX_RECORDS + 5 {
            repo.create(&ProfilingRecord::new("GET /products", Duration::ZERO))
                .await
                .unwrap();
        }
        assert_eq!(repo.records().await.len(), DEFAULT_MAX_RECORDS);
    }
}
