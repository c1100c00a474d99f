use async_trait::async_trait;
use mongodb::{Collection, Database, bson};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::error::ProfilingResult;
use super::models::ProfilingRecord;
use super::repository::ProfilingRepository;

pub const PROFILING_COLLECTION: &str = "profiling";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProfilingDocument {
    #[serde(rename = "_id")]
    id: String,
    method: String,
    duration: i64,
    timestamp: bson::DateTime,
}

impl From<&ProfilingRecord> for ProfilingDocument {
    fn from(record: &ProfilingRecord) -> Self {
        Self {
            id: record.id.to_string(),
            method: record.api_call.clone(),
            duration: record.duration_ms,
            timestamp: bson::DateTime::from_millis(record.timestamp.timestamp_millis()),
        }
    }
}

pub struct MongoProfilingRepository {
    collection: Collection<ProfilingDocument>,
}

impl MongoProfilingRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, PROFILING_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProfilingDocument>(collection_name),
        }
    }
}

#[async_trait]
impl ProfilingRepository for MongoProfilingRepository {
    #[instrument(skip(self, record), fields(api_call = %record.api_call))]
    async fn create(&self, record: &ProfilingRecord) -> ProfilingResult<()> {
        self.collection
            .insert_one(ProfilingDocument::from(record))
            .await?;
        Ok(())
    }
}
