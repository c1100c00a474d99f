use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// One timed API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilingRecord {
    pub id: Uuid,
    /// Method and route template, e.g. `GET /products/{id}`
    #[serde(rename = "method")]
    pub api_call: String,
    #[serde(rename = "duration")]
    pub duration_ms: i64,
    pub timestamp: DateTime<Utc>,
}

impl ProfilingRecord {
    /// A record with a fresh id, stamped now.
    pub fn new(api_call: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            api_call: api_call.into(),
            duration_ms: i64::try_from(duration.as_millis()).unwrap_or(i64::MAX),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_in_whole_milliseconds() {
        let record = ProfilingRecord::new("GET /products", Duration::from_micros(12_900));
        assert_eq!(record.api_call, "GET /products");
        assert_eq!(record.duration_ms, 12);
        assert!(record.timestamp <= Utc::now());
    }

    #[test]
    fn test_record_json_field_names() {
        let record = ProfilingRecord::new("DELETE /products/{id}", Duration::from_millis(3));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["method"], "DELETE /products/{id}");
        assert_eq!(json["duration"], 3);
        assert!(json.get("timestamp").is_some());
    }
}
