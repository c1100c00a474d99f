//! Pieces shared by every backend connector

pub mod error;
pub mod health;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use health::{timed_probe, HealthStatus};
pub use retry::{retry, retry_with_backoff, RetryConfig};
