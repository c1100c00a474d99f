use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfilingError {
    #[error("Profiling store error: {0}")]
    Storage(String),

    #[error("Profiling write timed out after {0:?}")]
    Timeout(Duration),
}

pub type ProfilingResult<T> = Result<T, ProfilingError>;

impl From<mongodb::error::Error> for ProfilingError {
    fn from(err: mongodb::error::Error) -> Self {
        ProfilingError::Storage(err.to_string())
    }
}
