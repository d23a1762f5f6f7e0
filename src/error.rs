//! Structured error handling for the batch worker.
//!
//! The taxonomy mirrors the recovery policy: store failures abort the
//! current batch and are retried on the next cycle, cache failures are
//! logged and swallowed at the invalidator boundary, classification
//! failures abort the batch transaction so the offending post stays
//! pending.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Connection, query, or commit failure against PostgreSQL. The
    /// in-flight batch is rolled back; nothing was committed.
    #[error("Store unavailable: {0}")]
    Store(String),

    /// Cache invalidation failure. Never propagates past the invalidator;
    /// stale aggregates are recomputed or expire on the read path.
    #[error("Cache unavailable: {0}")]
    Cache(String),

    /// The classifier rejected or crashed on a post's content.
    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<sqlx::Error> for ProcessorError {
    fn from(error: sqlx::Error) -> Self {
        ProcessorError::Store(error.to_string())
    }
}

impl From<crate::cache::CacheError> for ProcessorError {
    fn from(error: crate::cache::CacheError) -> Self {
        ProcessorError::Cache(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
