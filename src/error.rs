use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a [`crate::store::TaskStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store document not found: {0}")]
    NotFound(PathBuf),

    #[error("store read failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store document could not be decoded: {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store read timed out after {elapsed_ms}ms (limit {limit_ms}ms)")]
    Timeout { elapsed_ms: u128, limit_ms: u128 },
}

#[derive(Error, Debug)]
pub enum PerfError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("worker pool could not be started: {0}")]
    WorkerPool(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerfError>;
