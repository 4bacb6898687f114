//! Persistence error type and the flat key-value storage surface

mod kv;

pub use kv::{FileKvStore, KvStore, MemoryKvStore};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Week index {index} out of range (expected 0..=3)")]
    WeekIndexOutOfRange { index: usize },

    #[error("Invalid sprint: {0}")]
    InvalidSprint(String),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;
