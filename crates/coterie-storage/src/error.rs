//! Storage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// For `KeyValueStore` implementations that are not SQLite-backed
    /// (quota exhausted, store disabled, sandboxed environment).
    #[error("Backing store unavailable: {0}")]
    Unavailable(String),
}
