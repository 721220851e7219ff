//! Coterie storage layer
//!
//! SQLite realization of the key-value backing store the session layer
//! persists into. One table, one blob per key; every failure is surfaced as
//! a recoverable `StorageError`.

mod database;
mod error;
mod kv;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use kv::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;
