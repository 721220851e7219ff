//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] coterie_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] coterie_session::SessionError),

    #[error("Character not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
