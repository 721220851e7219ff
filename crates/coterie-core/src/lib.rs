//! Coterie core
//!
//! Coordination layer for the character vault: configuration, the `Vault`
//! container that wires the database to the session store, and logging
//! setup. Consumers (the CLI, a form layer) talk to the vault; the vault
//! talks to everything else.

mod config;
mod error;
mod vault;

pub use config::Config;
pub use error::CoreError;
pub use vault::Vault;

// Re-export the layers consumers need
pub use coterie_model::{CharacterRecord, Discipline, Resonance, XpEntry};
pub use coterie_session::{ExportDocument, SessionError, SessionStore, StoreStatus};
pub use coterie_storage::{Database, KeyValueStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
