//! Coterie session layer
//!
//! The session store owns the authoritative in-memory character collection
//! and is the single gate to the durable backing store: availability probe,
//! degraded-mode fallback, load/save/clear, id-safe import, and the
//! export/import document codecs.

mod codec;
mod error;
mod store;

pub use codec::{export_collection, export_record, parse_import, ExportDocument};
pub use error::SessionError;
pub use store::{SessionStore, StoreStatus, CHARACTERS_KEY};

pub type Result<T> = std::result::Result<T, SessionError>;
