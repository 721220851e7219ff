//! Backing-store contract
//!
//! The session layer talks to durable storage only through this trait: a
//! string key-value store where any operation may fail and every failure is
//! recoverable. `Database` is the production implementation; tests substitute
//! doubles that refuse writes.

use crate::database::Database;
use crate::Result;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.delete_value(key)
    }
}
