//! Vault state container
//!
//! Wires configuration, database, and session store together and exposes
//! the consumer-facing API. Construction never fails: a vault whose
//! database cannot be opened starts session-only, exactly as if the
//! startup probe had failed.

use std::fs;
use std::path::{Path, PathBuf};

use coterie_model::CharacterRecord;
use coterie_session::{
    export_collection, export_record, parse_import, ExportDocument, SessionStore, StoreStatus,
};
use coterie_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Vault {
    config: Config,
    store: SessionStore,
}

impl Vault {
    pub fn new(config: Config) -> Self {
        let store = match open_database(&config) {
            Ok(db) => SessionStore::with_backing(db),
            Err(e) => {
                tracing::warn!(error = %e, "Could not open database; vault is session-only");
                SessionStore::in_memory()
            }
        };

        Self { config, store }
    }

    /// One-shot startup: run the availability probe and the initial load.
    pub fn initialize(&mut self) {
        self.store.probe_storage();
        self.store.load();

        let status = self.store.status();
        tracing::info!(
            count = status.count,
            persistent = status.persistent,
            "Vault initialized"
        );
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    // === Consumer-facing collection API ===

    pub fn characters(&self) -> &[CharacterRecord] {
        self.store.characters()
    }

    pub fn get(&self, id: &str) -> Option<&CharacterRecord> {
        self.store.get(id)
    }

    /// Create a blank sheet, add it to the collection, persist, and return
    /// its id.
    pub fn create_character(&mut self, name: &str) -> String {
        let mut record = CharacterRecord::new();
        record.name = name.to_string();
        let id = record.id.clone();

        self.store.upsert(record);
        self.store.save();
        id
    }

    pub fn upsert(&mut self, record: CharacterRecord) {
        self.store.upsert(record);
    }

    pub fn save(&self) {
        self.store.save();
    }

    pub fn remove(&mut self, id: &str) {
        self.store.remove(id);
        self.store.save();
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn status(&self) -> StoreStatus {
        self.store.status()
    }

    // === File-level import/export ===

    /// Read a document from disk and merge its records into the collection.
    /// Invalid documents are rejected before anything is touched. Returns
    /// the number of characters imported.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)?;
        let records = parse_import(&contents)?;
        Ok(self.store.import_records(records))
    }

    /// Write one character's sheet into the export directory and return the
    /// written path.
    pub fn export_character(&self, id: &str) -> Result<PathBuf> {
        let record = self
            .get(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        let doc = export_record(record)?;
        self.write_export(&doc)
    }

    /// Write the whole collection into the export directory.
    pub fn export_all(&self) -> Result<PathBuf> {
        let doc = export_collection(self.store.characters())?;
        self.write_export(&doc)
    }

    fn write_export(&self, doc: &ExportDocument) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.export_dir)?;
        let path = self.config.export_dir.join(&doc.file_name);
        fs::write(&path, &doc.contents)?;
        tracing::info!(path = %path.display(), "Wrote export");
        Ok(path)
    }
}

fn open_database(config: &Config) -> Result<Database> {
    if let Some(parent) = config.database_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(Database::open(&config.database_path)?)
}
