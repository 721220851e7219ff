//! Session store
//!
//! Owns the authoritative in-memory collection and never lets a
//! backing-store failure cross its boundary: every durable operation is
//! caught, logged, and resolved to either the degraded mode or a no-op with
//! the last-known-good collection intact. The availability mode is decided
//! once, by the startup probe; no other operation changes it.

use serde::Serialize;
use uuid::Uuid;

use coterie_model::CharacterRecord;
use coterie_storage::KeyValueStore;

/// Fixed key the whole-collection blob is persisted under.
pub const CHARACTERS_KEY: &str = "vtm_characters";

/// Throwaway key written and deleted by the startup probe.
const PROBE_KEY: &str = "vtm_probe";

/// Read-only status snapshot for the header indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    /// The store is answering (in memory if nothing else).
    pub available: bool,
    /// Records survive a process restart.
    pub persistent: bool,
    /// Records currently held in memory.
    pub count: usize,
}

pub struct SessionStore {
    /// Authoritative ordered collection.
    characters: Vec<CharacterRecord>,
    /// Decided once by `probe_storage`; never changed elsewhere.
    storage_available: bool,
    backing: Option<Box<dyn KeyValueStore>>,
}

impl SessionStore {
    /// Store over a durable backing store. Degraded until the probe passes.
    pub fn with_backing<S: KeyValueStore + 'static>(store: S) -> Self {
        Self {
            characters: Vec::new(),
            storage_available: false,
            backing: Some(Box::new(store)),
        }
    }

    /// Memory-only store, for when no backing store could be opened at all.
    pub fn in_memory() -> Self {
        Self {
            characters: Vec::new(),
            storage_available: false,
            backing: None,
        }
    }

    /// Write-then-delete a throwaway key to decide the session's mode.
    /// Called exactly once, at startup; this is the only operation allowed
    /// to change `storage_available`. Never fails.
    pub fn probe_storage(&mut self) -> bool {
        let outcome = match &self.backing {
            Some(store) => store
                .set(PROBE_KEY, "probe")
                .and_then(|()| store.remove(PROBE_KEY)),
            None => {
                tracing::warn!("No backing store configured; session-only storage");
                self.storage_available = false;
                return false;
            }
        };

        match outcome {
            Ok(()) => {
                self.storage_available = true;
                tracing::info!("Backing store available");
            }
            Err(e) => {
                self.storage_available = false;
                tracing::warn!(
                    error = %e,
                    "Backing store blocked; falling back to session-only storage"
                );
            }
        }
        self.storage_available
    }

    /// Refresh the collection from the persisted blob. Malformed or
    /// unreadable data is logged and the in-memory collection (empty on
    /// first run) stays authoritative. Never fails.
    pub fn load(&mut self) -> &[CharacterRecord] {
        if !self.storage_available {
            tracing::debug!(
                count = self.characters.len(),
                "Session-only storage; using in-memory collection"
            );
            return &self.characters;
        }

        if let Some(store) = &self.backing {
            match store.get(CHARACTERS_KEY) {
                Ok(Some(blob)) => match serde_json::from_str::<Vec<CharacterRecord>>(&blob) {
                    Ok(characters) => {
                        self.characters = characters;
                        tracing::info!(
                            count = self.characters.len(),
                            "Loaded character collection"
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            "Persisted collection is malformed; treating as no prior data"
                        );
                    }
                },
                Ok(None) => {
                    tracing::info!("No persisted collection found; starting fresh");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read persisted collection");
                }
            }
        }

        &self.characters
    }

    /// Serialize the entire collection and replace the persisted blob. On
    /// failure the old blob and the in-memory collection are both left as
    /// they were; there is no partial write and no retry. Never fails.
    pub fn save(&self) {
        if !self.storage_available {
            tracing::debug!(
                count = self.characters.len(),
                "Session-only storage; collection kept in memory"
            );
            return;
        }

        let Some(store) = &self.backing else {
            return;
        };

        let blob = match serde_json::to_string(&self.characters) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize character collection");
                return;
            }
        };

        match store.set(CHARACTERS_KEY, &blob) {
            Ok(()) => {
                tracing::info!(count = self.characters.len(), "Saved character collection");
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to persist collection; in-memory collection unchanged"
                );
            }
        }
    }

    /// Delete the persisted blob (best effort) and empty the collection.
    /// The in-memory side always ends empty.
    pub fn clear(&mut self) {
        if let Some(store) = &self.backing {
            if let Err(e) = store.remove(CHARACTERS_KEY) {
                tracing::error!(error = %e, "Failed to clear persisted collection");
            }
        }
        self.characters.clear();
        tracing::info!("Character collection cleared");
    }

    /// Insert-or-replace by id: an existing record is replaced at its
    /// position, a new one is appended. Takes effect durably on `save`.
    pub fn upsert(&mut self, record: CharacterRecord) {
        match self.characters.iter_mut().find(|c| c.id == record.id) {
            Some(slot) => {
                tracing::debug!(id = %record.id, "Replaced character");
                *slot = record;
            }
            None => {
                tracing::debug!(id = %record.id, "Added character");
                self.characters.push(record);
            }
        }
    }

    /// Remove by id; silently a no-op when the id is unknown.
    pub fn remove(&mut self, id: &str) {
        let before = self.characters.len();
        self.characters.retain(|c| c.id != id);
        if self.characters.len() < before {
            tracing::info!(id = %id, "Removed character");
        }
    }

    /// Strictly additive merge: every incoming record is appended, and any
    /// record with a blank or colliding id gets a fresh one first (checked
    /// against the collection as it grows, so a batch can't collide with
    /// itself). Ends with an implicit `save`. Returns the number imported.
    pub fn import_records(&mut self, incoming: Vec<CharacterRecord>) -> usize {
        let count = incoming.len();
        for mut record in incoming {
            if record.id.is_empty() || self.get(&record.id).is_some() {
                record.id = self.fresh_id();
            }
            self.characters.push(record);
        }

        tracing::info!(count, total = self.characters.len(), "Imported characters");
        self.save();
        count
    }

    pub fn get(&self, id: &str) -> Option<&CharacterRecord> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Status snapshot for display. `persistent` checks a live read when the
    /// mode flag is up, so quota loss after startup shows on the next check;
    /// the mode flag itself only changes in `probe_storage`.
    pub fn status(&self) -> StoreStatus {
        let count = self.characters.len();

        if !self.storage_available {
            return StoreStatus {
                available: true,
                persistent: false,
                count,
            };
        }

        let live = match &self.backing {
            Some(store) => store.get(CHARACTERS_KEY).is_ok(),
            None => false,
        };
        if !live {
            tracing::error!("Backing store stopped answering after startup");
        }

        StoreStatus {
            available: live,
            persistent: live,
            count,
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coterie_storage::{Database, StorageError};

    /// Backing store that refuses everything, like a sandboxed localStorage.
    struct BlockedStore;

    impl KeyValueStore for BlockedStore {
        fn get(&self, _key: &str) -> coterie_storage::Result<Option<String>> {
            Err(StorageError::Unavailable("blocked".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> coterie_storage::Result<()> {
            Err(StorageError::Unavailable("blocked".to_string()))
        }
        fn remove(&self, _key: &str) -> coterie_storage::Result<()> {
            Err(StorageError::Unavailable("blocked".to_string()))
        }
    }

    fn record_named(name: &str) -> CharacterRecord {
        let mut record = CharacterRecord::new();
        record.name = name.to_string();
        record
    }

    fn working_store() -> (SessionStore, Database) {
        let db = Database::open_in_memory().unwrap();
        let mut store = SessionStore::with_backing(db.clone());
        assert!(store.probe_storage());
        (store, db)
    }

    #[test]
    fn test_probe_success_and_cleanup() {
        let (store, db) = working_store();
        assert!(store.status().persistent);
        // The throwaway key must not linger
        assert_eq!(db.get_value("vtm_probe").unwrap(), None);
    }

    #[test]
    fn test_probe_failure_degrades() {
        let mut store = SessionStore::with_backing(BlockedStore);
        assert!(!store.probe_storage());

        // Everything keeps working in memory, nothing errors
        store.upsert(record_named("Mara"));
        store.save();
        assert_eq!(store.load().len(), 1);

        let status = store.status();
        assert!(status.available);
        assert!(!status.persistent);
        assert_eq!(status.count, 1);
    }

    #[test]
    fn test_no_backing_store_is_session_only() {
        let mut store = SessionStore::in_memory();
        assert!(!store.probe_storage());
        store.upsert(record_named("Mara"));
        store.save();
        assert_eq!(store.load().len(), 1);
        assert!(!store.status().persistent);
    }

    #[test]
    fn test_upsert_latest_wins_and_keeps_position() {
        let (mut store, _db) = working_store();

        let first = record_named("First");
        let second = record_named("Second");
        let first_id = first.id.clone();
        store.upsert(first);
        store.upsert(second);

        let mut replacement = record_named("First, revised");
        replacement.id = first_id.clone();
        store.upsert(replacement);

        assert_eq!(store.len(), 2);
        assert_eq!(store.characters()[0].id, first_id);
        assert_eq!(store.characters()[0].name, "First, revised");
        assert_eq!(store.characters()[1].name, "Second");
    }

    #[test]
    fn test_save_load_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let mut store = SessionStore::with_backing(db.clone());
        store.probe_storage();

        let mut record = record_named("Mara");
        record.clan = "Brujah".to_string();
        record.attributes.stamina = 3;
        record.skills.brawl = 4;
        record.set_specialty("brawl", "Grappling");
        record.add_discipline("Potence").unwrap();
        record.set_resonance(coterie_model::Resonance::Choleric, true);
        record.add_xp_entry(coterie_model::XpEntry {
            date: "2024-05-01".to_string(),
            amount: 3,
            spent_on: String::new(),
            notes: "Chapter finale".to_string(),
        });
        let expected = record.clone();

        store.upsert(record);
        store.save();

        // Simulated restart: a new store over the same database
        let mut restarted = SessionStore::with_backing(db);
        restarted.probe_storage();
        let loaded = restarted.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], expected);
        assert_eq!(loaded[0].name, "Mara");
    }

    #[test]
    fn test_load_with_corrupted_blob_yields_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set_value(CHARACTERS_KEY, "{not json[").unwrap();

        let mut store = SessionStore::with_backing(db);
        store.probe_storage();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_import_assigns_missing_and_colliding_ids() {
        let (mut store, _db) = working_store();

        let mut existing = record_named("Y");
        existing.id = "7".to_string();
        store.upsert(existing);

        let mut no_id = record_named("A");
        no_id.id = String::new();
        let mut colliding = record_named("B");
        colliding.id = "7".to_string();

        assert_eq!(store.import_records(vec![no_id, colliding]), 2);
        assert_eq!(store.len(), 3);

        // Nothing overwritten, all ids unique and distinct
        assert_eq!(store.get("7").unwrap().name, "Y");
        let ids: Vec<&str> = store.characters().iter().map(|c| c.id.as_str()).collect();
        for id in &ids {
            assert!(!id.is_empty());
            assert_eq!(ids.iter().filter(|i| *i == id).count(), 1);
        }
    }

    #[test]
    fn test_import_persists_implicitly() {
        let db = Database::open_in_memory().unwrap();
        let mut store = SessionStore::with_backing(db.clone());
        store.probe_storage();

        store.import_records(vec![record_named("X")]);

        let mut restarted = SessionStore::with_backing(db);
        restarted.probe_storage();
        assert_eq!(restarted.load().len(), 1);
    }

    #[test]
    fn test_clear_empties_memory_even_when_backing_fails() {
        let mut store = SessionStore::with_backing(BlockedStore);
        store.probe_storage();
        store.upsert(record_named("Mara"));

        store.clear();
        assert!(store.is_empty());

        let (mut healthy, db) = working_store();
        healthy.upsert(record_named("Mara"));
        healthy.save();
        healthy.clear();
        assert!(healthy.is_empty());
        assert_eq!(db.get_value(CHARACTERS_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let (mut store, _db) = working_store();
        store.upsert(record_named("Mara"));
        store.remove("no-such-id");
        assert_eq!(store.len(), 1);
    }
}
