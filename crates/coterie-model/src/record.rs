//! Character record
//!
//! One struct per sheet. Field names follow the exported document format
//! (camelCase, `animal-ken` style skill keys) so sheets written by earlier
//! versions of the app import unchanged; every field defaults to its
//! template value so sparse documents parse.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;
use crate::gamedata;
use crate::resonance::Resonance;
use crate::traits::{Attributes, Skills};
use crate::Result;

/// A discipline line on the sheet. Name uniqueness is enforced by the
/// add-flow, not by the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Discipline {
    pub name: String,
    /// Rating, 0-5.
    pub level: u8,
    /// Free text describing powers learned at each level.
    pub powers: String,
    pub in_clan: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merit {
    pub name: String,
    pub dots: u8,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flaw {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conviction {
    pub conviction: String,
    /// Touchstone name and description, joined as entered.
    pub touchstone: String,
}

/// One experience ledger line. Positive amounts are earned, negative spent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XpEntry {
    pub date: String,
    pub amount: i32,
    pub spent_on: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionLog {
    pub number: u32,
    pub date: String,
    pub summary: String,
    pub npcs: String,
    pub xp_awarded: i32,
}

/// Superficial/aggravated damage counts. The track length itself is derived
/// from attributes and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageTrack {
    pub superficial: u8,
    pub aggravated: u8,
}

/// The persisted unit of data for one player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterRecord {
    /// Opaque unique id, assigned at creation and never reassigned.
    pub id: String,

    // Basic info
    pub name: String,
    pub player: String,
    pub chronicle: String,
    pub concept: String,
    pub clan: String,
    pub generation: String,
    pub predator_type: String,
    pub age_category: String,
    pub sire: String,
    pub ambition: String,
    pub desire: String,
    pub backstory: String,

    pub attributes: Attributes,
    pub skills: Skills,

    /// Sparse skill-name -> specialty text. Absent entries imply none.
    pub specialties: BTreeMap<String, String>,
    pub disciplines: Vec<Discipline>,
    pub relationships: Vec<Relationship>,
    pub merits: Vec<Merit>,
    pub flaws: Vec<Flaw>,

    // Humanity & touchstones
    pub humanity: u8,
    pub stains: u8,
    pub chronicle_tenets: String,
    pub convictions: Vec<Conviction>,

    // Blood & vitae
    pub blood_potency: u8,
    pub hunger: u8,
    pub blood_pool: i32,
    pub resonances: BTreeSet<Resonance>,

    pub health_track: DamageTrack,
    pub willpower_track: DamageTrack,

    pub xp_log: Vec<XpEntry>,

    // Campaign
    pub campaign_name: String,
    pub campaign_notes: String,
    pub sessions: Vec<SessionLog>,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            player: String::new(),
            chronicle: String::new(),
            concept: String::new(),
            clan: String::new(),
            generation: "13th".to_string(),
            predator_type: String::new(),
            age_category: "Childer".to_string(),
            sire: String::new(),
            ambition: String::new(),
            desire: String::new(),
            backstory: String::new(),
            attributes: Attributes::default(),
            skills: Skills::default(),
            specialties: BTreeMap::new(),
            disciplines: Vec::new(),
            relationships: Vec::new(),
            merits: Vec::new(),
            flaws: Vec::new(),
            humanity: 7,
            stains: 0,
            chronicle_tenets: String::new(),
            convictions: Vec::new(),
            blood_potency: 1,
            hunger: 1,
            blood_pool: 1,
            resonances: BTreeSet::new(),
            health_track: DamageTrack::default(),
            willpower_track: DamageTrack::default(),
            xp_log: Vec::new(),
            campaign_name: String::new(),
            campaign_notes: String::new(),
            sessions: Vec::new(),
        }
    }
}

impl CharacterRecord {
    /// Template record with a freshly assigned id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    /// Display name with the fallback used across the list and sheet header.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Character"
        } else {
            &self.name
        }
    }

    // === Derived stats (recomputed on every read, never stored) ===

    /// Sum of positive experience entries.
    pub fn total_xp(&self) -> i32 {
        self.xp_log.iter().filter(|e| e.amount > 0).map(|e| e.amount).sum()
    }

    /// Sum of the absolute value of negative experience entries.
    pub fn spent_xp(&self) -> i32 {
        self.xp_log
            .iter()
            .filter(|e| e.amount < 0)
            .map(|e| e.amount.abs())
            .sum()
    }

    pub fn available_xp(&self) -> i32 {
        self.total_xp() - self.spent_xp()
    }

    /// Health track length: stamina + 3.
    pub fn health_max(&self) -> u8 {
        self.attributes.stamina + 3
    }

    /// Willpower track length: composure + resolve.
    pub fn willpower_max(&self) -> u8 {
        self.attributes.composure + self.attributes.resolve
    }

    // === Add-flow helpers ===

    /// Add a discipline line at level 0, computing the in-clan flag from the
    /// current clan. Rejects names already on the sheet.
    pub fn add_discipline(&mut self, name: &str) -> Result<()> {
        if self.disciplines.iter().any(|d| d.name == name) {
            return Err(ModelError::DuplicateDiscipline(name.to_string()));
        }

        self.disciplines.push(Discipline {
            name: name.to_string(),
            level: 0,
            powers: String::new(),
            in_clan: gamedata::is_in_clan(&self.clan, name),
        });

        Ok(())
    }

    /// On clan selection: append the clan's in-clan disciplines that are not
    /// already on the sheet, at level 0. Returns how many were added.
    pub fn apply_clan_disciplines(&mut self) -> usize {
        let mut added = 0;
        for name in gamedata::clan_disciplines(&self.clan) {
            if !self.disciplines.iter().any(|d| &d.name == name) {
                self.disciplines.push(Discipline {
                    name: name.to_string(),
                    level: 0,
                    powers: String::new(),
                    in_clan: true,
                });
                added += 1;
            }
        }
        added
    }

    pub fn remove_discipline(&mut self, index: usize) {
        if index < self.disciplines.len() {
            self.disciplines.remove(index);
        }
    }

    /// Toggle a resonance tag. The set ignores duplicate adds.
    pub fn set_resonance(&mut self, resonance: Resonance, present: bool) {
        if present {
            self.resonances.insert(resonance);
        } else {
            self.resonances.remove(&resonance);
        }
    }

    /// Set or clear a skill specialty. Empty text removes the entry so the
    /// map stays sparse.
    pub fn set_specialty(&mut self, skill: &str, text: &str) {
        if text.trim().is_empty() {
            self.specialties.remove(skill);
        } else {
            self.specialties.insert(skill.to_string(), text.to_string());
        }
    }

    pub fn add_xp_entry(&mut self, entry: XpEntry) {
        self.xp_log.push(entry);
    }

    pub fn remove_xp_entry(&mut self, index: usize) -> Result<()> {
        if index >= self.xp_log.len() {
            return Err(ModelError::XpEntryOutOfRange(index));
        }
        self.xp_log.remove(index);
        Ok(())
    }

    pub fn add_session(&mut self, log: SessionLog) {
        self.sessions.push(log);
    }

    /// Remove a session log and renumber the remainder 1..n.
    pub fn remove_session(&mut self, index: usize) -> Result<()> {
        if index >= self.sessions.len() {
            return Err(ModelError::SessionOutOfRange(index));
        }
        self.sessions.remove(index);
        for (i, session) in self.sessions.iter_mut().enumerate() {
            session.number = (i + 1) as u32;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_values() {
        let record = CharacterRecord::new();
        assert!(!record.id.is_empty());
        assert_eq!(record.generation, "13th");
        assert_eq!(record.age_category, "Childer");
        assert_eq!(record.humanity, 7);
        assert_eq!(record.blood_potency, 1);
        assert_eq!(record.hunger, 1);
        assert_eq!(record.blood_pool, 1);
        assert_eq!(record.attributes.strength, 1);
        assert_eq!(record.skills.athletics, 0);
        assert!(record.disciplines.is_empty());
        assert_eq!(record.display_name(), "Unnamed Character");
    }

    #[test]
    fn test_ids_are_unique_per_creation() {
        assert_ne!(CharacterRecord::new().id, CharacterRecord::new().id);
    }

    #[test]
    fn test_xp_totals_derive_from_log() {
        let mut record = CharacterRecord::new();
        record.add_xp_entry(XpEntry {
            date: "2024-03-01".to_string(),
            amount: 5,
            spent_on: String::new(),
            notes: String::new(),
        });
        record.add_xp_entry(XpEntry {
            date: "2024-03-08".to_string(),
            amount: -3,
            spent_on: "Celerity 2".to_string(),
            notes: String::new(),
        });
        record.add_xp_entry(XpEntry {
            date: "2024-03-15".to_string(),
            amount: 4,
            spent_on: String::new(),
            notes: String::new(),
        });

        assert_eq!(record.total_xp(), 9);
        assert_eq!(record.spent_xp(), 3);
        assert_eq!(record.available_xp(), 6);

        record.remove_xp_entry(1).unwrap();
        assert_eq!(record.spent_xp(), 0);
        assert!(record.remove_xp_entry(5).is_err());
    }

    #[test]
    fn test_track_maxima_derive_from_attributes() {
        let mut record = CharacterRecord::new();
        record.attributes.stamina = 3;
        record.attributes.composure = 2;
        record.attributes.resolve = 4;

        assert_eq!(record.health_max(), 6);
        assert_eq!(record.willpower_max(), 6);
    }

    #[test]
    fn test_add_discipline_rejects_duplicates() {
        let mut record = CharacterRecord::new();
        record.clan = "Brujah".to_string();

        record.add_discipline("Celerity").unwrap();
        let added = record.disciplines.last().unwrap();
        assert!(added.in_clan);
        assert_eq!(added.level, 0);

        record.add_discipline("Auspex").unwrap();
        assert!(!record.disciplines.last().unwrap().in_clan);

        assert!(matches!(
            record.add_discipline("Celerity"),
            Err(ModelError::DuplicateDiscipline(_))
        ));
        assert_eq!(record.disciplines.len(), 2);
    }

    #[test]
    fn test_apply_clan_disciplines_appends_missing() {
        let mut record = CharacterRecord::new();
        record.clan = "Tremere".to_string();
        record.add_discipline("Auspex").unwrap();

        assert_eq!(record.apply_clan_disciplines(), 2);
        let names: Vec<&str> = record.disciplines.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Auspex", "Blood Sorcery", "Dominate"]);

        // Second application is a no-op
        assert_eq!(record.apply_clan_disciplines(), 0);
    }

    #[test]
    fn test_session_removal_renumbers() {
        let mut record = CharacterRecord::new();
        for number in 1..=3 {
            record.add_session(SessionLog {
                number,
                date: "2024-04-01".to_string(),
                summary: format!("Session {}", number),
                npcs: String::new(),
                xp_awarded: 2,
            });
        }

        record.remove_session(0).unwrap();
        let numbers: Vec<u32> = record.sessions.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(record.sessions[0].summary, "Session 2");
        assert!(record.remove_session(9).is_err());
    }

    #[test]
    fn test_resonance_set_semantics() {
        let mut record = CharacterRecord::new();
        record.set_resonance(Resonance::Choleric, true);
        record.set_resonance(Resonance::Choleric, true);
        assert_eq!(record.resonances.len(), 1);

        record.set_resonance(Resonance::Choleric, false);
        assert!(record.resonances.is_empty());
    }

    #[test]
    fn test_specialties_stay_sparse() {
        let mut record = CharacterRecord::new();
        record.set_specialty("athletics", "Parkour");
        assert_eq!(record.specialties.get("athletics").unwrap(), "Parkour");

        record.set_specialty("athletics", "  ");
        assert!(record.specialties.is_empty());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut record = CharacterRecord::new();
        record.predator_type = "Alleycat".to_string();
        record.add_discipline("Potence").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"predatorType\":\"Alleycat\""));
        assert!(json.contains("\"inClan\":false"));
        assert!(json.contains("\"xpLog\":[]"));
        assert!(json.contains("\"healthTrack\":"));
    }

    #[test]
    fn test_sparse_document_parses_to_template() {
        let record: CharacterRecord =
            serde_json::from_str(r#"{"name": "Mara", "clan": "Brujah"}"#).unwrap();
        assert_eq!(record.name, "Mara");
        assert_eq!(record.generation, "13th");
        assert_eq!(record.humanity, 7);
        assert!(record.id.is_empty());
    }

    #[test]
    fn test_legacy_stored_totals_are_ignored() {
        // Older documents carried totalXP/spentXP as stored fields; the
        // ledger is authoritative now.
        let record: CharacterRecord = serde_json::from_str(
            r#"{"name": "Old", "totalXP": 99, "spentXP": 40,
                "xpLog": [{"date": "2023-01-01", "amount": 5, "spentOn": "", "notes": ""}]}"#,
        )
        .unwrap();
        assert_eq!(record.total_xp(), 5);
        assert_eq!(record.spent_xp(), 0);
    }

    #[test]
    fn test_relationship_kind_uses_type_key() {
        let relationship = Relationship {
            name: "Elena".to_string(),
            kind: "Touchstone".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_string(&relationship).unwrap();
        assert!(json.contains("\"type\":\"Touchstone\""));
    }

    #[test]
    fn test_full_round_trip() {
        let mut record = CharacterRecord::new();
        record.name = "Mara".to_string();
        record.clan = "Brujah".to_string();
        record.apply_clan_disciplines();
        record.set_resonance(Resonance::Sanguine, true);
        record.set_specialty("brawl", "Bar fights");
        record.merits.push(Merit {
            name: "Iron Will".to_string(),
            dots: 2,
            description: String::new(),
        });
        record.health_track.superficial = 2;

        let json = serde_json::to_string(&record).unwrap();
        let parsed: CharacterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
