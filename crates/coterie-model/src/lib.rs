//! Coterie character model
//!
//! The character record is the sole persisted entity: one struct per sheet,
//! nested records for the list-shaped sections, and pure derivation
//! functions for everything the sheet displays but never stores.

mod error;
mod gamedata;
mod record;
mod resonance;
mod traits;

pub use error::ModelError;
pub use gamedata::{
    clan, clan_disciplines, is_in_clan, Clan, ATTRIBUTE_CATEGORIES, CLANS, DISCIPLINES,
    PREDATOR_TYPES, RELATIONSHIP_KINDS, SKILL_CATEGORIES,
};
pub use record::{
    CharacterRecord, Conviction, DamageTrack, Discipline, Flaw, Merit, Relationship, SessionLog,
    XpEntry,
};
pub use resonance::Resonance;
pub use traits::{Attributes, Skills, ATTRIBUTE_NAMES, SKILL_NAMES};

pub type Result<T> = std::result::Result<T, ModelError>;
