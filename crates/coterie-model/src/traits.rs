//! Attribute and skill blocks
//!
//! Fixed trait rosters stored as named fields so the wire format matches the
//! exported sheet documents, with name-indexed access for the dot-grid layer
//! (which addresses traits by their element key, `animal-ken` included).

use serde::{Deserialize, Serialize};

/// Name-indexed view of the nine attributes, in roster order.
pub const ATTRIBUTE_NAMES: &[&str] = &[
    "strength",
    "dexterity",
    "stamina",
    "charisma",
    "manipulation",
    "composure",
    "intelligence",
    "wits",
    "resolve",
];

/// Name-indexed view of the twenty-seven skills, in roster order.
pub const SKILL_NAMES: &[&str] = &[
    "athletics",
    "brawl",
    "craft",
    "drive",
    "firearms",
    "larceny",
    "melee",
    "stealth",
    "survival",
    "animal-ken",
    "etiquette",
    "insight",
    "intimidation",
    "leadership",
    "performance",
    "persuasion",
    "streetwise",
    "subterfuge",
    "academics",
    "awareness",
    "finance",
    "investigation",
    "medicine",
    "occult",
    "politics",
    "science",
    "technology",
];

/// The nine attributes, each rated 1-5. Template value is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub strength: u8,
    pub dexterity: u8,
    pub stamina: u8,
    pub charisma: u8,
    pub manipulation: u8,
    pub composure: u8,
    pub intelligence: u8,
    pub wits: u8,
    pub resolve: u8,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: 1,
            dexterity: 1,
            stamina: 1,
            charisma: 1,
            manipulation: 1,
            composure: 1,
            intelligence: 1,
            wits: 1,
            resolve: 1,
        }
    }
}

impl Attributes {
    /// Rating for a trait addressed by its element key.
    pub fn get(&self, name: &str) -> Option<u8> {
        let value = match name {
            "strength" => self.strength,
            "dexterity" => self.dexterity,
            "stamina" => self.stamina,
            "charisma" => self.charisma,
            "manipulation" => self.manipulation,
            "composure" => self.composure,
            "intelligence" => self.intelligence,
            "wits" => self.wits,
            "resolve" => self.resolve,
            _ => return None,
        };
        Some(value)
    }

    /// Set a trait by element key. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: u8) -> bool {
        let slot = match name {
            "strength" => &mut self.strength,
            "dexterity" => &mut self.dexterity,
            "stamina" => &mut self.stamina,
            "charisma" => &mut self.charisma,
            "manipulation" => &mut self.manipulation,
            "composure" => &mut self.composure,
            "intelligence" => &mut self.intelligence,
            "wits" => &mut self.wits,
            "resolve" => &mut self.resolve,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// (key, rating) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        ATTRIBUTE_NAMES
            .iter()
            .map(move |name| (*name, self.get(name).unwrap_or(0)))
    }
}

/// The twenty-seven skills, each rated 0-5. Template value is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub athletics: u8,
    pub brawl: u8,
    pub craft: u8,
    pub drive: u8,
    pub firearms: u8,
    pub larceny: u8,
    pub melee: u8,
    pub stealth: u8,
    pub survival: u8,
    #[serde(rename = "animal-ken")]
    pub animal_ken: u8,
    pub etiquette: u8,
    pub insight: u8,
    pub intimidation: u8,
    pub leadership: u8,
    pub performance: u8,
    pub persuasion: u8,
    pub streetwise: u8,
    pub subterfuge: u8,
    pub academics: u8,
    pub awareness: u8,
    pub finance: u8,
    pub investigation: u8,
    pub medicine: u8,
    pub occult: u8,
    pub politics: u8,
    pub science: u8,
    pub technology: u8,
}

impl Skills {
    /// Rating for a skill addressed by its element key (`animal-ken` style).
    pub fn get(&self, name: &str) -> Option<u8> {
        let value = match name {
            "athletics" => self.athletics,
            "brawl" => self.brawl,
            "craft" => self.craft,
            "drive" => self.drive,
            "firearms" => self.firearms,
            "larceny" => self.larceny,
            "melee" => self.melee,
            "stealth" => self.stealth,
            "survival" => self.survival,
            "animal-ken" => self.animal_ken,
            "etiquette" => self.etiquette,
            "insight" => self.insight,
            "intimidation" => self.intimidation,
            "leadership" => self.leadership,
            "performance" => self.performance,
            "persuasion" => self.persuasion,
            "streetwise" => self.streetwise,
            "subterfuge" => self.subterfuge,
            "academics" => self.academics,
            "awareness" => self.awareness,
            "finance" => self.finance,
            "investigation" => self.investigation,
            "medicine" => self.medicine,
            "occult" => self.occult,
            "politics" => self.politics,
            "science" => self.science,
            "technology" => self.technology,
            _ => return None,
        };
        Some(value)
    }

    /// Set a skill by element key. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: u8) -> bool {
        let slot = match name {
            "athletics" => &mut self.athletics,
            "brawl" => &mut self.brawl,
            "craft" => &mut self.craft,
            "drive" => &mut self.drive,
            "firearms" => &mut self.firearms,
            "larceny" => &mut self.larceny,
            "melee" => &mut self.melee,
            "stealth" => &mut self.stealth,
            "survival" => &mut self.survival,
            "animal-ken" => &mut self.animal_ken,
            "etiquette" => &mut self.etiquette,
            "insight" => &mut self.insight,
            "intimidation" => &mut self.intimidation,
            "leadership" => &mut self.leadership,
            "performance" => &mut self.performance,
            "persuasion" => &mut self.persuasion,
            "streetwise" => &mut self.streetwise,
            "subterfuge" => &mut self.subterfuge,
            "academics" => &mut self.academics,
            "awareness" => &mut self.awareness,
            "finance" => &mut self.finance,
            "investigation" => &mut self.investigation,
            "medicine" => &mut self.medicine,
            "occult" => &mut self.occult,
            "politics" => &mut self.politics,
            "science" => &mut self.science,
            "technology" => &mut self.technology,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// (key, rating) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        SKILL_NAMES
            .iter()
            .map(move |name| (*name, self.get(name).unwrap_or(0)))
    }
}
