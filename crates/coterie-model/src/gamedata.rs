//! V5 game data tables
//!
//! Static rosters the sheet dropdowns and add-flows draw from. The clan
//! table carries each clan's in-clan discipline triple; Caitiff and
//! Thin-blood keep their special entries.

pub struct Clan {
    pub name: &'static str,
    pub disciplines: &'static [&'static str],
}

pub const CLANS: &[Clan] = &[
    Clan { name: "Brujah", disciplines: &["Celerity", "Potence", "Presence"] },
    Clan { name: "Gangrel", disciplines: &["Animalism", "Fortitude", "Protean"] },
    Clan { name: "Malkavian", disciplines: &["Auspex", "Dominate", "Obfuscate"] },
    Clan { name: "Nosferatu", disciplines: &["Animalism", "Obfuscate", "Potence"] },
    Clan { name: "Toreador", disciplines: &["Auspex", "Celerity", "Presence"] },
    Clan { name: "Tremere", disciplines: &["Auspex", "Blood Sorcery", "Dominate"] },
    Clan { name: "Ventrue", disciplines: &["Dominate", "Fortitude", "Presence"] },
    Clan { name: "Banu Haqim", disciplines: &["Blood Sorcery", "Celerity", "Obfuscate"] },
    Clan { name: "Hecata", disciplines: &["Auspex", "Fortitude", "Oblivion"] },
    Clan { name: "Lasombra", disciplines: &["Dominate", "Oblivion", "Potence"] },
    Clan { name: "Ministry", disciplines: &["Obfuscate", "Presence", "Protean"] },
    Clan { name: "Ravnos", disciplines: &["Animalism", "Obfuscate", "Presence"] },
    Clan { name: "Salubri", disciplines: &["Auspex", "Dominate", "Fortitude"] },
    Clan { name: "Tzimisce", disciplines: &["Animalism", "Dominate", "Protean"] },
    Clan { name: "Caitiff", disciplines: &["Any"] },
    Clan { name: "Thin-blood", disciplines: &["Thin-blood Alchemy"] },
];

pub const DISCIPLINES: &[&str] = &[
    "Animalism",
    "Auspex",
    "Blood Sorcery",
    "Celerity",
    "Dominate",
    "Fortitude",
    "Obfuscate",
    "Oblivion",
    "Potence",
    "Presence",
    "Protean",
    "Thin-blood Alchemy",
];

pub const PREDATOR_TYPES: &[&str] = &[
    "Alleycat",
    "Bagger",
    "Blood Leech",
    "Cleaver",
    "Consensualist",
    "Extortionist",
    "Farmer",
    "Osiris",
    "Pursuer",
    "Sandman",
    "Scene Queen",
    "Siren",
];

pub const RELATIONSHIP_KINDS: &[&str] = &[
    "Ally",
    "Contact",
    "Enemy",
    "Rival",
    "Touchstone",
    "Sire",
    "Childer",
    "Lover",
    "Family",
    "Coterie Member",
    "Other",
];

/// Display grouping for the nine attributes.
pub const ATTRIBUTE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Physical", &["Strength", "Dexterity", "Stamina"]),
    ("Social", &["Charisma", "Manipulation", "Composure"]),
    ("Mental", &["Intelligence", "Wits", "Resolve"]),
];

/// Display grouping for the twenty-seven skills.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Physical",
        &[
            "Athletics", "Brawl", "Craft", "Drive", "Firearms", "Larceny", "Melee", "Stealth",
            "Survival",
        ],
    ),
    (
        "Social",
        &[
            "Animal Ken",
            "Etiquette",
            "Insight",
            "Intimidation",
            "Leadership",
            "Performance",
            "Persuasion",
            "Streetwise",
            "Subterfuge",
        ],
    ),
    (
        "Mental",
        &[
            "Academics",
            "Awareness",
            "Finance",
            "Investigation",
            "Medicine",
            "Occult",
            "Politics",
            "Science",
            "Technology",
        ],
    ),
];

/// Look up a clan by its exact display name.
pub fn clan(name: &str) -> Option<&'static Clan> {
    CLANS.iter().find(|c| c.name == name)
}

/// The in-clan discipline list for a clan, empty for unknown clans.
pub fn clan_disciplines(name: &str) -> &'static [&'static str] {
    clan(name).map(|c| c.disciplines).unwrap_or(&[])
}

/// Whether `discipline` is in-clan for `clan_name`.
pub fn is_in_clan(clan_name: &str, discipline: &str) -> bool {
    clan_disciplines(clan_name).contains(&discipline)
}
