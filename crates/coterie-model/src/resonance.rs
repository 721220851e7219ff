//! Blood resonance tags
//!
//! A sheet carries a set of these (no duplicates); the checkbox row in the
//! blood panel toggles them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resonance {
    Choleric,
    Melancholic,
    Phlegmatic,
    Sanguine,
    Animal,
    Empty,
}

impl Resonance {
    pub fn all() -> &'static [Resonance] {
        &[
            Resonance::Choleric,
            Resonance::Melancholic,
            Resonance::Phlegmatic,
            Resonance::Sanguine,
            Resonance::Animal,
            Resonance::Empty,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resonance::Choleric => "choleric",
            Resonance::Melancholic => "melancholic",
            Resonance::Phlegmatic => "phlegmatic",
            Resonance::Sanguine => "sanguine",
            Resonance::Animal => "animal",
            Resonance::Empty => "empty",
        }
    }
}

impl std::fmt::Display for Resonance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Resonance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "choleric" => Ok(Resonance::Choleric),
            "melancholic" => Ok(Resonance::Melancholic),
            "phlegmatic" => Ok(Resonance::Phlegmatic),
            "sanguine" => Ok(Resonance::Sanguine),
            "animal" => Ok(Resonance::Animal),
            "empty" => Ok(Resonance::Empty),
            _ => Err(format!("Unknown resonance: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_is_lowercase() {
        let json = serde_json::to_string(&Resonance::Choleric).unwrap();
        assert_eq!(json, "\"choleric\"");
        let parsed: Resonance = serde_json::from_str("\"sanguine\"").unwrap();
        assert_eq!(parsed, Resonance::Sanguine);
    }

    #[test]
    fn test_round_trip_names() {
        for resonance in Resonance::all() {
            let parsed: Resonance = resonance.as_str().parse().unwrap();
            assert_eq!(parsed, *resonance);
        }
        assert!("umami".parse::<Resonance>().is_err());
    }
}
