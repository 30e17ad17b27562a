//! Static race and class catalog.
//!
//! The catalog is loaded once at startup, either from the built-in set or
//! from a JSON document with the same shape:
//!
//! ```json
//! {
//!   "races":   [{ "id": "elf", "name": "Elf", "desc": "...", "stats": { "dex": 14 } }],
//!   "classes": [{ "id": "rogue", "name": "Rogue", "desc": "...", "hp": 10, "stat_bonus": { "dex": 4 } }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::ability::{Ability, AbilityScores};
use crate::error::{MechError, MechResult};

/// A playable race with base ability scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceDefinition {
    /// Stable identifier, stored in save records.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default, alias = "desc")]
    pub description: String,
    /// Base scores; unlisted abilities start at 10.
    #[serde(default)]
    pub stats: AbilityScores,
}

/// A playable class with flat ability bonuses and base hit points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Stable identifier, stored in save records.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default, alias = "desc")]
    pub description: String,
    /// Starting and maximum hit points.
    pub hp: i32,
    /// Flat bonuses added on top of the race's scores.
    #[serde(default, alias = "statBonus")]
    pub stat_bonus: AbilityScores,
}

/// The full set of selectable races and classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Available races.
    pub races: Vec<RaceDefinition>,
    /// Available classes.
    pub classes: Vec<ClassDefinition>,
}

impl Catalog {
    /// The catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            races: vec![
                race(
                    "human",
                    "Human",
                    "Well balanced",
                    AbilityScores::new()
                        .with(Ability::Str, 10)
                        .with(Ability::Dex, 10)
                        .with(Ability::Cha, 10),
                ),
                race(
                    "elf",
                    "Elf",
                    "Nimble by nature",
                    AbilityScores::new()
                        .with(Ability::Str, 8)
                        .with(Ability::Dex, 14)
                        .with(Ability::Cha, 8),
                ),
                race(
                    "tiefling",
                    "Tiefling",
                    "Charismatic",
                    AbilityScores::new()
                        .with(Ability::Str, 12)
                        .with(Ability::Dex, 6)
                        .with(Ability::Cha, 12),
                ),
            ],
            classes: vec![
                class(
                    "warrior",
                    "Warrior",
                    "Strength and valor",
                    14,
                    AbilityScores::new().with(Ability::Str, 4),
                ),
                class(
                    "rogue",
                    "Rogue",
                    "Stealth and cunning",
                    10,
                    AbilityScores::new().with(Ability::Dex, 4),
                ),
                class(
                    "bard",
                    "Bard",
                    "Music and magic",
                    10,
                    AbilityScores::new()
                        .with(Ability::Dex, 2)
                        .with(Ability::Cha, 2),
                ),
            ],
        }
    }

    /// Parse a catalog from JSON and check it for consistency.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| MechError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> MechResult<()> {
        if self.races.is_empty() {
            return Err(MechError::InvalidCatalog("no races defined".to_string()));
        }
        if self.classes.is_empty() {
            return Err(MechError::InvalidCatalog("no classes defined".to_string()));
        }
        if let Some(c) = self.classes.iter().find(|c| c.hp <= 0) {
            return Err(MechError::InvalidCatalog(format!(
                "class '{}' must have positive hp",
                c.id
            )));
        }
        Ok(())
    }

    /// Look up a race by id.
    pub fn race(&self, id: &str) -> MechResult<&RaceDefinition> {
        self.races
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| MechError::UnknownRace(id.to_string()))
    }

    /// Look up a class by id.
    pub fn class(&self, id: &str) -> MechResult<&ClassDefinition> {
        self.classes
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| MechError::UnknownClass(id.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn race(id: &str, name: &str, description: &str, stats: AbilityScores) -> RaceDefinition {
    RaceDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        stats,
    }
}

fn class(
    id: &str,
    name: &str,
    description: &str,
    hp: i32,
    stat_bonus: AbilityScores,
) -> ClassDefinition {
    ClassDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        hp,
        stat_bonus,
    }
}
