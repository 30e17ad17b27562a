//! The six abilities and per-ability score tables.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// One of the six character abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Charisma.
    Cha,
    /// Wisdom.
    Wis,
    /// Intelligence.
    Int,
    /// Constitution.
    Con,
}

impl Ability {
    /// All abilities in display order.
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Dex,
        Self::Cha,
        Self::Wis,
        Self::Int,
        Self::Con,
    ];

    /// The three-letter lowercase code used in adventure data.
    pub fn code(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Cha => "cha",
            Self::Wis => "wis",
            Self::Int => "int",
            Self::Con => "con",
        }
    }

    /// Full display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Cha => "Charisma",
            Self::Wis => "Wisdom",
            Self::Int => "Intelligence",
            Self::Con => "Constitution",
        }
    }
}

impl FromStr for Ability {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.code() == lower)
            .ok_or_else(|| MechError::UnknownAbility(s.to_string()))
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code().to_uppercase())
    }
}

/// A sparse table of per-ability values.
///
/// Used both for race base scores and class flat bonuses. Abilities that
/// are not listed read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores(BTreeMap<Ability, i32>);

impl AbilityScores {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value (builder style).
    pub fn with(mut self, ability: Ability, value: i32) -> Self {
        self.0.insert(ability, value);
        self
    }

    /// Get the value for an ability, if listed.
    pub fn get(&self, ability: Ability) -> Option<i32> {
        self.0.get(&ability).copied()
    }

    /// Iterate over listed abilities and values.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        self.0.iter().map(|(a, v)| (*a, *v))
    }
}
