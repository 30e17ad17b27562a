//! Derived ability scores from layered bonus sources.
//!
//! A score is the race's base value (10 when there is no race or the race
//! does not list the ability), plus the class's flat bonus, plus every
//! matching item annotation in the inventory. Scores are not clamped.

use crate::ability::Ability;
use crate::bonus::inventory_bonus;
use crate::catalog::{ClassDefinition, RaceDefinition};

/// Score used when no race defines the ability.
pub const BASE_SCORE: i32 = 10;

/// Borrowed view of everything that contributes to a character's scores.
#[derive(Debug, Clone, Copy)]
pub struct StatSources<'a> {
    /// Selected race, if any.
    pub race: Option<&'a RaceDefinition>,
    /// Selected class, if any.
    pub class: Option<&'a ClassDefinition>,
    /// Carried item descriptors.
    pub inventory: &'a [String],
}

impl<'a> StatSources<'a> {
    /// Bundle the score sources.
    pub fn new(
        race: Option<&'a RaceDefinition>,
        class: Option<&'a ClassDefinition>,
        inventory: &'a [String],
    ) -> Self {
        Self {
            race,
            class,
            inventory,
        }
    }

    /// The derived score for an ability.
    pub fn stat(&self, ability: Ability) -> i32 {
        let base = self
            .race
            .and_then(|r| r.stats.get(ability))
            .unwrap_or(BASE_SCORE);
        let class_bonus = self
            .class
            .and_then(|c| c.stat_bonus.get(ability))
            .unwrap_or(0);
        base
            .saturating_add(class_bonus)
            .saturating_add(inventory_bonus(self.inventory, ability))
    }

    /// The check modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier_for(self.stat(ability))
    }
}

/// `floor((score - 10) / 2)`, rounding toward negative infinity.
pub fn modifier_for(score: i32) -> i32 {
    score.saturating_sub(BASE_SCORE).div_euclid(2)
}
