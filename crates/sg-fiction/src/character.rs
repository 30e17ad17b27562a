//! Character creation: name, race and class selection.

use sg_mechanics::{Ability, Catalog, ClassDefinition, RaceDefinition, StatSources};

use crate::error::{FictionError, FictionResult};
use crate::player::PlayerState;

/// Longest accepted character name, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Selections made while creating a character.
#[derive(Debug, Clone, Default)]
pub struct CharacterDraft {
    /// Entered name (trimmed on confirmation).
    pub name: String,
    /// Selected race id.
    pub race_id: Option<String>,
    /// Selected class id.
    pub class_id: Option<String>,
}

impl CharacterDraft {
    /// Start an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Select a race. Clears the class, since class previews depend on race.
    pub fn with_race(mut self, race_id: impl Into<String>) -> Self {
        self.race_id = Some(race_id.into());
        self.class_id = None;
        self
    }

    /// Select a class.
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    /// Validate the draft against the catalog.
    pub fn confirm(&self, catalog: &Catalog) -> FictionResult<Character> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FictionError::IncompleteCharacter(
                "name is required".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(FictionError::IncompleteCharacter(format!(
                "name is longer than {MAX_NAME_LEN} characters"
            )));
        }
        let race_id = self
            .race_id
            .as_deref()
            .ok_or_else(|| FictionError::IncompleteCharacter("race is required".to_string()))?;
        let class_id = self
            .class_id
            .as_deref()
            .ok_or_else(|| FictionError::IncompleteCharacter("class is required".to_string()))?;

        Ok(Character {
            name: name.to_string(),
            race: Some(catalog.race(race_id)?.clone()),
            class: Some(catalog.class(class_id)?.clone()),
        })
    }
}

/// A confirmed character: the static half of the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Race; `None` only when a save names a race the catalog lacks.
    pub race: Option<RaceDefinition>,
    /// Class; `None` only when a save names a class the catalog lacks.
    pub class: Option<ClassDefinition>,
}

impl Character {
    /// A fresh player state: full health, no gold, empty inventory.
    pub fn new_player(&self) -> PlayerState {
        PlayerState::new(
            self.name.clone(),
            self.race.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
            self.class.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            self.class.as_ref().map_or(1, |c| c.hp),
        )
    }

    /// Score sources combining this character with an inventory.
    pub fn stat_sources<'a>(&'a self, inventory: &'a [String]) -> StatSources<'a> {
        StatSources::new(self.race.as_ref(), self.class.as_ref(), inventory)
    }

    /// Score before any items.
    pub fn base_stat(&self, ability: Ability) -> i32 {
        self.stat_sources(&[]).stat(ability)
    }
}
