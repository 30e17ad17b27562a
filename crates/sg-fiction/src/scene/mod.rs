//! Adventure graph: scenes, choices, requirements, and effects.
//!
//! An adventure is a JSON document:
//!
//! ```json
//! {
//!   "title": "The Sunken Crypt",
//!   "scenes": {
//!     "start": {
//!       "text": "{{name}} stands at the gate.",
//!       "effects": { "gold": 5, "inv": ["Torch"], "flags": ["arrived"] },
//!       "choices": [
//!         { "text": "Climb the wall", "next": "yard", "check": { "skill": "str", "dc": 12 }, "fail": "ditch" },
//!         { "text": "Bribe the guard", "next": "yard", "requires": "gold:5" }
//!       ]
//!     }
//!   }
//! }
//! ```

mod effect;
mod ledger;
mod requirement;
mod validate;

pub use effect::{InventoryChange, SceneEffects, apply_effects};
pub use ledger::AppliedEffectsLedger;
pub use requirement::{Requirement, Requirements};
pub use validate::{ValidationIssue, validate_adventure};

use std::collections::HashMap;

use serde::Deserialize;
use sg_mechanics::Ability;

use crate::error::{FictionError, FictionResult};

/// Scene every playthrough begins at, and the target of unknown ids.
pub const START_SCENE: &str = "start";
/// Scene the player is redirected to when hit points reach zero.
pub const DEATH_SCENE: &str = "death";
/// Default target of a failed check.
pub const DEFEAT_SCENE: &str = "defeat";

/// A complete adventure.
#[derive(Debug, Clone, Deserialize)]
pub struct Adventure {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Scenes by id.
    pub scenes: HashMap<String, SceneDefinition>,
}

impl Adventure {
    /// Create an empty adventure.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scenes: HashMap::new(),
        }
    }

    /// Add a scene (builder style).
    pub fn with_scene(mut self, id: impl Into<String>, scene: SceneDefinition) -> Self {
        self.scenes.insert(id.into(), scene);
        self
    }

    /// Parse and check an adventure document.
    pub fn from_json(json: &str) -> FictionResult<Self> {
        let adventure: Self =
            serde_json::from_str(json).map_err(|e| FictionError::InvalidAdventure(e.to_string()))?;
        adventure.ensure_playable()?;
        Ok(adventure)
    }

    /// Fail unless the adventure has a start scene.
    pub fn ensure_playable(&self) -> FictionResult<()> {
        if self.contains(START_SCENE) {
            Ok(())
        } else {
            Err(FictionError::InvalidAdventure(format!(
                "missing '{START_SCENE}' scene"
            )))
        }
    }

    /// Look up a scene.
    pub fn scene(&self, id: &str) -> Option<&SceneDefinition> {
        self.scenes.get(id)
    }

    /// Whether a scene id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }
}

/// One node of the adventure graph.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDefinition {
    /// Text template with `{{name}}`, `{{race}}`, `{{class}}` tokens.
    pub text: String,
    /// Effects fired on the first visit.
    #[serde(default)]
    pub effects: Option<SceneEffects>,
    /// Choices offered, in display order.
    #[serde(default)]
    pub choices: Vec<ChoiceDefinition>,
    /// Reaching this scene wins the adventure.
    #[serde(default)]
    pub victory: bool,
    /// Reaching this scene loses the adventure.
    #[serde(default)]
    pub defeat: bool,
}

impl SceneDefinition {
    /// Create a scene with text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attach effects.
    pub fn with_effects(mut self, effects: SceneEffects) -> Self {
        self.effects = Some(effects);
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: ChoiceDefinition) -> Self {
        self.choices.push(choice);
        self
    }

    /// Mark as a victory scene.
    pub fn victory(mut self) -> Self {
        self.victory = true;
        self
    }

    /// Mark as a defeat scene.
    pub fn defeat(mut self) -> Self {
        self.defeat = true;
        self
    }

    /// Whether this scene ends the playthrough.
    pub fn is_terminal(&self) -> bool {
        self.victory || self.defeat
    }

    /// Stand-in used when an adventure has no `death` scene.
    pub(crate) fn fallback_death() -> Self {
        Self::new("{{name}} has fallen. The adventure ends here.").defeat()
    }
}

/// A choice offered in a scene.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceDefinition {
    /// Button text.
    pub text: String,
    /// Target scene on selection, or on a successful check.
    pub next: String,
    /// Requirements for the choice to be shown.
    #[serde(default)]
    pub requires: Requirements,
    /// Ability check gating the transition.
    #[serde(default)]
    pub check: Option<CheckSpec>,
    /// Target scene on a failed check.
    #[serde(default)]
    pub fail: Option<String>,
}

impl ChoiceDefinition {
    /// Create an unconditional choice.
    pub fn new(text: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: next.into(),
            requires: Requirements::default(),
            check: None,
            fail: None,
        }
    }

    /// Add a requirement.
    pub fn requiring(mut self, requirement: Requirement) -> Self {
        let mut list = self.requires.as_slice().to_vec();
        list.push(requirement);
        self.requires = Requirements::new(list);
        self
    }

    /// Gate the transition behind a check.
    pub fn with_check(mut self, ability: Ability, dc: i32) -> Self {
        self.check = Some(CheckSpec { ability, dc });
        self
    }

    /// Set the failure target.
    pub fn with_fail(mut self, fail: impl Into<String>) -> Self {
        self.fail = Some(fail.into());
        self
    }

    /// Target of a failed check; `defeat` unless overridden.
    pub fn fail_target(&self) -> &str {
        self.fail.as_deref().unwrap_or(DEFEAT_SCENE)
    }
}

/// An ability check attached to a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CheckSpec {
    /// Ability tested.
    #[serde(alias = "skill")]
    pub ability: Ability,
    /// Difficulty class.
    pub dc: i32,
}
