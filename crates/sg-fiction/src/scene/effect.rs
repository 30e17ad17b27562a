//! One-time effects fired on the first visit of a scene.

use serde::Deserialize;

use super::ledger::AppliedEffectsLedger;
use super::SceneDefinition;
use crate::player::{FlagSet, PlayerState};

/// State changes attached to a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SceneEffects {
    /// Gold delta.
    #[serde(default)]
    pub gold: i32,
    /// Hit point delta.
    #[serde(default)]
    pub hp: i32,
    /// Items gained or lost.
    #[serde(default)]
    pub inv: Vec<InventoryChange>,
    /// Flags to set.
    #[serde(default)]
    pub flags: Vec<String>,
}

/// One inventory entry of an effect. `"-Torch"` removes, `"Torch"` adds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum InventoryChange {
    /// Append this exact item text.
    Add(String),
    /// Remove the first item containing this text.
    Remove(String),
}

impl From<String> for InventoryChange {
    fn from(value: String) -> Self {
        match value.strip_prefix('-') {
            Some(needle) => InventoryChange::Remove(needle.to_string()),
            None => InventoryChange::Add(value),
        }
    }
}

/// Apply a scene's effects unless the ledger says they already fired.
///
/// Sub-effects run in a fixed order: gold, hp, inventory, flags. Returns
/// `true` when something was applied.
pub fn apply_effects(
    scene_id: &str,
    scene: &SceneDefinition,
    player: &mut PlayerState,
    flags: &mut FlagSet,
    ledger: &mut AppliedEffectsLedger,
) -> bool {
    let Some(effects) = &scene.effects else {
        return false;
    };
    if !ledger.record(scene_id) {
        return false;
    }

    player.adjust_gold(effects.gold);
    player.adjust_hp(effects.hp);
    for change in &effects.inv {
        match change {
            InventoryChange::Add(item) => player.add_item(item.clone()),
            InventoryChange::Remove(needle) => {
                player.remove_item(needle);
            }
        }
    }
    for flag in &effects.flags {
        flags.set(flag.clone());
    }

    tracing::debug!(scene = scene_id, hp = player.hp, gold = player.gold, "scene effects applied");
    true
}
