//! Player state management.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The player's mutable state during a playthrough.
///
/// Holds `0 <= hp <= max_hp` at all times; the adjust methods clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Character name.
    pub name: String,
    /// Race display name.
    pub race: String,
    /// Class display name.
    pub class: String,
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Gold pieces.
    pub gold: u32,
    /// Carried item descriptors, in pickup order.
    pub inventory: Vec<String>,
}

impl PlayerState {
    /// Create a player at full health with no gold or items.
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        class: impl Into<String>,
        max_hp: i32,
    ) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            race: race.into(),
            class: class.into(),
            hp: max_hp,
            max_hp,
            gold: 0,
            inventory: Vec::new(),
        }
    }

    /// Add (or with a negative delta, subtract) gold. Never drops below 0.
    pub fn adjust_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add_signed(delta);
    }

    /// Add or subtract hit points, clamped into `[0, max_hp]`.
    pub fn adjust_hp(&mut self, delta: i32) {
        self.hp = self.hp.saturating_add(delta).clamp(0, self.max_hp);
    }

    /// Whether hit points have run out.
    pub fn is_down(&self) -> bool {
        self.hp <= 0
    }

    /// Whether any item's text contains `needle`.
    pub fn has_item(&self, needle: &str) -> bool {
        self.inventory.iter().any(|item| item.contains(needle))
    }

    /// Append an item.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first item whose text contains `needle`.
    pub fn remove_item(&mut self, needle: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|item| item.contains(needle)) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}

/// Story flags set during a playthrough. A flag is either present or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(BTreeSet<String>);

impl FlagSet {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the flag is set.
    pub fn has(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    /// Set a flag.
    pub fn set(&mut self, flag: impl Into<String>) {
        self.0.insert(flag.into());
    }

    /// Number of flags set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no flags are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over set flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
