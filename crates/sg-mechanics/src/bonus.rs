//! Bonus annotations embedded in item names.
//!
//! An item such as `"Elven Cloak (+2 dex)"` grants +2 dexterity while it is
//! carried. Annotations are case-insensitive, may repeat, and add up per
//! ability.

use std::sync::LazyLock;

use regex::Regex;

use crate::ability::{Ability, AbilityScores};

static BONUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\+(\d+)\s*(str|dex|cha|wis|int|con)\)").expect("valid bonus pattern")
});

static ANNOTATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\([^)]*\)").expect("valid annotation pattern")
});

/// Parse all bonus annotations in one item name.
pub fn parse_item_bonuses(item: &str) -> AbilityScores {
    let mut totals = AbilityScores::new();
    for caps in BONUS_PATTERN.captures_iter(item) {
        // The pattern only admits digits, so parsing fails only on overflow.
        let value = caps[1].parse::<i32>().unwrap_or(i32::MAX);
        let Ok(ability) = caps[2].parse::<Ability>() else {
            continue;
        };
        let current = totals.get(ability).unwrap_or(0);
        totals = totals.with(ability, current.saturating_add(value));
    }
    totals
}

/// Sum of one ability's bonuses across a whole inventory.
pub fn inventory_bonus<S: AsRef<str>>(inventory: &[S], ability: Ability) -> i32 {
    inventory
        .iter()
        .filter_map(|item| parse_item_bonuses(item.as_ref()).get(ability))
        .fold(0, i32::saturating_add)
}

/// Bonuses of a single item as display pairs, e.g. `[(Dex, 2)]`.
pub fn item_bonuses(item: &str) -> Vec<(Ability, i32)> {
    parse_item_bonuses(item).iter().collect()
}

/// Strip every parenthesized annotation from an item name.
pub fn clean_item_name(item: &str) -> String {
    ANNOTATION_PATTERN.replace_all(item, "").trim().to_string()
}
