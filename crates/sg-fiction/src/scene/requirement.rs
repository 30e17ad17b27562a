//! Requirements gating a choice's visibility.
//!
//! Requirement strings are parsed once when the adventure is loaded:
//!
//! | string      | meaning                               |
//! |-------------|---------------------------------------|
//! | `!flag`     | flag is not set                       |
//! | `inv:text`  | some item contains `text`             |
//! | `gold:N`    | gold is at least `N`                  |
//! | `flag`      | flag is set                           |
//!
//! Prefixes are checked in that order, so `!inv:x` negates a flag literally
//! named `inv:x`.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::FictionError;
use crate::player::{FlagSet, PlayerState};

/// A single parsed requirement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Requirement {
    /// A flag must be set.
    Flag(String),
    /// Some inventory item must contain this text (case-sensitive).
    Item(String),
    /// Gold must be at least this amount.
    Gold(i64),
    /// Logical NOT.
    Not(Box<Requirement>),
}

impl Requirement {
    /// Evaluate against the current player state.
    pub fn evaluate(&self, player: &PlayerState, flags: &FlagSet) -> bool {
        match self {
            Requirement::Flag(flag) => flags.has(flag),
            Requirement::Item(needle) => player.has_item(needle),
            Requirement::Gold(amount) => i64::from(player.gold) >= *amount,
            Requirement::Not(inner) => !inner.evaluate(player, flags),
        }
    }
}

impl FromStr for Requirement {
    type Err = FictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(flag) = s.strip_prefix('!') {
            return Ok(Requirement::Not(Box::new(Requirement::Flag(
                flag.to_string(),
            ))));
        }
        if let Some(item) = s.strip_prefix("inv:") {
            return Ok(Requirement::Item(item.to_string()));
        }
        if let Some(amount) = s.strip_prefix("gold:") {
            return amount
                .trim()
                .parse::<i64>()
                .map(Requirement::Gold)
                .map_err(|_| FictionError::InvalidRequirement(format!("bad gold amount in '{s}'")));
        }
        if s.is_empty() {
            return Err(FictionError::InvalidRequirement(
                "empty requirement".to_string(),
            ));
        }
        Ok(Requirement::Flag(s.to_string()))
    }
}

impl TryFrom<String> for Requirement {
    type Error = FictionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Flag(flag) => write!(f, "{flag}"),
            Requirement::Item(item) => write!(f, "inv:{item}"),
            Requirement::Gold(amount) => write!(f, "gold:{amount}"),
            Requirement::Not(inner) => write!(f, "!{inner}"),
        }
    }
}

/// All requirements of a choice; every one must hold.
///
/// Deserializes from a single string or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements(Vec<Requirement>);

impl Requirements {
    /// Wrap a list of requirements.
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self(requirements)
    }

    /// Whether every requirement holds. An empty list always holds.
    pub fn is_satisfied(&self, player: &PlayerState, flags: &FlagSet) -> bool {
        self.0.iter().all(|r| r.evaluate(player, flags))
    }

    /// The individual requirements.
    pub fn as_slice(&self) -> &[Requirement] {
        &self.0
    }

    /// Whether there are no requirements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Requirements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(Requirement),
            Many(Vec<Requirement>),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(r) => Self(vec![r]),
            OneOrMany::Many(rs) => Self(rs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(s: &str) -> Requirement {
        s.parse().unwrap()
    }

    fn reqs(list: &[&str]) -> Requirements {
        Requirements::new(list.iter().map(|s| req(s)).collect())
    }

    #[test]
    fn parse_each_form() {
        assert_eq!(req("met_guard"), Requirement::Flag("met_guard".into()));
        assert_eq!(
            req("!met_guard"),
            Requirement::Not(Box::new(Requirement::Flag("met_guard".into())))
        );
        assert_eq!(req("inv:Key"), Requirement::Item("Key".into()));
        assert_eq!(req("gold:10"), Requirement::Gold(10));
    }

    #[test]
    fn negation_takes_precedence() {
        assert_eq!(
            req("!inv:Key"),
            Requirement::Not(Box::new(Requirement::Flag("inv:Key".into())))
        );
    }

    #[test]
    fn bad_gold_rejected() {
        assert!("gold:lots".parse::<Requirement>().is_err());
        assert!("".parse::<Requirement>().is_err());
    }

    #[test]
    fn display_round_trips_grammar() {
        for s in ["flag", "!flag", "inv:Old Map", "gold:25"] {
            assert_eq!(req(s).to_string(), s);
        }
    }

    #[test]
    fn and_semantics() {
        let mut player = PlayerState::new("A", "Human", "Bard", 10);
        let mut flags = FlagSet::new();
        let r = reqs(&["flagA", "gold:10"]);

        assert!(!r.is_satisfied(&player, &flags));
        flags.set("flagA");
        assert!(!r.is_satisfied(&player, &flags));
        player.adjust_gold(10);
        assert!(r.is_satisfied(&player, &flags));
    }

    #[test]
    fn negated_flag() {
        let player = PlayerState::new("A", "Human", "Bard", 10);
        let mut flags = FlagSet::new();
        let r = reqs(&["!flagB"]);
        assert!(r.is_satisfied(&player, &flags));
        flags.set("flagB");
        assert!(!r.is_satisfied(&player, &flags));
    }

    #[test]
    fn inventory_substring() {
        let mut player = PlayerState::new("A", "Human", "Bard", 10);
        let flags = FlagSet::new();
        let r = reqs(&["inv:Elven Cloak"]);
        assert!(!r.is_satisfied(&player, &flags));
        player.add_item("Elven Cloak (+2 dex)");
        assert!(r.is_satisfied(&player, &flags));
    }

    #[test]
    fn empty_always_satisfied() {
        let player = PlayerState::new("A", "Human", "Bard", 10);
        assert!(Requirements::default().is_satisfied(&player, &FlagSet::new()));
    }

    #[test]
    fn deserialize_one_or_many() {
        let one: Requirements = serde_json::from_str(r#""!flagB""#).unwrap();
        assert_eq!(one.as_slice().len(), 1);
        let many: Requirements = serde_json::from_str(r#"["flagA", "gold:10"]"#).unwrap();
        assert_eq!(many.as_slice()[1], Requirement::Gold(10));
        assert!(serde_json::from_str::<Requirements>(r#""gold:x""#).is_err());
    }
}
