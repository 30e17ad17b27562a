//! Ability checks: a d20 plus modifier against a difficulty class.
//!
//! Classification is evaluated in a fixed order:
//!
//! 1. a natural 20 is a critical success, whatever the total,
//! 2. a natural 1 is a critical failure, whatever the total,
//! 3. otherwise the check succeeds iff `total >= dc`.
//!
//! A natural 1 therefore fails even when the modifier would carry the total
//! past the DC.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::dice::roll_d20;

/// The classified result of an ability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Natural 20.
    CriticalSuccess,
    /// Total met the DC.
    Success,
    /// Total fell short of the DC.
    Failure,
    /// Natural 1.
    CriticalFailure,
}

impl Outcome {
    /// Whether the check routes to the success branch.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::Success)
    }

    /// Whether the outcome came from a natural 1 or 20.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::CriticalFailure)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
        }
    }
}

/// Classify a roll.
pub fn classify(raw: u32, total: i32, dc: i32) -> Outcome {
    match raw {
        20 => Outcome::CriticalSuccess,
        1 => Outcome::CriticalFailure,
        _ if total >= dc => Outcome::Success,
        _ => Outcome::Failure,
    }
}

/// A fully resolved ability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The ability tested.
    pub ability: Ability,
    /// The natural d20 face.
    pub raw: u32,
    /// The ability modifier added to the roll.
    pub modifier: i32,
    /// `raw + modifier`.
    pub total: i32,
    /// The difficulty class.
    pub dc: i32,
    /// Classified outcome.
    pub outcome: Outcome,
}

impl CheckResult {
    /// Build a result from an already drawn face.
    pub fn from_roll(ability: Ability, raw: u32, modifier: i32, dc: i32) -> Self {
        let total = i32::try_from(raw).unwrap_or(i32::MAX).saturating_add(modifier);
        Self {
            ability,
            raw,
            modifier,
            total,
            dc,
            outcome: classify(raw, total, dc),
        }
    }

    /// Shorthand for `self.outcome.is_success()`.
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} DC{}: {} {:+} = {} ({})",
            self.ability, self.dc, self.raw, self.modifier, self.total, self.outcome
        )
    }
}

/// Roll a d20 check.
pub fn roll_check<R: Rng + ?Sized>(
    rng: &mut R,
    ability: Ability,
    modifier: i32,
    dc: i32,
) -> CheckResult {
    let raw = roll_d20(rng);
    let result = CheckResult::from_roll(ability, raw, modifier, dc);
    tracing::debug!(%result, "ability check rolled");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn natural_twenty_beats_impossible_dc() {
        let r = CheckResult::from_roll(Ability::Str, 20, -5, 40);
        assert_eq!(r.total, 15);
        assert_eq!(r.outcome, Outcome::CriticalSuccess);
        assert!(r.is_success());
    }

    #[test]
    fn natural_one_fails_even_when_total_passes() {
        let r = CheckResult::from_roll(Ability::Dex, 1, 10, 5);
        assert_eq!(r.total, 11);
        assert_eq!(r.outcome, Outcome::CriticalFailure);
        assert!(!r.is_success());
    }

    #[test]
    fn meeting_dc_exactly_succeeds() {
        assert_eq!(classify(12, 15, 15), Outcome::Success);
        assert_eq!(classify(12, 14, 15), Outcome::Failure);
    }

    #[test]
    fn display() {
        let r = CheckResult::from_roll(Ability::Cha, 7, -1, 10);
        assert_eq!(r.to_string(), "CHA DC10: 7 -1 = 6 (Failure)");
        let r = CheckResult::from_roll(Ability::Dex, 15, 4, 12);
        assert_eq!(r.to_string(), "DEX DC12: 15 +4 = 19 (Success)");
    }

    #[test]
    fn outcome_flags() {
        assert!(Outcome::CriticalSuccess.is_critical());
        assert!(Outcome::CriticalFailure.is_critical());
        assert!(!Outcome::Success.is_critical());
        assert!(!Outcome::Failure.is_success());
    }

    #[test]
    fn seeded_roll_is_consistent() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let ra = roll_check(&mut a, Ability::Wis, 1, 12);
        let rb = roll_check(&mut b, Ability::Wis, 1, 12);
        assert_eq!(ra, rb);
        assert_eq!(ra.total, ra.raw as i32 + 1);
    }

    proptest! {
        #[test]
        fn mid_rolls_succeed_iff_total_meets_dc(raw in 2u32..=19, modifier in -10i32..10, dc in -5i32..40) {
            let r = CheckResult::from_roll(Ability::Str, raw, modifier, dc);
            prop_assert_eq!(r.is_success(), r.total >= dc);
            prop_assert!(!r.outcome.is_critical());
        }

        #[test]
        fn criticals_ignore_total(modifier in -10i32..10, dc in -5i32..40) {
            prop_assert_eq!(
                CheckResult::from_roll(Ability::Str, 20, modifier, dc).outcome,
                Outcome::CriticalSuccess
            );
            prop_assert_eq!(
                CheckResult::from_roll(Ability::Str, 1, modifier, dc).outcome,
                Outcome::CriticalFailure
            );
        }
    }
}
