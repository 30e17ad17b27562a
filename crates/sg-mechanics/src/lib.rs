//! Game mechanics for Sagenweg.
//!
//! Provides the six abilities, the race and class catalog, item bonus
//! annotations, derived ability scores and modifiers, and d20 ability checks
//! with critical rules. Randomness is confined to [`dice`]; everything else
//! is pure.

pub mod ability;
pub mod bonus;
pub mod catalog;
pub mod check;
pub mod dice;
pub mod error;
pub mod stats;

pub use ability::{Ability, AbilityScores};
pub use bonus::{clean_item_name, item_bonuses, parse_item_bonuses};
pub use catalog::{Catalog, ClassDefinition, RaceDefinition};
pub use check::{CheckResult, Outcome, classify, roll_check};
pub use dice::{RevealFrame, RevealSchedule, roll_d20};
pub use error::{MechError, MechResult};
pub use stats::{StatSources, modifier_for};
