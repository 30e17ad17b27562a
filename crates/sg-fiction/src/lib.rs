//! Scene resolution engine for Sagenweg.
//!
//! Drives a player through a branching adventure graph loaded from JSON:
//! applies one-time scene effects, filters choices by their requirements,
//! resolves d20 checks through `sg-mechanics`, detects death, victory and
//! defeat, and persists progress to a single save slot.

/// Character creation.
pub mod character;
/// Engine configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Token substitution in scene text.
pub mod narrator;
/// Player state and flags.
pub mod player;
/// Save records and save slot storage.
pub mod save;
/// Adventure graph: scenes, choices, requirements, effects.
pub mod scene;
/// Game session state machine.
pub mod session;
/// Loading adventures by reference.
pub mod source;

pub use character::{Character, CharacterDraft};
pub use config::EngineConfig;
pub use error::{FictionError, FictionResult};
pub use player::{FlagSet, PlayerState};
pub use save::{FileStore, MemoryStore, SaveRecord, SaveStore};
pub use scene::{Adventure, AppliedEffectsLedger, ChoiceDefinition, SceneDefinition};
pub use session::{ChoiceOutcome, ChoiceView, Ending, GameSession, PendingCheck, SceneView};
pub use source::{AdventureSource, DirectorySource, MemorySource};
