//! Save records and the save slot.
//!
//! A [`SaveRecord`] is the persisted snapshot of a playthrough. Records are
//! tagged with [`SAVE_VERSION`]; a record with any other version is
//! discarded rather than migrated.

mod store;

pub use store::{FileStore, MemoryStore, SaveStore, StoreError, StoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::{FlagSet, PlayerState};
use crate::scene::AppliedEffectsLedger;

/// Current save format version. Bumping it invalidates every older save.
pub const SAVE_VERSION: u32 = 5;

/// Why a stored payload could not be used.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The record was written by a different engine version.
    #[error("save version {found} does not match {expected}")]
    VersionMismatch {
        /// Version found in the record.
        found: u32,
        /// Version the engine expects.
        expected: u32,
    },

    /// The payload is not a valid record.
    #[error("corrupt save: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Character selections needed to rebuild stats on resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCharacter {
    /// Character name.
    pub name: String,
    /// Catalog race id.
    pub race_id: Option<String>,
    /// Catalog class id.
    pub class_id: Option<String>,
}

/// A persisted snapshot of a playthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Format version.
    pub version: u32,
    /// Player state.
    pub player: PlayerState,
    /// Story flags.
    pub flags: FlagSet,
    /// Current scene id.
    pub scene_id: String,
    /// Reference the adventure was loaded from.
    pub adventure_ref: String,
    /// Adventure title, for "continue" summaries.
    pub adventure_title: String,
    /// Total play time in milliseconds.
    pub elapsed_ms: u64,
    /// Scenes whose effects already fired.
    pub applied_effects: AppliedEffectsLedger,
    /// Character selections.
    pub character: SavedCharacter,
    /// When the record was written.
    pub saved_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl SaveRecord {
    /// Serialize to the stored payload.
    pub fn encode(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored payload, rejecting any version but `expected`.
    ///
    /// The version is checked before the rest of the record, so an old
    /// record with a different shape still reports a version mismatch.
    pub fn decode(payload: &str, expected: u32) -> Result<Self, SaveError> {
        let probe: VersionProbe = serde_json::from_str(payload)?;
        if probe.version != expected {
            return Err(SaveError::VersionMismatch {
                found: probe.version,
                expected,
            });
        }
        Ok(serde_json::from_str(payload)?)
    }
}

/// Read and decode the slot. Corrupt or outdated records are cleared.
pub fn peek_save<S: SaveStore + ?Sized>(store: &mut S, expected: u32) -> Option<SaveRecord> {
    let payload = match store.read() {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read save slot");
            return None;
        }
    };

    match SaveRecord::decode(&payload, expected) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unusable save");
            discard_save(store);
            None
        }
    }
}

/// Clear the slot, logging failures.
pub fn discard_save<S: SaveStore + ?Sized>(store: &mut S) {
    if let Err(e) = store.clear() {
        tracing::error!(error = %e, "could not clear save slot");
    }
}

/// Format play time as `m:ss`.
pub fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Describe how long ago a save was written.
pub fn format_saved_ago(saved_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(saved_at);
    let mins = diff.num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return format!("{mins} min ago");
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{hours} h ago");
    }
    format!("{} d ago", diff.num_days())
}
