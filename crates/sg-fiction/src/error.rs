//! Error types for the fiction engine.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while playing an adventure.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The adventure could not be fetched or decoded.
    #[error("failed to load adventure '{reference}': {reason}")]
    LoadFailure {
        /// The reference that was requested.
        reference: String,
        /// What went wrong.
        reason: String,
    },

    /// The adventure data is structurally invalid.
    #[error("invalid adventure: {0}")]
    InvalidAdventure(String),

    /// A requirement string could not be parsed.
    #[error("invalid requirement: {0}")]
    InvalidRequirement(String),

    /// No choice exists at this index in the current scene.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// The choice exists but its requirements are not met.
    #[error("choice {0} is not available")]
    ChoiceUnavailable(usize),

    /// A check is rolling; it must be committed first.
    #[error("a check is awaiting its outcome")]
    AwaitingOutcome,

    /// `commit` was called with no check in flight.
    #[error("no check is awaiting an outcome")]
    NoPendingCheck,

    /// The playthrough reached victory or defeat.
    #[error("the adventure is over")]
    PlaythroughOver,

    /// The character draft is missing something.
    #[error("incomplete character: {0}")]
    IncompleteCharacter(String),

    /// Mechanics error.
    #[error(transparent)]
    Mechanics(#[from] sg_mechanics::MechError),
}
