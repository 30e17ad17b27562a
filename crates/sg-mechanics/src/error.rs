//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An ability code is not one of str, dex, cha, wis, int, con.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// No race with this id exists in the catalog.
    #[error("unknown race: {0}")]
    UnknownRace(String),

    /// No class with this id exists in the catalog.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// The catalog data is malformed.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
