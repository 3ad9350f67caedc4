use thiserror::Error;

/// Error for WildAnimalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WildAnimalIdError {
    #[error("Invalid wild animal id: {0}")]
    InvalidFormat(String),
}

/// Error for Condition parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Invalid condition. Must be Critical, Stable, or Good.")]
    Unknown,
}

/// Error for RescueStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RescueStatusError {
    #[error(
        "Invalid rescue status. Must be Under Treatment, Recovering, Ready for Release, or Released."
    )]
    Unknown,
}

/// Top-level error for wild animal rescue case operations
#[derive(Debug, Clone, Error)]
pub enum WildAnimalError {
    #[error("Invalid wild animal id: {0}")]
    InvalidWildAnimalId(#[from] WildAnimalIdError),

    #[error("{0}")]
    InvalidCondition(#[from] ConditionError),

    #[error("{0}")]
    InvalidStatus(#[from] RescueStatusError),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Wild animal not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
