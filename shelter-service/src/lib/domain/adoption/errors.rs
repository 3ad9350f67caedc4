use thiserror::Error;

/// Error for AdoptionId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdoptionIdError {
    #[error("Invalid adoption id: {0}")]
    InvalidFormat(String),
}

/// Error for AdoptionStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdoptionStatusError {
    #[error("Invalid adoption status. Must be Pending, Approved, Rejected, or Completed.")]
    Unknown,
}

/// Top-level error for adoption operations
#[derive(Debug, Clone, Error)]
pub enum AdoptionError {
    #[error("Invalid adoption id: {0}")]
    InvalidAdoptionId(#[from] AdoptionIdError),

    #[error("Pet is required")]
    MissingPet,

    #[error("Invalid pet id: {0}")]
    InvalidPetReference(String),

    #[error("Pet not found")]
    PetNotFound,

    #[error("Pet is not available for adoption")]
    PetNotAvailable,

    #[error("You already have an active adoption request for this pet")]
    DuplicateActiveRequest,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
