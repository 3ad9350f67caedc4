use thiserror::Error;

/// Error for PetId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PetIdError {
    #[error("Invalid pet id: {0}")]
    InvalidFormat(String),
}

/// Error for Species parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeciesError {
    #[error("Invalid species. Must be Dog, Cat, Bird, Rabbit, or Other.")]
    Unknown,
}

/// Error for Gender parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenderError {
    #[error("Invalid gender. Must be Male or Female.")]
    Unknown,
}

/// Error for PetStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PetStatusError {
    #[error("Invalid pet status. Must be Available, Pending, or Adopted.")]
    Unknown,
}

/// Top-level error for pet operations
#[derive(Debug, Clone, Error)]
pub enum PetError {
    #[error("Invalid pet id: {0}")]
    InvalidPetId(#[from] PetIdError),

    #[error("{0}")]
    InvalidSpecies(#[from] SpeciesError),

    #[error("{0}")]
    InvalidGender(#[from] GenderError),

    #[error("{0}")]
    InvalidStatus(#[from] PetStatusError),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Pet not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
