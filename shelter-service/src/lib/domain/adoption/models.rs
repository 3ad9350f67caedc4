use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::adoption::errors::AdoptionIdError;
use crate::domain::adoption::errors::AdoptionStatusError;
use crate::domain::pet::models::Pet;
use crate::domain::pet::models::PetId;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;

/// Adoption request entity linking a user to a pet.
#[derive(Debug, Clone)]
pub struct Adoption {
    pub id: AdoptionId,
    pub user_id: UserId,
    pub pet_id: PetId,
    pub status: AdoptionStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Adoption unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdoptionId(pub Uuid);

impl AdoptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, AdoptionIdError> {
        Uuid::parse_str(s)
            .map(AdoptionId)
            .map_err(|e| AdoptionIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AdoptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdoptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Request lifecycle: Pending -> {Approved, Rejected}; Approved -> Completed.
///
/// Only creation exists in the HTTP surface today; the later transitions
/// have no endpoints, but the stored model covers the full machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdoptionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl AdoptionStatus {
    /// Pending and Approved requests block further requests for the pair.
    pub fn is_active(&self) -> bool {
        matches!(self, AdoptionStatus::Pending | AdoptionStatus::Approved)
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdoptionStatus::Pending => "Pending",
            AdoptionStatus::Approved => "Approved",
            AdoptionStatus::Rejected => "Rejected",
            AdoptionStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

impl FromStr for AdoptionStatus {
    type Err = AdoptionStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(AdoptionStatus::Pending),
            "Approved" => Ok(AdoptionStatus::Approved),
            "Rejected" => Ok(AdoptionStatus::Rejected),
            "Completed" => Ok(AdoptionStatus::Completed),
            _ => Err(AdoptionStatusError::Unknown),
        }
    }
}

/// Adoption joined with its referenced documents for read responses.
#[derive(Debug, Clone)]
pub struct AdoptionDetails {
    pub adoption: Adoption,
    pub user: UserSummary,
    pub pet: Pet,
}

/// Command to file an adoption request.
#[derive(Debug)]
pub struct CreateAdoptionCommand {
    pub pet_id: PetId,
    pub notes: Option<String>,
}
