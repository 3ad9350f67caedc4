use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::pet::errors::GenderError;
use crate::domain::pet::errors::PetIdError;
use crate::domain::pet::errors::PetStatusError;
use crate::domain::pet::errors::SpeciesError;

/// Pet listing entity.
///
/// `age` is free-form text ("2 years", "6 months") as entered by staff.
#[derive(Debug, Clone)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: String,
    pub gender: Gender,
    pub status: PetStatus,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pet unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetId(pub Uuid);

impl PetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, PetIdError> {
        Uuid::parse_str(s)
            .map(PetId)
            .map_err(|e| PetIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Bird => "Bird",
            Species::Rabbit => "Rabbit",
            Species::Other => "Other",
        };
        f.write_str(s)
    }
}

impl FromStr for Species {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dog" => Ok(Species::Dog),
            "Cat" => Ok(Species::Cat),
            "Bird" => Ok(Species::Bird),
            "Rabbit" => Ok(Species::Rabbit),
            "Other" => Ok(Species::Other),
            _ => Err(SpeciesError::Unknown),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        };
        f.write_str(s)
    }
}

impl FromStr for Gender {
    type Err = GenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(GenderError::Unknown),
        }
    }
}

/// Adoption pipeline position of a listing.
///
/// `Pending` is the only state set by a workflow other than direct edit:
/// adoption creation reserves the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetStatus {
    #[default]
    Available,
    Pending,
    Adopted,
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PetStatus::Available => "Available",
            PetStatus::Pending => "Pending",
            PetStatus::Adopted => "Adopted",
        };
        f.write_str(s)
    }
}

impl FromStr for PetStatus {
    type Err = PetStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(PetStatus::Available),
            "Pending" => Ok(PetStatus::Pending),
            "Adopted" => Ok(PetStatus::Adopted),
            _ => Err(PetStatusError::Unknown),
        }
    }
}

/// Command to create a listing; enum fields fall back to their defaults.
#[derive(Debug)]
pub struct CreatePetCommand {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: String,
    pub gender: Gender,
    pub status: PetStatus,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Partial update of a listing.
#[derive(Debug, Default)]
pub struct UpdatePetCommand {
    pub name: Option<String>,
    pub species: Option<Species>,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub status: Option<PetStatus>,
    pub image: Option<String>,
    pub description: Option<String>,
}
