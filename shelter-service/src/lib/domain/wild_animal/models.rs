use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::wild_animal::errors::ConditionError;
use crate::domain::wild_animal::errors::RescueStatusError;
use crate::domain::wild_animal::errors::WildAnimalIdError;

/// Wild-animal rescue case entity.
///
/// Independent lifecycle; nothing else in the system references it.
/// `species` is free-form here, unlike pet listings.
#[derive(Debug, Clone)]
pub struct WildAnimal {
    pub id: WildAnimalId,
    pub name: String,
    pub species: String,
    pub rescue_date: DateTime<Utc>,
    pub location: String,
    pub condition: Condition,
    pub injury_type: String,
    pub status: RescueStatus,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wild animal unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WildAnimalId(pub Uuid);

impl WildAnimalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, WildAnimalIdError> {
        Uuid::parse_str(s)
            .map(WildAnimalId)
            .map_err(|e| WildAnimalIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for WildAnimalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WildAnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Medical condition at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    Critical,
    #[default]
    Stable,
    Good,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Critical => "Critical",
            Condition::Stable => "Stable",
            Condition::Good => "Good",
        };
        f.write_str(s)
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(Condition::Critical),
            "Stable" => Ok(Condition::Stable),
            "Good" => Ok(Condition::Good),
            _ => Err(ConditionError::Unknown),
        }
    }
}

/// Rehabilitation stage. The display strings are the wire values,
/// multi-word variants included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RescueStatus {
    #[default]
    UnderTreatment,
    Recovering,
    ReadyForRelease,
    Released,
}

impl fmt::Display for RescueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RescueStatus::UnderTreatment => "Under Treatment",
            RescueStatus::Recovering => "Recovering",
            RescueStatus::ReadyForRelease => "Ready for Release",
            RescueStatus::Released => "Released",
        };
        f.write_str(s)
    }
}

impl FromStr for RescueStatus {
    type Err = RescueStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Under Treatment" => Ok(RescueStatus::UnderTreatment),
            "Recovering" => Ok(RescueStatus::Recovering),
            "Ready for Release" => Ok(RescueStatus::ReadyForRelease),
            "Released" => Ok(RescueStatus::Released),
            _ => Err(RescueStatusError::Unknown),
        }
    }
}

/// Command to open a rescue case; `rescue_date` defaults to now upstream.
#[derive(Debug)]
pub struct CreateWildAnimalCommand {
    pub name: String,
    pub species: String,
    pub rescue_date: Option<DateTime<Utc>>,
    pub location: String,
    pub condition: Condition,
    pub injury_type: String,
    pub status: RescueStatus,
    pub image: Option<String>,
    pub notes: Option<String>,
}

/// Partial update of a rescue case.
#[derive(Debug, Default)]
pub struct UpdateWildAnimalCommand {
    pub name: Option<String>,
    pub species: Option<String>,
    pub rescue_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub condition: Option<Condition>,
    pub injury_type: Option<String>,
    pub status: Option<RescueStatus>,
    pub image: Option<String>,
    pub notes: Option<String>,
}
