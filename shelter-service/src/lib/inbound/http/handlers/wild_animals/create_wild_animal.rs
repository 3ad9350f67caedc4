use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::Condition;
use crate::domain::wild_animal::models::CreateWildAnimalCommand;
use crate::domain::wild_animal::models::RescueStatus;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::WildAnimalData;
use crate::inbound::http::router::AppState;

pub async fn create_wild_animal(
    State(state): State<AppState>,
    Json(body): Json<CreateWildAnimalRequest>,
) -> Result<ApiSuccess<WildAnimalData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .wild_animals
        .create_wild_animal(command)
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::CREATED, animal.into()))
}

/// HTTP request body for opening a rescue case (raw JSON).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWildAnimalRequest {
    name: Option<String>,
    species: Option<String>,
    rescue_date: Option<DateTime<Utc>>,
    location: Option<String>,
    condition: Option<String>,
    injury_type: Option<String>,
    status: Option<String>,
    image: Option<String>,
    notes: Option<String>,
}

impl CreateWildAnimalRequest {
    fn try_into_command(self) -> Result<CreateWildAnimalCommand, WildAnimalError> {
        let name = required(self.name, "Name")?;
        let species = required(self.species, "Species")?;
        let location = required(self.location, "Location")?;
        let injury_type = required(self.injury_type, "Injury type")?;

        let condition = self
            .condition
            .as_deref()
            .map(Condition::from_str)
            .transpose()?
            .unwrap_or_default();
        let status = self
            .status
            .as_deref()
            .map(RescueStatus::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(CreateWildAnimalCommand {
            name,
            species,
            rescue_date: self.rescue_date,
            location,
            condition,
            injury_type,
            status,
            image: self.image,
            notes: self.notes,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, WildAnimalError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(WildAnimalError::MissingField(field))
}
