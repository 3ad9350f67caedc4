use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::Condition;
use crate::domain::wild_animal::models::RescueStatus;
use crate::domain::wild_animal::models::UpdateWildAnimalCommand;
use crate::domain::wild_animal::models::WildAnimalId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::WildAnimalData;
use crate::inbound::http::router::AppState;

pub async fn update_wild_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateWildAnimalRequest>,
) -> Result<ApiSuccess<WildAnimalData>, ApiError> {
    let animal_id = WildAnimalId::from_string(&id).map_err(WildAnimalError::from)?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .wild_animals
        .update_wild_animal(&animal_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::OK, animal.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWildAnimalRequest {
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

impl UpdateWildAnimalRequest {
    fn try_into_command(self) -> Result<UpdateWildAnimalCommand, WildAnimalError> {
        let condition = self
            .condition
            .as_deref()
            .map(Condition::from_str)
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .map(RescueStatus::from_str)
            .transpose()?;

        Ok(UpdateWildAnimalCommand {
            name: self.name,
            species: self.species,
            rescue_date: self.rescue_date,
            location: self.location,
            condition,
            injury_type: self.injury_type,
            status,
            image: self.image,
            notes: self.notes,
        })
    }
}
