use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::Gender;
use crate::domain::pet::models::PetId;
use crate::domain::pet::models::PetStatus;
use crate::domain::pet::models::Species;
use crate::domain::pet::models::UpdatePetCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PetData;
use crate::inbound::http::router::AppState;

pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePetRequest>,
) -> Result<ApiSuccess<PetData>, ApiError> {
    let pet_id = PetId::from_string(&id).map_err(PetError::from)?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .pets
        .update_pet(&pet_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref pet| ApiSuccess::new(StatusCode::OK, pet.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePetRequest {
    name: Option<String>,
    species: Option<String>,
    breed: Option<String>,
    age: Option<String>,
    gender: Option<String>,
    status: Option<String>,
    image: Option<String>,
    description: Option<String>,
}

impl UpdatePetRequest {
    fn try_into_command(self) -> Result<UpdatePetCommand, PetError> {
        let species = self.species.as_deref().map(Species::from_str).transpose()?;
        let gender = self.gender.as_deref().map(Gender::from_str).transpose()?;
        let status = self.status.as_deref().map(PetStatus::from_str).transpose()?;

        Ok(UpdatePetCommand {
            name: self.name,
            species,
            breed: self.breed,
            age: self.age,
            gender,
            status,
            image: self.image,
            description: self.description,
        })
    }
}
