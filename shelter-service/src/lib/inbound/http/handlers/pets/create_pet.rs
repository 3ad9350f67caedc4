use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::CreatePetCommand;
use crate::domain::pet::models::Gender;
use crate::domain::pet::models::PetStatus;
use crate::domain::pet::models::Species;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PetData;
use crate::inbound::http::router::AppState;

pub async fn create_pet(
    State(state): State<AppState>,
    Json(body): Json<CreatePetRequest>,
) -> Result<ApiSuccess<PetData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .pets
        .create_pet(command)
        .await
        .map_err(ApiError::from)
        .map(|ref pet| ApiSuccess::new(StatusCode::CREATED, pet.into()))
}

/// HTTP request body for creating a listing (raw JSON).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePetRequest {
    name: Option<String>,
    species: Option<String>,
    breed: Option<String>,
    age: Option<String>,
    gender: Option<String>,
    status: Option<String>,
    image: Option<String>,
    description: Option<String>,
}

impl CreatePetRequest {
    fn try_into_command(self) -> Result<CreatePetCommand, PetError> {
        let name = required(self.name, "Name")?;
        let breed = required(self.breed, "Breed")?;
        let age = required(self.age, "Age")?;

        let species = self
            .species
            .as_deref()
            .map(Species::from_str)
            .transpose()?
            .unwrap_or_default();
        let gender = self
            .gender
            .as_deref()
            .map(Gender::from_str)
            .transpose()?
            .unwrap_or_default();
        let status = self
            .status
            .as_deref()
            .map(PetStatus::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(CreatePetCommand {
            name,
            species,
            breed,
            age,
            gender,
            status,
            image: self.image,
            description: self.description,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, PetError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(PetError::MissingField(field))
}
