use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::CreateAdoptionCommand;
use crate::domain::pet::models::PetId;
use crate::inbound::http::handlers::AdoptionData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_adoption(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAdoptionRequest>,
) -> Result<ApiSuccess<AdoptionData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .adoptions
        .create_adoption(&caller.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::CREATED, details.into()))
}

/// HTTP request body for filing an adoption request (raw JSON).
///
/// `pet` carries the target pet's id, matching the reference field name on
/// the stored document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdoptionRequest {
    pet: Option<String>,
    notes: Option<String>,
}

impl CreateAdoptionRequest {
    fn try_into_command(self) -> Result<CreateAdoptionCommand, AdoptionError> {
        let pet = self.pet.ok_or(AdoptionError::MissingPet)?;
        let pet_id = PetId::from_string(&pet)
            .map_err(|e| AdoptionError::InvalidPetReference(e.to_string()))?;

        Ok(CreateAdoptionCommand {
            pet_id,
            notes: self.notes,
        })
    }
}
