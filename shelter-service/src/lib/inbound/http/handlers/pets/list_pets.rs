use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PetData;
use crate::inbound::http::router::AppState;

pub async fn list_pets(State(state): State<AppState>) -> Result<ApiSuccess<Vec<PetData>>, ApiError> {
    state
        .pets
        .list_pets()
        .await
        .map_err(ApiError::from)
        .map(|pets| ApiSuccess::new(StatusCode::OK, pets.iter().map(PetData::from).collect()))
}
