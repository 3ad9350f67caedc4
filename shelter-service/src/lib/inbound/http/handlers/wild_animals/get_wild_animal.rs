use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::WildAnimalId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::WildAnimalData;
use crate::inbound::http::router::AppState;

pub async fn get_wild_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<WildAnimalData>, ApiError> {
    let animal_id = WildAnimalId::from_string(&id).map_err(WildAnimalError::from)?;

    state
        .wild_animals
        .get_wild_animal(&animal_id)
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::OK, animal.into()))
}
