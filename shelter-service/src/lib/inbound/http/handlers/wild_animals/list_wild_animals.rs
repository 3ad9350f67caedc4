use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::WildAnimalData;
use crate::inbound::http::router::AppState;

pub async fn list_wild_animals(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<WildAnimalData>>, ApiError> {
    state
        .wild_animals
        .list_wild_animals()
        .await
        .map_err(ApiError::from)
        .map(|animals| {
            ApiSuccess::new(
                StatusCode::OK,
                animals.iter().map(WildAnimalData::from).collect(),
            )
        })
}
