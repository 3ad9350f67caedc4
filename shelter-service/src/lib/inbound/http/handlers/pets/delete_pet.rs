use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::PetId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;

pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let pet_id = PetId::from_string(&id).map_err(PetError::from)?;

    state
        .pets
        .delete_pet(&pet_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponse::new("Pet deleted successfully"),
            )
        })
}
