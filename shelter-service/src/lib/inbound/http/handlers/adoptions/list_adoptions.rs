use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::AdoptionData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_adoptions(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AdoptionData>>, ApiError> {
    state
        .adoptions
        .list_adoptions()
        .await
        .map_err(ApiError::from)
        .map(|adoptions| {
            ApiSuccess::new(
                StatusCode::OK,
                adoptions.iter().map(AdoptionData::from).collect(),
            )
        })
}
