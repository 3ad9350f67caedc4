use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentData;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    state
        .comments
        .list_comments()
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            ApiSuccess::new(
                StatusCode::OK,
                comments.iter().map(CommentData::from).collect(),
            )
        })
}
