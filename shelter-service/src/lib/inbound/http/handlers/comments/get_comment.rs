use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentData;
use crate::inbound::http::router::AppState;

pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let comment_id = CommentId::from_string(&id).map_err(CommentError::from)?;

    state
        .comments
        .get_comment(&comment_id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}
