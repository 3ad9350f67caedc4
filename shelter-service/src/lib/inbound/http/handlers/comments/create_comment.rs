use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::models::Rating;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .comments
        .create_comment(&caller.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::CREATED, details.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    rating: Option<i32>,
    comment: Option<String>,
}

impl CreateCommentRequest {
    fn try_into_command(self) -> Result<CreateCommentCommand, CommentError> {
        let text = self
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(CommentError::TextRequired)?;

        let rating = self
            .rating
            .map(Rating::new)
            .transpose()?
            .unwrap_or_default();

        Ok(CreateCommentCommand { rating, text })
    }
}
