use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::Rating;
use crate::domain::comment::models::UpdateCommentCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let comment_id = CommentId::from_string(&id).map_err(CommentError::from)?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .comments
        .update_comment(&comment_id, &caller.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    rating: Option<i32>,
    comment: Option<String>,
}

impl UpdateCommentRequest {
    fn try_into_command(self) -> Result<UpdateCommentCommand, CommentError> {
        // An explicitly blank comment is rejected rather than stored empty.
        let text = match self.comment {
            Some(c) => {
                let trimmed = c.trim().to_string();
                if trimmed.is_empty() {
                    return Err(CommentError::TextRequired);
                }
                Some(trimmed)
            }
            None => None,
        };

        let rating = self.rating.map(Rating::new).transpose()?;

        Ok(UpdateCommentCommand { rating, text })
    }
}
