use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::errors::AccountStatusError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccountStatus;
use crate::domain::user::models::AdminUpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

pub async fn update_user_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserStatusRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    let status = body
        .status
        .as_deref()
        .map(AccountStatus::from_str)
        .transpose()
        .map_err(UserError::from)?
        .ok_or_else(|| UserError::from(AccountStatusError::Unknown))
        .map_err(ApiError::from)?;

    let command = AdminUpdateUserCommand {
        username: None,
        email: None,
        role: None,
        status: Some(status),
    };

    state
        .users
        .admin_update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserStatusRequest {
    status: Option<String>,
}
