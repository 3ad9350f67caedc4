use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccountStatus;
use crate::domain::user::models::AdminUpdateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AdminUpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = body.try_into_command()?;

    state
        .users
        .admin_update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUpdateUserRequest {
    username: Option<String>,
    email: Option<String>,
    role: Option<String>,
    status: Option<String>,
}

impl AdminUpdateUserRequest {
    fn try_into_command(self) -> Result<AdminUpdateUserCommand, ApiError> {
        let username = self
            .username
            .map(Username::new)
            .transpose()
            .map_err(UserError::from)?;
        let email = self
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(UserError::from)?;
        let role = self
            .role
            .as_deref()
            .map(Role::from_str)
            .transpose()
            .map_err(UserError::from)?;
        let status = self
            .status
            .as_deref()
            .map(AccountStatus::from_str)
            .transpose()
            .map_err(UserError::from)?;

        Ok(AdminUpdateUserCommand {
            username,
            email,
            role,
            status,
        })
    }
}
