use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccountStatus;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .users
        .signup(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering an account (raw JSON).
///
/// Everything outside this allow-list is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
    status: Option<String>,
    profile_picture: Option<String>,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, ApiError> {
        let username =
            Username::new(self.username.unwrap_or_default()).map_err(UserError::from)?;
        let email =
            EmailAddress::new(self.email.unwrap_or_default()).map_err(UserError::from)?;

        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

        let role = self
            .role
            .as_deref()
            .map(Role::from_str)
            .transpose()
            .map_err(UserError::from)?
            .unwrap_or_default();

        let status = self
            .status
            .as_deref()
            .map(AccountStatus::from_str)
            .transpose()
            .map_err(UserError::from)?
            .unwrap_or_default();

        Ok(SignupCommand {
            username,
            email,
            password,
            role,
            status,
            profile_picture: self.profile_picture,
        })
    }
}
