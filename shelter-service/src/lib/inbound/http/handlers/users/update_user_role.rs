use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AdminUpdateUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

pub async fn update_user_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRoleRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    let role = body
        .role
        .as_deref()
        .map(Role::from_str)
        .transpose()
        .map_err(UserError::from)?
        .ok_or_else(|| UserError::from(RoleError::Unknown))
        .map_err(ApiError::from)?;

    let command = AdminUpdateUserCommand {
        username: None,
        email: None,
        role: Some(role),
        status: None,
    };

    state
        .users
        .admin_update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRoleRequest {
    role: Option<String>,
}
