use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Unknown email, bad email shape, and wrong password all collapse into
    // the same 403 so the response never reveals which part was wrong.
    let invalid = || ApiError::Forbidden("Invalid Credentials".to_string());

    let email = EmailAddress::new(body.email.unwrap_or_default()).map_err(|_| invalid())?;

    let user = state
        .users
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFound => invalid(),
            other => ApiError::from(other),
        })?;

    let claims = auth::Claims::for_user(user.id, user.role, state.jwt_expiration_hours);

    let result = state
        .authenticator
        .authenticate(
            &body.password.unwrap_or_default(),
            &user.password_hash,
            &claims,
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => invalid(),
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::Internal(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::Internal(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "you are now logged in, nice work".to_string(),
            auth_token: result.access_token,
            user: (&user).into(),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub message: String,
    pub auth_token: String,
    pub user: LoginUserData,
}

/// The projection returned on login: identity fields only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl From<&User> for LoginUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            role: user.role.to_string(),
            status: user.status.to_string(),
        }
    }
}
