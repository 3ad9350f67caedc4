use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Decoded claims attached to the request after the authenticated gate.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Authenticated gate: requires `Authorization: Bearer <token>` with a valid
/// signature and unexpired claims, then attaches them to the request.
pub async fn authenticated(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("token validation failed: {}", e);
        forbidden("Invalid Token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!("token carried unparseable subject: {}", e);
        forbidden("Invalid Token")
    })?;

    let role: Role = claims.role.parse().map_err(|_| {
        tracing::warn!(role = %claims.role, "token carried unknown role");
        forbidden("Invalid Token")
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, role });

    Ok(next.run(req).await)
}

/// Admin gate: must run after `authenticated`. Re-reads the user on every
/// call rather than trusting the token's role claim.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let caller = req
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| forbidden("Invalid Token"))?;

    let user = state.users.get_user(&caller.user_id).await.map_err(|e| {
        match e {
            UserError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "errorMessage": "User not found" })),
            )
                .into_response(),
            other => {
                tracing::error!("admin check failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "errorMessage": "Error checking admin status" })),
                )
                    .into_response()
            }
        }
    })?;

    if !user.role.is_admin() {
        return Err(forbidden("Access denied. Admin privileges required."));
    }

    Ok(next.run(req).await)
}

fn forbidden(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "errorMessage": message })),
    )
        .into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| forbidden("Headers Malformed"))?;

    let value = header.to_str().map_err(|_| forbidden("Headers Malformed"))?;

    // Exact `Bearer <token>` shape; anything else is a malformed header,
    // not an invalid token.
    match value.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err(forbidden("Headers Malformed")),
    }
}
