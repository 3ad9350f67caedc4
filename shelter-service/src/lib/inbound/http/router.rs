use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::adoptions::create_adoption::create_adoption;
use super::handlers::adoptions::list_adoptions::list_adoptions;
use super::handlers::auth::login::login;
use super::handlers::auth::signup::signup;
use super::handlers::auth::update_profile::update_profile;
use super::handlers::auth::verify::verify;
use super::handlers::comments::create_comment::create_comment;
use super::handlers::comments::delete_comment::delete_comment;
use super::handlers::comments::get_comment::get_comment;
use super::handlers::comments::list_comments::list_comments;
use super::handlers::comments::update_comment::update_comment;
use super::handlers::pets::create_pet::create_pet;
use super::handlers::pets::delete_pet::delete_pet;
use super::handlers::pets::get_pet::get_pet;
use super::handlers::pets::list_pets::list_pets;
use super::handlers::pets::update_pet::update_pet;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::list_users::list_users;
use super::handlers::users::update_user::update_user;
use super::handlers::users::update_user_role::update_user_role;
use super::handlers::users::update_user_status::update_user_status;
use super::handlers::wild_animals::create_wild_animal::create_wild_animal;
use super::handlers::wild_animals::delete_wild_animal::delete_wild_animal;
use super::handlers::wild_animals::get_wild_animal::get_wild_animal;
use super::handlers::wild_animals::list_wild_animals::list_wild_animals;
use super::handlers::wild_animals::update_wild_animal::update_wild_animal;
use super::middleware::authenticated;
use super::middleware::require_admin;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::pet::ports::PetServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::domain::wild_animal::ports::WildAnimalServicePort;

/// Shared application state injected into every handler.
///
/// Services are stored behind their ports so the same router runs against
/// Postgres in production and in-memory doubles in the black-box tests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserServicePort>,
    pub pets: Arc<dyn PetServicePort>,
    pub wild_animals: Arc<dyn WildAnimalServicePort>,
    pub adoptions: Arc<dyn AdoptionServicePort>,
    pub comments: Arc<dyn CommentServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/user", get(list_users))
        .route("/api/pets", get(list_pets))
        .route("/api/pets/:id", get(get_pet))
        .route("/api/wild-animals", get(list_wild_animals))
        .route("/api/wild-animals/:id", get(get_wild_animal))
        .route("/api/comments", get(list_comments))
        .route("/api/comments/:id", get(get_comment));

    let protected_routes = Router::new()
        .route("/api/verify", get(verify))
        .route("/api/profile", put(update_profile))
        .route("/api/pets", post(create_pet))
        .route("/api/pets/:id", put(update_pet))
        .route("/api/wild-animals", post(create_wild_animal))
        .route("/api/wild-animals/:id", put(update_wild_animal))
        .route("/api/adoptions", post(create_adoption).get(list_adoptions))
        .route("/api/comments", post(create_comment))
        .route(
            "/api/comments/:id",
            put(update_comment).delete(delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticated));

    // Gate order matters: authenticated runs first, then the admin re-read.
    let admin_routes = Router::new()
        .route("/api/user/:id/role", put(update_user_role))
        .route("/api/user/:id/status", put(update_user_status))
        .route("/api/user/:id", put(update_user).delete(delete_user))
        .route("/api/pets/:id", delete(delete_pet))
        .route("/api/wild-animals/:id", delete(delete_wild_animal))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticated));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
