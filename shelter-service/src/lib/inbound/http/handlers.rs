use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::AdoptionDetails;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentDetails;
use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::Pet;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserSummary;
use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::WildAnimal;

pub mod adoptions;
pub mod auth;
pub mod comments;
pub mod pets;
pub mod users;
pub mod wild_animals;

/// Successful response: status code plus the bare document as JSON.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failed response; renders as `{"errorMessage": "..."}` with the status
/// carrying the error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(ErrorBody {
                error_message: message,
            }),
        )
            .into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => ApiError::NotFound(err.to_string()),
            UserError::InvalidCredentials => ApiError::Forbidden(err.to_string()),
            UserError::EmailAlreadyExists
            | UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidRole(_)
            | UserError::InvalidStatus(_) => ApiError::BadRequest(err.to_string()),
            UserError::Hashing(_) | UserError::DatabaseError(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<PetError> for ApiError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::NotFound => ApiError::NotFound(err.to_string()),
            PetError::InvalidPetId(_)
            | PetError::InvalidSpecies(_)
            | PetError::InvalidGender(_)
            | PetError::InvalidStatus(_)
            | PetError::MissingField(_) => ApiError::BadRequest(err.to_string()),
            PetError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<WildAnimalError> for ApiError {
    fn from(err: WildAnimalError) -> Self {
        match err {
            WildAnimalError::NotFound => ApiError::NotFound(err.to_string()),
            WildAnimalError::InvalidWildAnimalId(_)
            | WildAnimalError::InvalidCondition(_)
            | WildAnimalError::InvalidStatus(_)
            | WildAnimalError::MissingField(_) => ApiError::BadRequest(err.to_string()),
            WildAnimalError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<AdoptionError> for ApiError {
    fn from(err: AdoptionError) -> Self {
        match err {
            AdoptionError::PetNotFound => ApiError::NotFound(err.to_string()),
            AdoptionError::InvalidAdoptionId(_)
            | AdoptionError::MissingPet
            | AdoptionError::InvalidPetReference(_)
            | AdoptionError::PetNotAvailable
            | AdoptionError::DuplicateActiveRequest => ApiError::BadRequest(err.to_string()),
            AdoptionError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::NotFound => ApiError::NotFound(err.to_string()),
            CommentError::EditForbidden | CommentError::DeleteForbidden => {
                ApiError::Forbidden(err.to_string())
            }
            CommentError::InvalidCommentId(_)
            | CommentError::InvalidRating(_)
            | CommentError::TextRequired => ApiError::BadRequest(err.to_string()),
            CommentError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// `{"message": "..."}` body for destructive operations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sanitized user document; the password hash never leaves the service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            role: user.role.to_string(),
            status: user.status.to_string(),
            profile_picture: user.profile_picture.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Reference projection of a user embedded in populated reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

impl From<&UserSummary> for UserSummaryData {
    fn from(user: &UserSummary) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetData {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub status: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Pet> for PetData {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.to_string(),
            name: pet.name.clone(),
            species: pet.species.to_string(),
            breed: pet.breed.clone(),
            age: pet.age.clone(),
            gender: pet.gender.to_string(),
            status: pet.status.to_string(),
            image: pet.image.clone(),
            description: pet.description.clone(),
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WildAnimalData {
    pub id: String,
    pub name: String,
    pub species: String,
    pub rescue_date: DateTime<Utc>,
    pub location: String,
    pub condition: String,
    pub injury_type: String,
    pub status: String,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WildAnimal> for WildAnimalData {
    fn from(animal: &WildAnimal) -> Self {
        Self {
            id: animal.id.to_string(),
            name: animal.name.clone(),
            species: animal.species.clone(),
            rescue_date: animal.rescue_date,
            location: animal.location.clone(),
            condition: animal.condition.to_string(),
            injury_type: animal.injury_type.clone(),
            status: animal.status.to_string(),
            image: animal.image.clone(),
            notes: animal.notes.clone(),
            created_at: animal.created_at,
            updated_at: animal.updated_at,
        }
    }
}

/// Adoption populated with its user summary and full pet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionData {
    pub id: String,
    pub user: UserSummaryData,
    pub pet: PetData,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&AdoptionDetails> for AdoptionData {
    fn from(details: &AdoptionDetails) -> Self {
        Self {
            id: details.adoption.id.to_string(),
            user: (&details.user).into(),
            pet: (&details.pet).into(),
            status: details.adoption.status.to_string(),
            notes: details.adoption.notes.clone(),
            created_at: details.adoption.created_at,
            updated_at: details.adoption.updated_at,
        }
    }
}

/// Comment populated with its author.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentData {
    pub id: String,
    pub rating: i32,
    pub comment: String,
    pub user: UserSummaryData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CommentDetails> for CommentData {
    fn from(details: &CommentDetails) -> Self {
        Self {
            id: details.comment.id.to_string(),
            rating: details.comment.rating.value(),
            comment: details.comment.text.clone(),
            user: (&details.user).into(),
            created_at: details.comment.created_at,
            updated_at: details.comment.updated_at,
        }
    }
}
