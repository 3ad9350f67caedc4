use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::Adoption;
use crate::domain::adoption::models::AdoptionDetails;
use crate::domain::adoption::models::AdoptionId;
use crate::domain::adoption::models::AdoptionStatus;
use crate::domain::adoption::ports::AdoptionRepository;
use crate::domain::pet::models::Gender;
use crate::domain::pet::models::Pet;
use crate::domain::pet::models::PetId;
use crate::domain::pet::models::PetStatus;
use crate::domain::pet::models::Species;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;
use crate::domain::user::models::Username;

pub struct PostgresAdoptionRepository {
    pool: PgPool,
}

impl PostgresAdoptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: impl std::fmt::Display) -> AdoptionError {
    AdoptionError::DatabaseError(e.to_string())
}

/// One row of the adoptions join: the request plus its user summary and pet.
#[derive(sqlx::FromRow)]
struct AdoptionDetailsRow {
    id: Uuid,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    username: String,
    email: String,
    profile_picture: Option<String>,
    pet_id: Uuid,
    pet_name: String,
    pet_species: String,
    pet_breed: String,
    pet_age: String,
    pet_gender: String,
    pet_status: String,
    pet_image: Option<String>,
    pet_description: Option<String>,
    pet_created_at: DateTime<Utc>,
    pet_updated_at: DateTime<Utc>,
}

impl AdoptionDetailsRow {
    fn try_into_details(self) -> Result<AdoptionDetails, AdoptionError> {
        let status: AdoptionStatus = self.status.parse().map_err(db_err)?;
        let species: Species = self.pet_species.parse().map_err(db_err)?;
        let gender: Gender = self.pet_gender.parse().map_err(db_err)?;
        let pet_status: PetStatus = self.pet_status.parse().map_err(db_err)?;

        Ok(AdoptionDetails {
            adoption: Adoption {
                id: AdoptionId(self.id),
                user_id: UserId(self.user_id),
                pet_id: PetId(self.pet_id),
                status,
                notes: self.notes,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            user: UserSummary {
                id: UserId(self.user_id),
                username: Username::new(self.username).map_err(db_err)?,
                email: EmailAddress::new(self.email).map_err(db_err)?,
                profile_picture: self.profile_picture,
            },
            pet: Pet {
                id: PetId(self.pet_id),
                name: self.pet_name,
                species,
                breed: self.pet_breed,
                age: self.pet_age,
                gender,
                status: pet_status,
                image: self.pet_image,
                description: self.pet_description,
                created_at: self.pet_created_at,
                updated_at: self.pet_updated_at,
            },
        })
    }
}

const SELECT_DETAILS: &str = r#"
SELECT a.id, a.status, a.notes, a.created_at, a.updated_at,
       u.id AS user_id, u.username, u.email, u.profile_picture,
       p.id AS pet_id, p.name AS pet_name, p.species AS pet_species,
       p.breed AS pet_breed, p.age AS pet_age, p.gender AS pet_gender,
       p.status AS pet_status, p.image AS pet_image,
       p.description AS pet_description, p.created_at AS pet_created_at,
       p.updated_at AS pet_updated_at
FROM adoptions a
JOIN users u ON u.id = a.user_id
JOIN pets p ON p.id = a.pet_id
"#;

#[async_trait]
impl AdoptionRepository for PostgresAdoptionRepository {
    async fn create(&self, adoption: Adoption) -> Result<Adoption, AdoptionError> {
        sqlx::query(
            r#"
            INSERT INTO adoptions (id, user_id, pet_id, status, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(adoption.id.0)
        .bind(adoption.user_id.0)
        .bind(adoption.pet_id.0)
        .bind(adoption.status.to_string())
        .bind(&adoption.notes)
        .bind(adoption.created_at)
        .bind(adoption.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(adoption)
    }

    async fn exists_active_for(
        &self,
        user_id: &UserId,
        pet_id: &PetId,
    ) -> Result<bool, AdoptionError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM adoptions \
             WHERE user_id = $1 AND pet_id = $2 AND status IN ('Pending', 'Approved'))",
        )
        .bind(user_id.0)
        .bind(pet_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(exists)
    }

    async fn find_details(
        &self,
        id: &AdoptionId,
    ) -> Result<Option<AdoptionDetails>, AdoptionError> {
        let row = sqlx::query_as::<_, AdoptionDetailsRow>(&format!(
            "{} WHERE a.id = $1",
            SELECT_DETAILS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(AdoptionDetailsRow::try_into_details).transpose()
    }

    async fn list_all_details(&self) -> Result<Vec<AdoptionDetails>, AdoptionError> {
        let rows = sqlx::query_as::<_, AdoptionDetailsRow>(&format!(
            "{} ORDER BY a.created_at DESC",
            SELECT_DETAILS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(AdoptionDetailsRow::try_into_details)
            .collect()
    }
}
