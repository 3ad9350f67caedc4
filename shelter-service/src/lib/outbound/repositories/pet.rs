use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::Gender;
use crate::domain::pet::models::Pet;
use crate::domain::pet::models::PetId;
use crate::domain::pet::models::PetStatus;
use crate::domain::pet::models::Species;
use crate::domain::pet::ports::PetRepository;

pub struct PostgresPetRepository {
    pool: PgPool,
}

impl PostgresPetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PetRow {
    id: Uuid,
    name: String,
    species: String,
    breed: String,
    age: String,
    gender: String,
    status: String,
    image: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PetRow {
    fn try_into_pet(self) -> Result<Pet, PetError> {
        let species: Species = self.species.parse()?;
        let gender: Gender = self.gender.parse()?;
        let status: PetStatus = self.status.parse()?;

        Ok(Pet {
            id: PetId(self.id),
            name: self.name,
            species,
            breed: self.breed,
            age: self.age,
            gender,
            status,
            image: self.image,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, species, breed, age, gender, status, image, \
                              description, created_at, updated_at FROM pets";

#[async_trait]
impl PetRepository for PostgresPetRepository {
    async fn create(&self, pet: Pet) -> Result<Pet, PetError> {
        sqlx::query(
            r#"
            INSERT INTO pets (id, name, species, breed, age, gender, status, image,
                              description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(pet.id.0)
        .bind(&pet.name)
        .bind(pet.species.to_string())
        .bind(&pet.breed)
        .bind(&pet.age)
        .bind(pet.gender.to_string())
        .bind(pet.status.to_string())
        .bind(&pet.image)
        .bind(&pet.description)
        .bind(pet.created_at)
        .bind(pet.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PetError::DatabaseError(e.to_string()))?;

        Ok(pet)
    }

    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, PetError> {
        let row = sqlx::query_as::<_, PetRow>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PetError::DatabaseError(e.to_string()))?;

        row.map(PetRow::try_into_pet).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Pet>, PetError> {
        let rows =
            sqlx::query_as::<_, PetRow>(&format!("{} ORDER BY created_at DESC", SELECT_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| PetError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PetRow::try_into_pet).collect()
    }

    async fn update(&self, pet: Pet) -> Result<Pet, PetError> {
        let result = sqlx::query(
            r#"
            UPDATE pets
            SET name = $2, species = $3, breed = $4, age = $5, gender = $6,
                status = $7, image = $8, description = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(pet.id.0)
        .bind(&pet.name)
        .bind(pet.species.to_string())
        .bind(&pet.breed)
        .bind(&pet.age)
        .bind(pet.gender.to_string())
        .bind(pet.status.to_string())
        .bind(&pet.image)
        .bind(&pet.description)
        .bind(pet.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PetError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PetError::NotFound);
        }

        Ok(pet)
    }

    async fn delete(&self, id: &PetId) -> Result<(), PetError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PetError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PetError::NotFound);
        }

        Ok(())
    }

    async fn reserve_if_available(&self, id: &PetId) -> Result<bool, PetError> {
        // The availability check and the status flip are one statement, so
        // concurrent requests for the same pet cannot both succeed.
        let result = sqlx::query(
            "UPDATE pets SET status = 'Pending', updated_at = $2 \
             WHERE id = $1 AND status = 'Available'",
        )
        .bind(id.0)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| PetError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }
}
