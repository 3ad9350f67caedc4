use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::Condition;
use crate::domain::wild_animal::models::RescueStatus;
use crate::domain::wild_animal::models::WildAnimal;
use crate::domain::wild_animal::models::WildAnimalId;
use crate::domain::wild_animal::ports::WildAnimalRepository;

pub struct PostgresWildAnimalRepository {
    pool: PgPool,
}

impl PostgresWildAnimalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WildAnimalRow {
    id: Uuid,
    name: String,
    species: String,
    rescue_date: DateTime<Utc>,
    location: String,
    condition: String,
    injury_type: String,
    status: String,
    image: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WildAnimalRow {
    fn try_into_animal(self) -> Result<WildAnimal, WildAnimalError> {
        let condition: Condition = self.condition.parse()?;
        let status: RescueStatus = self.status.parse()?;

        Ok(WildAnimal {
            id: WildAnimalId(self.id),
            name: self.name,
            species: self.species,
            rescue_date: self.rescue_date,
            location: self.location,
            condition,
            injury_type: self.injury_type,
            status,
            image: self.image,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, species, rescue_date, location, condition, \
                              injury_type, status, image, notes, created_at, updated_at \
                              FROM wild_animals";

#[async_trait]
impl WildAnimalRepository for PostgresWildAnimalRepository {
    async fn create(&self, animal: WildAnimal) -> Result<WildAnimal, WildAnimalError> {
        sqlx::query(
            r#"
            INSERT INTO wild_animals (id, name, species, rescue_date, location, condition,
                                      injury_type, status, image, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(animal.id.0)
        .bind(&animal.name)
        .bind(&animal.species)
        .bind(animal.rescue_date)
        .bind(&animal.location)
        .bind(animal.condition.to_string())
        .bind(&animal.injury_type)
        .bind(animal.status.to_string())
        .bind(&animal.image)
        .bind(&animal.notes)
        .bind(animal.created_at)
        .bind(animal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| WildAnimalError::DatabaseError(e.to_string()))?;

        Ok(animal)
    }

    async fn find_by_id(&self, id: &WildAnimalId) -> Result<Option<WildAnimal>, WildAnimalError> {
        let row = sqlx::query_as::<_, WildAnimalRow>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| WildAnimalError::DatabaseError(e.to_string()))?;

        row.map(WildAnimalRow::try_into_animal).transpose()
    }

    async fn list_all(&self) -> Result<Vec<WildAnimal>, WildAnimalError> {
        let rows = sqlx::query_as::<_, WildAnimalRow>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WildAnimalError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(WildAnimalRow::try_into_animal)
            .collect()
    }

    async fn update(&self, animal: WildAnimal) -> Result<WildAnimal, WildAnimalError> {
        let result = sqlx::query(
            r#"
            UPDATE wild_animals
            SET name = $2, species = $3, rescue_date = $4, location = $5, condition = $6,
                injury_type = $7, status = $8, image = $9, notes = $10, updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(animal.id.0)
        .bind(&animal.name)
        .bind(&animal.species)
        .bind(animal.rescue_date)
        .bind(&animal.location)
        .bind(animal.condition.to_string())
        .bind(&animal.injury_type)
        .bind(animal.status.to_string())
        .bind(&animal.image)
        .bind(&animal.notes)
        .bind(animal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| WildAnimalError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(WildAnimalError::NotFound);
        }

        Ok(animal)
    }

    async fn delete(&self, id: &WildAnimalId) -> Result<(), WildAnimalError> {
        let result = sqlx::query("DELETE FROM wild_animals WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| WildAnimalError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(WildAnimalError::NotFound);
        }

        Ok(())
    }
}
