use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::CreateWildAnimalCommand;
use crate::domain::wild_animal::models::UpdateWildAnimalCommand;
use crate::domain::wild_animal::models::WildAnimal;
use crate::domain::wild_animal::models::WildAnimalId;
use crate::domain::wild_animal::ports::WildAnimalRepository;
use crate::domain::wild_animal::ports::WildAnimalServicePort;

/// Domain service implementation for wild-animal rescue cases.
pub struct WildAnimalService<WR>
where
    WR: WildAnimalRepository,
{
    repository: Arc<WR>,
}

impl<WR> WildAnimalService<WR>
where
    WR: WildAnimalRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<WR> WildAnimalServicePort for WildAnimalService<WR>
where
    WR: WildAnimalRepository,
{
    async fn list_wild_animals(&self) -> Result<Vec<WildAnimal>, WildAnimalError> {
        self.repository.list_all().await
    }

    async fn get_wild_animal(&self, id: &WildAnimalId) -> Result<WildAnimal, WildAnimalError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WildAnimalError::NotFound)
    }

    async fn create_wild_animal(
        &self,
        command: CreateWildAnimalCommand,
    ) -> Result<WildAnimal, WildAnimalError> {
        let now = Utc::now();
        let animal = WildAnimal {
            id: WildAnimalId::new(),
            name: command.name,
            species: command.species,
            rescue_date: command.rescue_date.unwrap_or(now),
            location: command.location,
            condition: command.condition,
            injury_type: command.injury_type,
            status: command.status,
            image: command.image,
            notes: command.notes,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(animal).await
    }

    async fn update_wild_animal(
        &self,
        id: &WildAnimalId,
        command: UpdateWildAnimalCommand,
    ) -> Result<WildAnimal, WildAnimalError> {
        let mut animal = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(WildAnimalError::NotFound)?;

        if let Some(name) = command.name {
            animal.name = name;
        }
        if let Some(species) = command.species {
            animal.species = species;
        }
        if let Some(rescue_date) = command.rescue_date {
            animal.rescue_date = rescue_date;
        }
        if let Some(location) = command.location {
            animal.location = location;
        }
        if let Some(condition) = command.condition {
            animal.condition = condition;
        }
        if let Some(injury_type) = command.injury_type {
            animal.injury_type = injury_type;
        }
        if let Some(status) = command.status {
            animal.status = status;
        }
        if let Some(image) = command.image {
            animal.image = Some(image);
        }
        if let Some(notes) = command.notes {
            animal.notes = Some(notes);
        }
        animal.updated_at = Utc::now();

        self.repository.update(animal).await
    }

    async fn delete_wild_animal(&self, id: &WildAnimalId) -> Result<(), WildAnimalError> {
        self.repository.delete(id).await
    }
}
