use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::CreatePetCommand;
use crate::domain::pet::models::Pet;
use crate::domain::pet::models::PetId;
use crate::domain::pet::models::UpdatePetCommand;
use crate::domain::pet::ports::PetRepository;
use crate::domain::pet::ports::PetServicePort;

/// Domain service implementation for pet listings.
pub struct PetService<PR>
where
    PR: PetRepository,
{
    repository: Arc<PR>,
}

impl<PR> PetService<PR>
where
    PR: PetRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PetServicePort for PetService<PR>
where
    PR: PetRepository,
{
    async fn list_pets(&self) -> Result<Vec<Pet>, PetError> {
        self.repository.list_all().await
    }

    async fn get_pet(&self, id: &PetId) -> Result<Pet, PetError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PetError::NotFound)
    }

    async fn create_pet(&self, command: CreatePetCommand) -> Result<Pet, PetError> {
        let now = Utc::now();
        let pet = Pet {
            id: PetId::new(),
            name: command.name,
            species: command.species,
            breed: command.breed,
            age: command.age,
            gender: command.gender,
            status: command.status,
            image: command.image,
            description: command.description,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(pet).await
    }

    async fn update_pet(&self, id: &PetId, command: UpdatePetCommand) -> Result<Pet, PetError> {
        let mut pet = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PetError::NotFound)?;

        if let Some(name) = command.name {
            pet.name = name;
        }
        if let Some(species) = command.species {
            pet.species = species;
        }
        if let Some(breed) = command.breed {
            pet.breed = breed;
        }
        if let Some(age) = command.age {
            pet.age = age;
        }
        if let Some(gender) = command.gender {
            pet.gender = gender;
        }
        if let Some(status) = command.status {
            pet.status = status;
        }
        if let Some(image) = command.image {
            pet.image = Some(image);
        }
        if let Some(description) = command.description {
            pet.description = Some(description);
        }
        pet.updated_at = Utc::now();

        self.repository.update(pet).await
    }

    async fn delete_pet(&self, id: &PetId) -> Result<(), PetError> {
        self.repository.delete(id).await
    }
}
