use async_trait::async_trait;

use crate::domain::wild_animal::errors::WildAnimalError;
use crate::domain::wild_animal::models::CreateWildAnimalCommand;
use crate::domain::wild_animal::models::UpdateWildAnimalCommand;
use crate::domain::wild_animal::models::WildAnimal;
use crate::domain::wild_animal::models::WildAnimalId;

/// Port for wild-animal rescue case operations.
#[async_trait]
pub trait WildAnimalServicePort: Send + Sync + 'static {
    /// All rescue cases, newest first.
    async fn list_wild_animals(&self) -> Result<Vec<WildAnimal>, WildAnimalError>;

    /// # Errors
    /// * `NotFound` - Case does not exist
    async fn get_wild_animal(&self, id: &WildAnimalId) -> Result<WildAnimal, WildAnimalError>;

    async fn create_wild_animal(
        &self,
        command: CreateWildAnimalCommand,
    ) -> Result<WildAnimal, WildAnimalError>;

    /// # Errors
    /// * `NotFound` - Case does not exist
    async fn update_wild_animal(
        &self,
        id: &WildAnimalId,
        command: UpdateWildAnimalCommand,
    ) -> Result<WildAnimal, WildAnimalError>;

    /// # Errors
    /// * `NotFound` - Case does not exist
    async fn delete_wild_animal(&self, id: &WildAnimalId) -> Result<(), WildAnimalError>;
}

/// Persistence operations for rescue cases.
#[async_trait]
pub trait WildAnimalRepository: Send + Sync + 'static {
    async fn create(&self, animal: WildAnimal) -> Result<WildAnimal, WildAnimalError>;

    async fn find_by_id(&self, id: &WildAnimalId) -> Result<Option<WildAnimal>, WildAnimalError>;

    /// All cases ordered by creation time, newest first.
    async fn list_all(&self) -> Result<Vec<WildAnimal>, WildAnimalError>;

    /// # Errors
    /// * `NotFound` - Case does not exist
    async fn update(&self, animal: WildAnimal) -> Result<WildAnimal, WildAnimalError>;

    /// # Errors
    /// * `NotFound` - Case does not exist
    async fn delete(&self, id: &WildAnimalId) -> Result<(), WildAnimalError>;
}
