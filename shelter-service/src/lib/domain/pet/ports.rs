use async_trait::async_trait;

use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::CreatePetCommand;
use crate::domain::pet::models::Pet;
use crate::domain::pet::models::PetId;
use crate::domain::pet::models::UpdatePetCommand;

/// Port for pet domain service operations.
#[async_trait]
pub trait PetServicePort: Send + Sync + 'static {
    /// All listings, newest first.
    async fn list_pets(&self) -> Result<Vec<Pet>, PetError>;

    /// # Errors
    /// * `NotFound` - Pet does not exist
    async fn get_pet(&self, id: &PetId) -> Result<Pet, PetError>;

    async fn create_pet(&self, command: CreatePetCommand) -> Result<Pet, PetError>;

    /// # Errors
    /// * `NotFound` - Pet does not exist
    async fn update_pet(&self, id: &PetId, command: UpdatePetCommand) -> Result<Pet, PetError>;

    /// # Errors
    /// * `NotFound` - Pet does not exist
    async fn delete_pet(&self, id: &PetId) -> Result<(), PetError>;
}

/// Persistence operations for pet listings.
#[async_trait]
pub trait PetRepository: Send + Sync + 'static {
    async fn create(&self, pet: Pet) -> Result<Pet, PetError>;

    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, PetError>;

    /// All pets ordered by creation time, newest first.
    async fn list_all(&self) -> Result<Vec<Pet>, PetError>;

    /// # Errors
    /// * `NotFound` - Pet does not exist
    async fn update(&self, pet: Pet) -> Result<Pet, PetError>;

    /// # Errors
    /// * `NotFound` - Pet does not exist
    async fn delete(&self, id: &PetId) -> Result<(), PetError>;

    /// Conditionally move an Available pet to Pending in a single write.
    ///
    /// Returns false when the pet was not Available at write time — the
    /// adoption flow relies on this instead of a read-then-write so two
    /// concurrent requests cannot both reserve the same pet.
    async fn reserve_if_available(&self, id: &PetId) -> Result<bool, PetError>;
}
