use async_trait::async_trait;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::Adoption;
use crate::domain::adoption::models::AdoptionDetails;
use crate::domain::adoption::models::AdoptionId;
use crate::domain::adoption::models::CreateAdoptionCommand;
use crate::domain::pet::models::PetId;
use crate::domain::user::models::UserId;

/// Port for adoption workflow operations.
#[async_trait]
pub trait AdoptionServicePort: Send + Sync + 'static {
    /// File an adoption request for the calling user.
    ///
    /// # Errors
    /// * `PetNotFound` - Target pet does not exist
    /// * `PetNotAvailable` - Pet is not Available (or lost to a concurrent request)
    /// * `DuplicateActiveRequest` - Caller already has a Pending/Approved request for this pet
    /// * `DatabaseError` - Database operation failed
    async fn create_adoption(
        &self,
        user_id: &UserId,
        command: CreateAdoptionCommand,
    ) -> Result<AdoptionDetails, AdoptionError>;

    /// All adoption requests, populated, newest first.
    async fn list_adoptions(&self) -> Result<Vec<AdoptionDetails>, AdoptionError>;
}

/// Persistence operations for adoption requests.
#[async_trait]
pub trait AdoptionRepository: Send + Sync + 'static {
    async fn create(&self, adoption: Adoption) -> Result<Adoption, AdoptionError>;

    /// Whether a Pending/Approved request exists for the (user, pet) pair.
    async fn exists_active_for(
        &self,
        user_id: &UserId,
        pet_id: &PetId,
    ) -> Result<bool, AdoptionError>;

    /// One request joined with its user summary and pet.
    async fn find_details(&self, id: &AdoptionId) -> Result<Option<AdoptionDetails>, AdoptionError>;

    /// All requests joined with their references, newest first.
    async fn list_all_details(&self) -> Result<Vec<AdoptionDetails>, AdoptionError>;
}
