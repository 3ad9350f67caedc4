use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::adoption::errors::AdoptionError;
use crate::domain::adoption::models::Adoption;
use crate::domain::adoption::models::AdoptionDetails;
use crate::domain::adoption::models::AdoptionId;
use crate::domain::adoption::models::AdoptionStatus;
use crate::domain::adoption::models::CreateAdoptionCommand;
use crate::domain::adoption::ports::AdoptionRepository;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::pet::errors::PetError;
use crate::domain::pet::models::PetStatus;
use crate::domain::pet::ports::PetRepository;
use crate::domain::user::models::UserId;

/// Domain service for the adoption workflow.
///
/// The one handler in the system that spans two stores: it reads and writes
/// pet status while creating adoption records.
pub struct AdoptionService<AR, PR>
where
    AR: AdoptionRepository,
    PR: PetRepository,
{
    adoptions: Arc<AR>,
    pets: Arc<PR>,
}

impl<AR, PR> AdoptionService<AR, PR>
where
    AR: AdoptionRepository,
    PR: PetRepository,
{
    pub fn new(adoptions: Arc<AR>, pets: Arc<PR>) -> Self {
        Self { adoptions, pets }
    }
}

fn pet_error(e: PetError) -> AdoptionError {
    match e {
        PetError::NotFound => AdoptionError::PetNotFound,
        other => AdoptionError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl<AR, PR> AdoptionServicePort for AdoptionService<AR, PR>
where
    AR: AdoptionRepository,
    PR: PetRepository,
{
    async fn create_adoption(
        &self,
        user_id: &UserId,
        command: CreateAdoptionCommand,
    ) -> Result<AdoptionDetails, AdoptionError> {
        let pet = self
            .pets
            .find_by_id(&command.pet_id)
            .await
            .map_err(pet_error)?
            .ok_or(AdoptionError::PetNotFound)?;

        // Pre-check for the precise error; the conditional reserve below is
        // what actually guards against concurrent requests.
        if pet.status != PetStatus::Available {
            return Err(AdoptionError::PetNotAvailable);
        }

        if self
            .adoptions
            .exists_active_for(user_id, &command.pet_id)
            .await?
        {
            return Err(AdoptionError::DuplicateActiveRequest);
        }

        // Single conditional write: status := Pending WHERE status = Available.
        // Losing the race reads the same as the pet having been taken.
        let reserved = self
            .pets
            .reserve_if_available(&command.pet_id)
            .await
            .map_err(pet_error)?;
        if !reserved {
            return Err(AdoptionError::PetNotAvailable);
        }

        let now = Utc::now();
        let adoption = Adoption {
            id: AdoptionId::new(),
            user_id: *user_id,
            pet_id: command.pet_id,
            status: AdoptionStatus::Pending,
            notes: command.notes,
            created_at: now,
            updated_at: now,
        };

        let created = self.adoptions.create(adoption).await?;

        self.adoptions
            .find_details(&created.id)
            .await?
            .ok_or_else(|| {
                AdoptionError::DatabaseError("created adoption vanished before read-back".into())
            })
    }

    async fn list_adoptions(&self) -> Result<Vec<AdoptionDetails>, AdoptionError> {
        self.adoptions.list_all_details().await
    }
}
