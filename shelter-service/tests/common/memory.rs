//! In-memory repository doubles implementing the domain ports, so the
//! black-box suites can exercise the real router without a database.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use shelter_service::domain::adoption::errors::AdoptionError;
use shelter_service::domain::adoption::models::Adoption;
use shelter_service::domain::adoption::models::AdoptionDetails;
use shelter_service::domain::adoption::models::AdoptionId;
use shelter_service::domain::adoption::ports::AdoptionRepository;
use shelter_service::domain::comment::errors::CommentError;
use shelter_service::domain::comment::models::Comment;
use shelter_service::domain::comment::models::CommentDetails;
use shelter_service::domain::comment::models::CommentId;
use shelter_service::domain::comment::ports::CommentRepository;
use shelter_service::domain::pet::errors::PetError;
use shelter_service::domain::pet::models::Pet;
use shelter_service::domain::pet::models::PetId;
use shelter_service::domain::pet::models::PetStatus;
use shelter_service::domain::pet::ports::PetRepository;
use shelter_service::domain::user::errors::UserError;
use shelter_service::domain::user::models::EmailAddress;
use shelter_service::domain::user::models::Role;
use shelter_service::domain::user::models::User;
use shelter_service::domain::user::models::UserId;
use shelter_service::domain::user::models::UserSummary;
use shelter_service::domain::user::ports::UserRepository;
use shelter_service::domain::wild_animal::errors::WildAnimalError;
use shelter_service::domain::wild_animal::models::WildAnimal;
use shelter_service::domain::wild_animal::models::WildAnimalId;
use shelter_service::domain::wild_animal::ports::WildAnimalRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test backdoor standing in for the admin seeding that happens outside
    /// the HTTP surface in production.
    pub fn promote_to_admin(&self, email: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.email.as_str() == email) {
            user.role = Role::Admin;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists);
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().rev().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists);
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(UserError::NotFound),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != *id);
        if users.len() == before {
            return Err(UserError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: Mutex<Vec<Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn create(&self, pet: Pet) -> Result<Pet, PetError> {
        self.pets.lock().unwrap().push(pet.clone());
        Ok(pet)
    }

    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, PetError> {
        let pets = self.pets.lock().unwrap();
        Ok(pets.iter().find(|p| p.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Pet>, PetError> {
        let pets = self.pets.lock().unwrap();
        Ok(pets.iter().rev().cloned().collect())
    }

    async fn update(&self, pet: Pet) -> Result<Pet, PetError> {
        let mut pets = self.pets.lock().unwrap();
        match pets.iter_mut().find(|p| p.id == pet.id) {
            Some(stored) => {
                *stored = pet.clone();
                Ok(pet)
            }
            None => Err(PetError::NotFound),
        }
    }

    async fn delete(&self, id: &PetId) -> Result<(), PetError> {
        let mut pets = self.pets.lock().unwrap();
        let before = pets.len();
        pets.retain(|p| p.id != *id);
        if pets.len() == before {
            return Err(PetError::NotFound);
        }
        Ok(())
    }

    async fn reserve_if_available(&self, id: &PetId) -> Result<bool, PetError> {
        // Check-and-set under one lock, mirroring the conditional UPDATE.
        let mut pets = self.pets.lock().unwrap();
        match pets.iter_mut().find(|p| p.id == *id) {
            Some(pet) if pet.status == PetStatus::Available => {
                pet.status = PetStatus::Pending;
                pet.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryWildAnimalRepository {
    animals: Mutex<Vec<WildAnimal>>,
}

impl InMemoryWildAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WildAnimalRepository for InMemoryWildAnimalRepository {
    async fn create(&self, animal: WildAnimal) -> Result<WildAnimal, WildAnimalError> {
        self.animals.lock().unwrap().push(animal.clone());
        Ok(animal)
    }

    async fn find_by_id(&self, id: &WildAnimalId) -> Result<Option<WildAnimal>, WildAnimalError> {
        let animals = self.animals.lock().unwrap();
        Ok(animals.iter().find(|a| a.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<WildAnimal>, WildAnimalError> {
        let animals = self.animals.lock().unwrap();
        Ok(animals.iter().rev().cloned().collect())
    }

    async fn update(&self, animal: WildAnimal) -> Result<WildAnimal, WildAnimalError> {
        let mut animals = self.animals.lock().unwrap();
        match animals.iter_mut().find(|a| a.id == animal.id) {
            Some(stored) => {
                *stored = animal.clone();
                Ok(animal)
            }
            None => Err(WildAnimalError::NotFound),
        }
    }

    async fn delete(&self, id: &WildAnimalId) -> Result<(), WildAnimalError> {
        let mut animals = self.animals.lock().unwrap();
        let before = animals.len();
        animals.retain(|a| a.id != *id);
        if animals.len() == before {
            return Err(WildAnimalError::NotFound);
        }
        Ok(())
    }
}

pub struct InMemoryAdoptionRepository {
    adoptions: Mutex<Vec<Adoption>>,
    users: Arc<InMemoryUserRepository>,
    pets: Arc<InMemoryPetRepository>,
}

impl InMemoryAdoptionRepository {
    pub fn new(users: Arc<InMemoryUserRepository>, pets: Arc<InMemoryPetRepository>) -> Self {
        Self {
            adoptions: Mutex::new(Vec::new()),
            users,
            pets,
        }
    }

    async fn join(&self, adoption: Adoption) -> Result<AdoptionDetails, AdoptionError> {
        let user = self
            .users
            .find_by_id(&adoption.user_id)
            .await
            .map_err(|e| AdoptionError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AdoptionError::DatabaseError("dangling user reference".into()))?;
        let pet = self
            .pets
            .find_by_id(&adoption.pet_id)
            .await
            .map_err(|e| AdoptionError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AdoptionError::DatabaseError("dangling pet reference".into()))?;

        Ok(AdoptionDetails {
            user: UserSummary::from(&user),
            adoption,
            pet,
        })
    }
}

#[async_trait]
impl AdoptionRepository for InMemoryAdoptionRepository {
    async fn create(&self, adoption: Adoption) -> Result<Adoption, AdoptionError> {
        self.adoptions.lock().unwrap().push(adoption.clone());
        Ok(adoption)
    }

    async fn exists_active_for(
        &self,
        user_id: &UserId,
        pet_id: &PetId,
    ) -> Result<bool, AdoptionError> {
        let adoptions = self.adoptions.lock().unwrap();
        Ok(adoptions
            .iter()
            .any(|a| a.user_id == *user_id && a.pet_id == *pet_id && a.status.is_active()))
    }

    async fn find_details(
        &self,
        id: &AdoptionId,
    ) -> Result<Option<AdoptionDetails>, AdoptionError> {
        let adoption = {
            let adoptions = self.adoptions.lock().unwrap();
            adoptions.iter().find(|a| a.id == *id).cloned()
        };
        match adoption {
            Some(adoption) => Ok(Some(self.join(adoption).await?)),
            None => Ok(None),
        }
    }

    async fn list_all_details(&self) -> Result<Vec<AdoptionDetails>, AdoptionError> {
        let adoptions: Vec<Adoption> = {
            let adoptions = self.adoptions.lock().unwrap();
            adoptions.iter().rev().cloned().collect()
        };
        let mut details = Vec::with_capacity(adoptions.len());
        for adoption in adoptions {
            details.push(self.join(adoption).await?);
        }
        Ok(details)
    }
}

pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryCommentRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            users,
        }
    }

    async fn join(&self, comment: Comment) -> Result<CommentDetails, CommentError> {
        let user = self
            .users
            .find_by_id(&comment.user_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?
            .ok_or_else(|| CommentError::DatabaseError("dangling user reference".into()))?;

        Ok(CommentDetails {
            user: UserSummary::from(&user),
            comment,
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_details(&self, id: &CommentId) -> Result<Option<CommentDetails>, CommentError> {
        let comment = {
            let comments = self.comments.lock().unwrap();
            comments.iter().find(|c| c.id == *id).cloned()
        };
        match comment {
            Some(comment) => Ok(Some(self.join(comment).await?)),
            None => Ok(None),
        }
    }

    async fn list_all_details(&self) -> Result<Vec<CommentDetails>, CommentError> {
        let comments: Vec<Comment> = {
            let comments = self.comments.lock().unwrap();
            comments.iter().rev().cloned().collect()
        };
        let mut details = Vec::with_capacity(comments.len());
        for comment in comments {
            details.push(self.join(comment).await?);
        }
        Ok(details)
    }

    async fn update(&self, comment: Comment) -> Result<Comment, CommentError> {
        let mut comments = self.comments.lock().unwrap();
        match comments.iter_mut().find(|c| c.id == comment.id) {
            Some(stored) => {
                *stored = comment.clone();
                Ok(comment)
            }
            None => Err(CommentError::NotFound),
        }
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != *id);
        if comments.len() == before {
            return Err(CommentError::NotFound);
        }
        Ok(())
    }
}
