use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentDetails;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::models::UpdateCommentCommand;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Domain service implementation for comments.
pub struct CommentService<CR>
where
    CR: CommentRepository,
{
    repository: Arc<CR>,
}

impl<CR> CommentService<CR>
where
    CR: CommentRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CommentServicePort for CommentService<CR>
where
    CR: CommentRepository,
{
    async fn list_comments(&self) -> Result<Vec<CommentDetails>, CommentError> {
        self.repository.list_all_details().await
    }

    async fn get_comment(&self, id: &CommentId) -> Result<CommentDetails, CommentError> {
        self.repository
            .find_details(id)
            .await?
            .ok_or(CommentError::NotFound)
    }

    async fn create_comment(
        &self,
        user_id: &UserId,
        command: CreateCommentCommand,
    ) -> Result<CommentDetails, CommentError> {
        let now = Utc::now();
        let comment = Comment {
            id: CommentId::new(),
            rating: command.rating,
            text: command.text,
            user_id: *user_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(comment).await?;

        self.repository
            .find_details(&created.id)
            .await?
            .ok_or(CommentError::NotFound)
    }

    async fn update_comment(
        &self,
        id: &CommentId,
        caller: &UserId,
        command: UpdateCommentCommand,
    ) -> Result<CommentDetails, CommentError> {
        let mut comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound)?;

        if comment.user_id != *caller {
            return Err(CommentError::EditForbidden);
        }

        if let Some(rating) = command.rating {
            comment.rating = rating;
        }
        if let Some(text) = command.text {
            comment.text = text;
        }
        comment.updated_at = Utc::now();

        let updated = self.repository.update(comment).await?;

        self.repository
            .find_details(&updated.id)
            .await?
            .ok_or(CommentError::NotFound)
    }

    async fn delete_comment(
        &self,
        id: &CommentId,
        caller: &UserId,
        caller_role: Role,
    ) -> Result<(), CommentError> {
        let comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound)?;

        if comment.user_id != *caller && !caller_role.is_admin() {
            return Err(CommentError::DeleteForbidden);
        }

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::comment::models::Rating;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserSummary;
    use crate::domain::user::models::Username;

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;
            async fn find_details(&self, id: &CommentId) -> Result<Option<CommentDetails>, CommentError>;
            async fn list_all_details(&self) -> Result<Vec<CommentDetails>, CommentError>;
            async fn update(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
        }
    }

    fn stored_comment(owner: UserId) -> Comment {
        let now = Utc::now();
        Comment {
            id: CommentId::new(),
            rating: Rating::default(),
            text: "Lovely shelter".to_string(),
            user_id: owner,
            created_at: now,
            updated_at: now,
        }
    }

    fn details(comment: Comment) -> CommentDetails {
        CommentDetails {
            user: UserSummary {
                id: comment.user_id,
                username: Username::new("ark_fan".to_string()).unwrap(),
                email: EmailAddress::new("fan@example.com".to_string()).unwrap(),
                profile_picture: None,
            },
            comment,
        }
    }

    #[tokio::test]
    async fn test_create_comment_defaults_rating() {
        let mut repository = MockTestCommentRepository::new();
        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |comment| comment.rating.value() == 5 && comment.user_id == owner)
            .times(1)
            .returning(|comment| Ok(comment));

        repository
            .expect_find_details()
            .times(1)
            .returning(move |id| {
                let mut comment = stored_comment(owner);
                comment.id = *id;
                Ok(Some(details(comment)))
            });

        let service = CommentService::new(Arc::new(repository));

        let command = CreateCommentCommand {
            rating: Rating::default(),
            text: "Lovely shelter".to_string(),
        };

        let created = service.create_comment(&owner, command).await.unwrap();
        assert_eq!(created.comment.rating.value(), 5);
    }

    #[tokio::test]
    async fn test_update_comment_rejects_non_owner() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let stranger = UserId::new();
        let existing = stored_comment(owner);

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().times(0);

        let service = CommentService::new(Arc::new(repository));

        let command = UpdateCommentCommand {
            rating: None,
            text: Some("edited".to_string()),
        };

        let result = service
            .update_comment(&CommentId::new(), &stranger, command)
            .await;
        assert!(matches!(result, Err(CommentError::EditForbidden)));
    }

    #[tokio::test]
    async fn test_delete_comment_owner_allowed() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let existing = stored_comment(owner);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_delete()
            .withf(move |lookup| *lookup == id)
            .times(1)
            .returning(|_| Ok(()));

        let service = CommentService::new(Arc::new(repository));

        let result = service.delete_comment(&id, &owner, Role::User).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_comment_admin_overrides_ownership() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let admin = UserId::new();
        let existing = stored_comment(owner);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_delete().times(1).returning(|_| Ok(()));

        let service = CommentService::new(Arc::new(repository));

        let result = service.delete_comment(&id, &admin, Role::Admin).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_comment_stranger_forbidden() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let stranger = UserId::new();
        let existing = stored_comment(owner);
        let id = existing.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_delete().times(0);

        let service = CommentService::new(Arc::new(repository));

        let result = service.delete_comment(&id, &stranger, Role::Volunteer).await;
        assert!(matches!(result, Err(CommentError::DeleteForbidden)));
    }
}
