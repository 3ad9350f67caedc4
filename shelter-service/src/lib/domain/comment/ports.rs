use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentDetails;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::models::UpdateCommentCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Port for comment operations.
///
/// Ownership rules live here: mutation is owner-only, deletion is
/// owner-or-admin, both judged against the caller's claims.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// All comments with their authors, newest first.
    async fn list_comments(&self) -> Result<Vec<CommentDetails>, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    async fn get_comment(&self, id: &CommentId) -> Result<CommentDetails, CommentError>;

    async fn create_comment(
        &self,
        user_id: &UserId,
        command: CreateCommentCommand,
    ) -> Result<CommentDetails, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `EditForbidden` - Caller is not the owner
    async fn update_comment(
        &self,
        id: &CommentId,
        caller: &UserId,
        command: UpdateCommentCommand,
    ) -> Result<CommentDetails, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DeleteForbidden` - Caller is neither the owner nor an Admin
    async fn delete_comment(
        &self,
        id: &CommentId,
        caller: &UserId,
        caller_role: Role,
    ) -> Result<(), CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    /// One comment joined with its author.
    async fn find_details(&self, id: &CommentId) -> Result<Option<CommentDetails>, CommentError>;

    /// All comments joined with their authors, newest first.
    async fn list_all_details(&self) -> Result<Vec<CommentDetails>, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    async fn update(&self, comment: Comment) -> Result<Comment, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
}
