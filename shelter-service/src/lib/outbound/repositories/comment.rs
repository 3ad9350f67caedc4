use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentDetails;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::Rating;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;
use crate::domain::user::models::Username;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: impl std::fmt::Display) -> CommentError {
    CommentError::DatabaseError(e.to_string())
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    rating: i32,
    body: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn try_into_comment(self) -> Result<Comment, CommentError> {
        Ok(Comment {
            id: CommentId(self.id),
            rating: Rating::new(self.rating)?,
            text: self.body,
            user_id: UserId(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// One row of the comments join: the comment plus its author summary.
#[derive(sqlx::FromRow)]
struct CommentDetailsRow {
    id: Uuid,
    rating: i32,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    username: String,
    email: String,
    profile_picture: Option<String>,
}

impl CommentDetailsRow {
    fn try_into_details(self) -> Result<CommentDetails, CommentError> {
        Ok(CommentDetails {
            comment: Comment {
                id: CommentId(self.id),
                rating: Rating::new(self.rating)?,
                text: self.body,
                user_id: UserId(self.user_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            user: UserSummary {
                id: UserId(self.user_id),
                username: Username::new(self.username).map_err(db_err)?,
                email: EmailAddress::new(self.email).map_err(db_err)?,
                profile_picture: self.profile_picture,
            },
        })
    }
}

const SELECT_DETAILS: &str = r#"
SELECT c.id, c.rating, c.body, c.created_at, c.updated_at,
       u.id AS user_id, u.username, u.email, u.profile_picture
FROM comments c
JOIN users u ON u.id = c.user_id
"#;

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, rating, body, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.rating.value())
        .bind(&comment.text)
        .bind(comment.user_id.0)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, rating, body, user_id, created_at, updated_at \
             FROM comments WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(CommentRow::try_into_comment).transpose()
    }

    async fn find_details(&self, id: &CommentId) -> Result<Option<CommentDetails>, CommentError> {
        let row = sqlx::query_as::<_, CommentDetailsRow>(&format!(
            "{} WHERE c.id = $1",
            SELECT_DETAILS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(CommentDetailsRow::try_into_details).transpose()
    }

    async fn list_all_details(&self) -> Result<Vec<CommentDetails>, CommentError> {
        let rows = sqlx::query_as::<_, CommentDetailsRow>(&format!(
            "{} ORDER BY c.created_at DESC",
            SELECT_DETAILS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(CommentDetailsRow::try_into_details)
            .collect()
    }

    async fn update(&self, comment: Comment) -> Result<Comment, CommentError> {
        let result = sqlx::query(
            "UPDATE comments SET rating = $2, body = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(comment.id.0)
        .bind(comment.rating.value())
        .bind(&comment.text)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound);
        }

        Ok(comment)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound);
        }

        Ok(())
    }
}
