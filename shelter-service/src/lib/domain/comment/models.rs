use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::comment::errors::CommentIdError;
use crate::domain::comment::errors::RatingError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;

/// User feedback entry with a star rating.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub rating: Rating,
    pub text: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Star rating bounded to 1..=5, defaulting to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i32) -> Result<Self, RatingError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange)
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(5)
    }
}

/// Comment joined with its author for read responses.
#[derive(Debug, Clone)]
pub struct CommentDetails {
    pub comment: Comment,
    pub user: UserSummary,
}

/// Command to post a comment; text has already been checked non-empty.
#[derive(Debug)]
pub struct CreateCommentCommand {
    pub rating: Rating,
    pub text: String,
}

/// Partial update of a comment by its owner.
#[derive(Debug)]
pub struct UpdateCommentCommand {
    pub rating: Option<Rating>,
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert!(matches!(Rating::new(0), Err(RatingError::OutOfRange)));
        assert!(matches!(Rating::new(6), Err(RatingError::OutOfRange)));
    }

    #[test]
    fn test_rating_default_is_five() {
        assert_eq!(Rating::default().value(), 5);
    }
}
