use thiserror::Error;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid comment id: {0}")]
    InvalidFormat(String),
}

/// Error for Rating validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating must be between 1 and 5")]
    OutOfRange,
}

/// Top-level error for comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment id: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("{0}")]
    InvalidRating(#[from] RatingError),

    #[error("Comment is required")]
    TextRequired,

    #[error("Comment not found")]
    NotFound,

    #[error("You can only edit your own comments")]
    EditForbidden,

    #[error("You can only delete your own comments")]
    DeleteForbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
