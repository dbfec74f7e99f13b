//! Append-only discussion comments.
//!
//! The same shape is used for comments on ideas and replies on forum posts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require, CommentId, Timestamp, ValidationError};

/// A single immutable comment. The author is a display name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub date: Timestamp,
}

impl Comment {
    /// Creates a comment stamped with a fresh id and the current time.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        require("text", &text)?;
        Ok(Self {
            id: CommentId::generate(),
            author: author.into(),
            text,
            date: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_gets_id_and_timestamp() {
        let comment = Comment::new("Citizen", "Great idea").unwrap();
        assert!(comment.id.as_str().starts_with("comment-"));
        assert_eq!(comment.author, "Citizen");
        assert_eq!(comment.text, "Great idea");
    }

    #[test]
    fn blank_comment_is_rejected() {
        assert_eq!(
            Comment::new("Citizen", "  "),
            Err(ValidationError::empty_field("text"))
        );
    }
}
