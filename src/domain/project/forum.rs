//! Per-project discussion forum.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require, PostId, Timestamp, ValidationError};
use crate::domain::idea::Comment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    /// Oldest first.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl ForumPost {
    /// Returns a copy with the reply appended.
    pub fn with_reply(&self, reply: Comment) -> Self {
        let mut replies = self.replies.clone();
        replies.push(reply);
        Self {
            replies,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewForumPost {
    pub author: String,
    pub title: String,
    pub body: String,
}

impl NewForumPost {
    pub fn into_post(self) -> Result<ForumPost, ValidationError> {
        require("title", &self.title)?;
        require("body", &self.body)?;
        Ok(ForumPost {
            id: PostId::generate(),
            author: self.author,
            title: self.title,
            body: self.body,
            date: Timestamp::now(),
            replies: Vec::new(),
        })
    }
}
