//! Forum handlers - discussion threads attached to a project.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, PostId, ProjectId};
use crate::domain::idea::Comment;
use crate::domain::project::{ForumPost, NewForumPost};

#[derive(Debug, Clone)]
pub struct AddForumPostCommand {
    pub project_id: ProjectId,
    pub post: NewForumPost,
}

#[derive(Debug, Clone)]
pub struct AddForumReplyCommand {
    pub project_id: ProjectId,
    pub post_id: PostId,
    pub author: String,
    pub text: String,
}

pub struct AddForumPostHandler {
    store: Arc<PortalStore>,
}

impl AddForumPostHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddForumPostCommand) -> Result<ForumPost, DomainError> {
        let post = self
            .store
            .apply(|s| s.add_forum_post(&cmd.project_id, cmd.post))
            .await?;
        info!(project_id = %cmd.project_id, post_id = %post.id, "forum post added");
        Ok(post)
    }
}

pub struct AddForumReplyHandler {
    store: Arc<PortalStore>,
}

impl AddForumReplyHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddForumReplyCommand) -> Result<Comment, DomainError> {
        let reply = self
            .store
            .apply(|s| s.add_forum_reply(&cmd.project_id, &cmd.post_id, &cmd.author, &cmd.text))
            .await?;
        info!(project_id = %cmd.project_id, post_id = %cmd.post_id, "forum reply added");
        Ok(reply)
    }
}
