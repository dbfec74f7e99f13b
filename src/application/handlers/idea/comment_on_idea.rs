//! CommentOnIdeaHandler - Command handler for idea comments.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, IdeaId};
use crate::domain::idea::Comment;

#[derive(Debug, Clone)]
pub struct CommentOnIdeaCommand {
    pub idea_id: IdeaId,
    pub author: String,
    pub text: String,
}

pub struct CommentOnIdeaHandler {
    store: Arc<PortalStore>,
}

impl CommentOnIdeaHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CommentOnIdeaCommand) -> Result<Comment, DomainError> {
        let comment = self
            .store
            .apply(|s| s.add_comment(&cmd.idea_id, &cmd.author, &cmd.text))
            .await?;
        info!(idea_id = %cmd.idea_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::seeded_store;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn appends_comment() {
        let (store, _) = seeded_store().await;
        let id = store.snapshot().await.ideas[1].id.clone();
        let handler = CommentOnIdeaHandler::new(store.clone());

        let comment = handler
            .handle(CommentOnIdeaCommand {
                idea_id: id.clone(),
                author: "Akinyi".to_string(),
                text: "Fully support this".to_string(),
            })
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        let idea = snapshot.idea(&id).unwrap();
        assert_eq!(idea.comments.last().unwrap().id, comment.id);
    }

    #[tokio::test]
    async fn unknown_idea_is_not_found() {
        let (store, _) = seeded_store().await;
        let handler = CommentOnIdeaHandler::new(store);

        let err = handler
            .handle(CommentOnIdeaCommand {
                idea_id: IdeaId::new("idea-missing").unwrap(),
                author: "Akinyi".to_string(),
                text: "Hello".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IdeaNotFound);
    }
}
