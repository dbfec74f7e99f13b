//! Idea command handlers.

mod comment_on_idea;
mod convert_idea;
mod enhance_description;
mod list_ideas;
mod submit_idea;
mod update_idea_status;
mod vote_idea;

pub use comment_on_idea::{CommentOnIdeaCommand, CommentOnIdeaHandler};
pub use convert_idea::{ConvertIdeaCommand, ConvertIdeaHandler};
pub use enhance_description::EnhanceDescriptionHandler;
pub use list_ideas::ListIdeasHandler;
pub use submit_idea::{SubmitIdeaCommand, SubmitIdeaHandler, SubmitIdeaResult};
pub use update_idea_status::{UpdateIdeaStatusCommand, UpdateIdeaStatusHandler};
pub use vote_idea::{VoteIdeaCommand, VoteIdeaHandler};
