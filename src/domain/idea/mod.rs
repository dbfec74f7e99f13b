//! Citizen project ideas and their discussion comments.

mod comment;
mod idea;

pub use comment::Comment;
pub use idea::{IdeaStatus, NewIdea, ProjectIdea, SubmissionChannel};
