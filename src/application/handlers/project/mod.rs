//! Official project handlers.

mod add_progress_report;
mod create_project;
mod forum;
mod get_project;
mod list_projects;
mod update_project;

pub use add_progress_report::{AddProgressReportCommand, AddProgressReportHandler};
pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use forum::{AddForumPostCommand, AddForumPostHandler, AddForumReplyCommand, AddForumReplyHandler};
pub use get_project::{GetProjectHandler, ProjectDetail};
pub use list_projects::ListProjectsHandler;
pub use update_project::{UpdateProjectCommand, UpdateProjectHandler};
