//! Official county projects, citizen progress reports and project forums.

mod forum;
mod project;
mod report;

pub use forum::{ForumPost, NewForumPost};
pub use project::{
    Implementer, NewProject, OfficialProject, ProjectStatus, Timeline, COUNTY_WIDE,
};
pub use report::{NewReport, ProgressReport, ReportEvidence, VerificationStatus};
